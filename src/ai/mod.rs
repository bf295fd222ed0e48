//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{CompletionService, LlmClient, estimate_tokens};
pub use prompt_builder::build_prompt;

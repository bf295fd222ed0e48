//! Kakao i Open Builder skill protocol: request parsing and response payloads

pub mod parsing;
pub mod response_builder;

pub use parsing::parse_skill_request;
pub use response_builder::{OutboundEnvelope, create_callback_ack, format_result};

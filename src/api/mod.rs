//! HTTP adapter for the Kakao skill endpoints

pub mod handler;
pub mod helpers;

// Re-export the router builder for convenience
pub use handler::{AppState, router};

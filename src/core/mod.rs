//! Configuration and domain models shared by the adapter and the workers

pub mod config;
pub mod models;

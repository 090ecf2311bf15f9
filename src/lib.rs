pub mod agent;
pub mod commands;
pub mod comms;
pub mod platform;
pub mod security;
pub mod synthesis;
pub mod utils;

// Crate version exposed for runtime queries
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

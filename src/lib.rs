pub mod commands;
pub mod config;
pub mod publish;
pub mod reporter;

// Re-export commonly used types
pub use config::Config;
pub use publish::{PublishError, PublishRequest, Publisher};

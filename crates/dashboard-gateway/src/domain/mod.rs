//! Gateway domain: configuration and errors.

pub mod config;
pub mod error;

pub use config::{
    ArtifactsConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, PageConfig, TimeoutConfig,
};
pub use error::{ErrorCode, GatewayError, ViewerError};

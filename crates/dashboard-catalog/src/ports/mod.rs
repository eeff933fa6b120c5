//! # Ports Layer
//!
//! - `inbound`: the presentation API used by the gateway
//! - `outbound`: artifact storage

pub mod inbound;
pub mod outbound;

pub use inbound::PresentationApi;
pub use outbound::ArtifactSource;

//! # Adapters Layer
//!
//! Implementations of the outbound ports.

#[cfg(test)]
pub(crate) mod denied_source;
pub mod fs_source;

pub use fs_source::FsArtifactSource;

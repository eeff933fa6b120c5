//! Cross-crate integration flows.

#[cfg(test)]
pub mod support;

pub mod downloads;
pub mod selection_flows;

//! # Thesis Dashboard Test Suite
//!
//! Unified test crate for flows that cross the catalog and the gateway.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── support.rs          # Temporary artifact trees, router helpers
//!     ├── selection_flows.rs  # Menu option → view model → page
//!     └── downloads.rs        # Descargas listing and spreadsheet transfer
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dashboard-tests
//! cargo test -p dashboard-tests integration::downloads::
//! ```

pub mod integration;

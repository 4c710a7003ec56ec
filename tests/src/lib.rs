//! # MNPRO Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── genesis_flows.rs   # chain-params genesis vs. shared-types model
//!     └── params_flows.rs    # deriving and building custom parameter sets
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mnpro-tests
//! cargo test -p mnpro-tests integration::genesis_flows
//! ```

pub mod integration;

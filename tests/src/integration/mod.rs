//! Cross-crate integration flows.

pub mod genesis_flows;
pub mod params_flows;

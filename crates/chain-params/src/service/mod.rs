//! Service layer: the parameter registry and its process-wide instance.

pub mod global;
pub mod registry;

pub use global::{params, params_for, registry, select_params, select_params_from_env};
pub use registry::ParamsRegistry;

#[cfg(any(test, feature = "test-utils"))]
pub use global::modifiable_params;
#[cfg(any(test, feature = "test-utils"))]
pub use registry::ModifiableParams;

//! Reading process-wide parameters before any selection.

use chain_params::{modifiable_params, params};

#[test]
#[should_panic(expected = "no network selected")]
fn test_params_before_select_panics() {
    let _ = params();
}

#[test]
#[should_panic(expected = "only modifiable on the unittest network")]
fn test_modifiable_params_before_select_panics() {
    let _ = modifiable_params();
}

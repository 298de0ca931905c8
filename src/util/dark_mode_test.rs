#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

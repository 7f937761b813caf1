#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn no_session_outside_the_browser() {
    assert!(read_access().is_none());
    assert!(!has_session());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store(&TokenPair {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
    });
    clear();
    assert!(!has_session());
}

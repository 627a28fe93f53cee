#![cfg(feature = "verify-layout")]

use pmacct_bindings::layout::{
    self, CHECKED_FUNCTIONS, DECLARED, DECLARED_CONSTANTS, GENERATED, GENERATED_CONSTANTS,
};
use pmacct_bindings::surface::{self, render_wrapper, HeaderSet};

#[test]
fn declared_layout_matches_generated_bindings() {
    if let Err(mismatches) = layout::verify(GENERATED, DECLARED) {
        for mismatch in &mismatches {
            eprintln!("{}", mismatch);
        }
        panic!("{} layout mismatches", mismatches.len());
    }
}

#[test]
#[cfg(all(target_os = "linux", target_pointer_width = "64"))]
fn snapshot_matches_generated_bindings() {
    assert_eq!(layout::verify(layout::snapshot().unwrap(), GENERATED), Ok(()));
}

#[test]
fn declared_constants_match_generated_bindings() {
    assert_eq!(GENERATED_CONSTANTS.len(), DECLARED_CONSTANTS.len());
    if let Err(mismatches) = layout::verify_constants(GENERATED_CONSTANTS, DECLARED_CONSTANTS) {
        for mismatch in &mismatches {
            eprintln!("{}", mismatch);
        }
        panic!("{} constant mismatches", mismatches.len());
    }
}

#[test]
fn every_function_signature_is_checked() {
    // signatures are coerced at compile time, this only guards the list itself
    for function in surface::FUNCTIONS {
        assert!(CHECKED_FUNCTIONS.contains(function), "{} is unchecked", function);
    }
}

#[test]
fn generation_is_reproducible() {
    assert_eq!(
        include_str!(concat!(env!("OUT_DIR"), "/imported.h")),
        render_wrapper(HeaderSet::from_features())
    );
    assert_eq!(
        include_str!(concat!(env!("OUT_DIR"), "/pmacct_generated.rs")),
        include_str!(concat!(env!("OUT_DIR"), "/pmacct_generated.rerun.rs"))
    );
}

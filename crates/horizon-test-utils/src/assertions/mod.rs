//! Assertion helpers for HorizonDB tests.
//!
//! Every helper comes in two forms: a `check_*` function returning
//! `Result<(), AssertionError>`, and an `assert_*` function that panics with
//! the error message so the current test fails at the caller's location.

mod collections;
mod messages;

pub use collections::*;
pub use messages::*;

use crate::error::AssertionError;
use tracing::{debug, error};

/// Logs a failed check and hands the error back.
pub(crate) fn reject(err: AssertionError) -> AssertionError {
    debug!(kind = err.kind(), error = %err, "Assertion check failed");
    err
}

/// Turns a failed check into a test failure.
#[track_caller]
pub(crate) fn raise(result: Result<(), AssertionError>) {
    if let Err(err) = result {
        let location = std::panic::Location::caller();
        error!(
            kind = err.kind(),
            file = location.file(),
            line = location.line(),
            "Assertion failed: {}",
            err
        );
        panic!("{}", err);
    }
}

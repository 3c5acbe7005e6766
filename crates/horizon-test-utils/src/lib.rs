//! Testing utilities for HorizonDB.
//!
//! Assertion helpers for verifying the contents of iterators, lists,
//! collections, maps and arrays, and the messages of errors. See
//! [`assertions`] for the function forms and the crate-level macros for the
//! variadic forms.

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod assertions;
pub mod config;
pub mod error;
pub mod logging;

pub use config::AssertConfig;
pub use error::{AssertionError, ContainerKind};

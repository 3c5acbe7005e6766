//! Assertions over error messages.

use std::error::Error;
use std::fmt::{Debug, Display};

use super::{raise, reject};
use crate::config;
use crate::error::AssertionError;

fn mismatch(text: &str, message: String) -> AssertionError {
    reject(AssertionError::MessageMismatch {
        expected: text.to_string(),
        message: config::current().truncate(message),
    })
}

/// Checks that the rendered message of `error` contains `text`.
///
/// # Arguments
///
/// * `text` - The text the message must contain
/// * `error` - The error whose `Display` output is inspected
///
/// # Returns
///
/// * `Ok(())` - If the message contains `text`
/// * `Err(AssertionError)` - `MessageMismatch` naming both `text` and the message
pub fn check_error_message_contains<E>(text: &str, error: &E) -> Result<(), AssertionError>
where
    E: Display + ?Sized,
{
    let message = error.to_string();
    if !message.contains(text) {
        return Err(mismatch(text, message));
    }

    Ok(())
}

/// Checks that `message` is present and contains `text`. An absent message
/// is a failure of its own.
///
/// # Arguments
///
/// * `text` - The text the message must contain
/// * `message` - The message, if there is one
///
/// # Returns
///
/// * `Ok(())` - If the message is present and contains `text`
/// * `Err(AssertionError)` - `MissingMessage` when absent, `MessageMismatch` otherwise
pub fn check_message_contains(text: &str, message: Option<&str>) -> Result<(), AssertionError> {
    match message {
        Some(message) if message.contains(text) => Ok(()),
        Some(message) => Err(mismatch(text, message.to_string())),
        None => Err(reject(AssertionError::MissingMessage {
            expected: text.to_string(),
            detail: String::new(),
        })),
    }
}

/// Checks that `result` is an error whose message contains `text`.
///
/// # Arguments
///
/// * `text` - The text the error message must contain
/// * `result` - The result expected to be an `Err`
///
/// # Returns
///
/// * `Ok(())` - If `result` is an error whose message contains `text`
/// * `Err(AssertionError)` - `MissingMessage` for an `Ok` result, `MessageMismatch` otherwise
pub fn check_err_contains<T, E>(text: &str, result: &Result<T, E>) -> Result<(), AssertionError>
where
    T: Debug,
    E: Display,
{
    match result {
        Ok(value) => Err(reject(AssertionError::MissingMessage {
            expected: text.to_string(),
            detail: format!(", the result was Ok({})", config::current().render(value)),
        })),
        Err(e) => check_error_message_contains(text, e),
    }
}

/// Checks that `text` appears in `error` or in any error of its source
/// chain. On failure the whole chain is reported, joined by `": "`.
///
/// # Arguments
///
/// * `text` - The text one of the messages must contain
/// * `error` - The outermost error of the chain
///
/// # Returns
///
/// * `Ok(())` - If any error in the chain has a message containing `text`
/// * `Err(AssertionError)` - `MessageMismatch` carrying the joined chain
pub fn check_error_chain_contains(text: &str, error: &dyn Error) -> Result<(), AssertionError> {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }

    if messages.iter().any(|message| message.contains(text)) {
        return Ok(());
    }

    Err(mismatch(text, messages.join(": ")))
}

/// Panicking form of [`check_error_message_contains`].
#[track_caller]
pub fn assert_error_message_contains<E>(text: &str, error: &E)
where
    E: Display + ?Sized,
{
    raise(check_error_message_contains(text, error));
}

/// Panicking form of [`check_message_contains`].
#[track_caller]
pub fn assert_message_contains(text: &str, message: Option<&str>) {
    raise(check_message_contains(text, message));
}

/// Panicking form of [`check_err_contains`].
#[track_caller]
pub fn assert_err_contains<T, E>(text: &str, result: &Result<T, E>)
where
    T: Debug,
    E: Display,
{
    raise(check_err_contains(text, result));
}

/// Panicking form of [`check_error_chain_contains`].
#[track_caller]
pub fn assert_error_chain_contains(text: &str, error: &dyn Error) {
    raise(check_error_chain_contains(text, error));
}

//! Diagnostics configuration.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Environment variable overriding [`AssertConfig::max_rendered_len`].
pub const MAX_RENDERED_ENV: &str = "HORIZON_ASSERT_MAX_RENDERED";

const DEFAULT_MAX_RENDERED_LEN: usize = 512;

static CURRENT: Lazy<AssertConfig> = Lazy::new(AssertConfig::from_env);

/// Controls how values are rendered inside assertion diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertConfig {
    /// Maximum number of characters of a rendered value before it is cut.
    pub max_rendered_len: usize,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            max_rendered_len: DEFAULT_MAX_RENDERED_LEN,
        }
    }
}

impl AssertConfig {
    pub fn new(max_rendered_len: usize) -> Self {
        Self { max_rendered_len }
    }

    /// Builds the configuration from the environment, falling back to the
    /// defaults for missing or unparsable values.
    pub fn from_env() -> Self {
        Self::from_raw(std::env::var(MAX_RENDERED_ENV).ok().as_deref())
    }

    /// Builds the configuration from the raw value of
    /// `HORIZON_ASSERT_MAX_RENDERED`, if it was set.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = raw {
            match raw.trim().parse::<usize>() {
                Ok(len) => config.max_rendered_len = len,
                Err(e) => tracing::warn!(
                    var = MAX_RENDERED_ENV,
                    value = %raw,
                    error = %e,
                    "Ignoring invalid assertion config value"
                ),
            }
        }

        config
    }

    /// Renders `value` with `Debug`, truncated to `max_rendered_len` chars.
    pub fn render<T: Debug + ?Sized>(&self, value: &T) -> String {
        self.truncate(format!("{:?}", value))
    }

    /// Cuts `text` at a char boundary when it exceeds the limit.
    pub fn truncate(&self, text: String) -> String {
        match text.char_indices().nth(self.max_rendered_len) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text,
        }
    }
}

/// The process-wide configuration, read from the environment on first use.
pub fn current() -> &'static AssertConfig {
    &CURRENT
}

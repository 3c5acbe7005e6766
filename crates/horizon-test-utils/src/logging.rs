//! Test logging setup.
//!
//! Assertion failures are reported through `tracing`. Call
//! [`init_test_logging`] at the start of a test to see them:
//!
//! ```ignore
//! #[test]
//! fn test_example() {
//!     horizon_test_utils::logging::init_test_logging();
//!     // ...
//! }
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const TEST_LOG_ENV: &str = "HORIZON_TEST_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs a global fmt subscriber writing through the test harness.
///
/// The filter comes from `HORIZON_TEST_LOG`, then `RUST_LOG`, then `warn`.
/// Safe to call multiple times; only the first call does anything, and a
/// subscriber installed elsewhere is left in place.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = select_filter(
            std::env::var(TEST_LOG_ENV).ok().as_deref(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        );

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();

        if result.is_ok() {
            tracing::debug!("Test logging initialized");
        }
    });
}

/// Picks the first set and parsable directive among `HORIZON_TEST_LOG` and
/// `RUST_LOG`, falling back to `warn`.
fn select_filter(test_log: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

//! Shared helpers for `kontor-core` integration tests.
//!
//! [`records`] holds source-record fixtures; the scenario they build is one
//! plausible freelancer month so tests can assert against concrete dates
//! instead of synthetic placeholders.

pub mod records;

use tracing_subscriber::EnvFilter;

/// Installs the test subscriber once per binary. Honors `RUST_LOG`, stays
/// silent otherwise.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

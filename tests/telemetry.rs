//! Runs in its own process: installing the global subscriber here cannot clash with
//! the `#[traced_test]` subscribers used by the unit tests.

use wordsearch_backend::telemetry::init_tracing;

#[test]
fn test_second_init_reports_error() {
    assert!(init_tracing().is_ok());
    assert!(init_tracing().is_err());
    tracing::info!(target: "wordsearch_backend", "telemetry initialized");
}

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing output for tests.
///
/// Quiet by default so passing runs stay readable; set LOG_LEVEL (e.g. to
/// "debug") to see the handler's log lines while debugging a test.
/// Usage: call init_test_logging() at the beginning of each test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

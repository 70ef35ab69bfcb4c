use std::env;
use std::sync::Once;
use tracing::info;

use crate::logging;

static TEST_SETUP: Once = Once::new();

/// Global test logging, once per test binary. `RUST_LOG` defaults to `trace`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        logging::init(true);
        info!("Test Setup complete");
    });
}

#![allow(clippy::uninlined_format_args)]

pub mod artifact;
pub mod config;
pub mod context;
pub mod error;
pub mod evm_client;
pub mod http;
pub mod serde;

// the test version of init_tracing does not take a config
// since config itself is tested and modified from different parallel tests
// therefore, this only uses the default tracing settings
#[cfg(debug_assertions)]
pub fn init_tracing_tests() {
    use std::sync::LazyLock;

    // guards against racing initializations across test threads
    static INIT: LazyLock<std::sync::Mutex<bool>> = LazyLock::new(|| std::sync::Mutex::new(false));

    let mut init = INIT.lock().unwrap();

    if !*init {
        *init = true;

        tracing_subscriber::fmt::init();
        tracing::debug!("Tracing initialized for tests");
    }
}

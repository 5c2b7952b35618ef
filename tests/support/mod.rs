#![allow(dead_code)]

pub mod mocks;

use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

//! Log subscriber setup.
//!
//! Engine crates emit `tracing` events; the driver routes them to stderr
//! so script output on stdout stays clean. Verbosity comes from the
//! standard `RUST_LOG` filter and defaults to silent.

use tracing_subscriber::EnvFilter;

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

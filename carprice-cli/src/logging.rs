//! Logger setup shared by the binaries

/// Initialise `env_logger`, logging at `info` unless `RUST_LOG` says otherwise
///
/// Diagnostics go to stderr, results are printed to stdout by the binaries.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

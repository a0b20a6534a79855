use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs the stderr logger. `RUST_LOG` overrides the given level.
pub fn init(level: LevelFilter, ansi: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

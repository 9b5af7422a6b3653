use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostics go to stderr; stdout is reserved for request lines.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

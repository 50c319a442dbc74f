use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging.
pub fn init_logging() {
    // Respect RUST_LOG if set; otherwise default to verbose for our crates
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("atlas_web=debug,atlas_core=debug,info"));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

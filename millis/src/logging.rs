use tracing_subscriber::{prelude::*, registry, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, falling back to `info` for dependencies and `debug` for the
/// executable and this library.
pub fn init(executable_name: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("info,{executable_name}=debug,millis=debug"))
    });

    // Logs go to stderr, stdout carries results.
    let log_default_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let log_json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
    });

    registry()
        .with(env_filter)
        .with(log_default_layer)
        .with(log_json_layer)
        .init();
}

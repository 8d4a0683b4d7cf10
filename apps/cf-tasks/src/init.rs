use tracing_subscriber::prelude::*;

use crate::TasksAppConfig;

/// Logs go to stderr, stdout is reserved for command output
pub fn initialize_tracing(config: &TasksAppConfig) -> anyhow::Result<()> {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    };

    Ok(())
}

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

pub fn configure_logging(format: LogFormat) -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stdout);

    let result = match format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

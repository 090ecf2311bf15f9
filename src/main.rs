use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use input_agent::agent::config::{Config, RateLimitSpec, TlsConfig};
use input_agent::comms::local_api;
use input_agent::platform::{EnigoDriver, InputDriver, NoopDriver};
use input_agent::utils;

#[derive(Parser)]
#[command(name = "input-agent", version, about = "Remote input agent (humanized mouse/keyboard synthesis)")]
struct AppCli {
    /// Host on where to listen for commands
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port on where to listen for commands
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Enable or disable SSL ("enable"/"disable")
    #[arg(long = "sslmode", default_value = "disable")]
    ssl_mode: String,

    /// Path to the SSL certificate file
    #[arg(long = "certfile", default_value = "")]
    cert_file: String,

    /// Path to the SSL key file
    #[arg(long = "keyfile", default_value = "")]
    key_file: String,

    /// Rate limit in requests per second and burst limit
    #[arg(long = "ratelimit", default_value = "10,10")]
    rate_limit: String,

    /// Log input actions instead of driving the real mouse/keyboard
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init();
    let args = AppCli::parse();

    let config = Config {
        host: args.host,
        port: args.port,
        tls: TlsConfig::from_flags(&args.ssl_mode, &args.cert_file, &args.key_file),
        rate_limit: RateLimitSpec::parse(&args.rate_limit),
    };

    let driver: Arc<dyn InputDriver> = if args.dry_run {
        info!("dry run: input actions will be logged, not injected");
        Arc::new(NoopDriver)
    } else {
        Arc::new(EnigoDriver::new()?)
    };

    info!("starting server on {}:{}", config.host, config.port);
    local_api::serve(config, driver).await
}

//! Relay server entry point

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use shared::logging;

use webserver::{ProviderConfig, RealUpstreamClient, RelayConfig, WebServer, webserver_impl::SERVICE};

/// Command line arguments; every flag can also come from the environment
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Relay between the idea generator UI and the configured LLM provider")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Built frontend to serve for non-API paths
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Reject prompts longer than this many characters
    #[arg(long, env = "MAX_PROMPT_CHARS")]
    max_prompt_chars: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so clap and the provider lookup both see its values
    let _ = dotenv::dotenv();

    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level)).context("Failed to initialise tracing")?;
    logging::log_startup(SERVICE, &format!("idea generator relay v{}", env!("CARGO_PKG_VERSION")));

    let provider = ProviderConfig::from_env().context("Failed to resolve provider configuration")?;
    tracing::info!(
        provider = %provider.kind,
        model = %provider.model,
        "AI Provider: {} | Model: {}",
        provider.kind,
        provider.model
    );
    if provider.has_api_key() {
        tracing::info!("API Key: ***configured***");
    } else {
        tracing::warn!("API Key: !!! MISSING !!! (set {})", provider.kind.key_var());
    }

    if let Some(dir) = &args.static_dir {
        if !dir.is_dir() {
            bail!("Static directory {} does not exist", dir.display());
        }
    }

    let config = RelayConfig::new(provider).with_max_prompt_chars(args.max_prompt_chars);
    let webserver = WebServer::new(config, RealUpstreamClient::new()).with_static_dir(args.static_dir);

    webserver
        .run(SocketAddr::new(args.host, args.port))
        .await
        .context("Relay server failed")?;

    logging::log_success(SERVICE, "Relay stopped gracefully");
    Ok(())
}

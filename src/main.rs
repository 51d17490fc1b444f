use anyhow::Result;
use cityguide::application::{ServerConfig, serve};
use cityguide::infrastructure::client::GuideClient;
use cityguide::presentation::cli::{Cli, Commands, ServeCommand, print_json};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd).await,
        Commands::Guide(cmd) => {
            let client = GuideClient::from_base_url(&cli.api_url)?;
            let guide = client.fetch(&cmd.city, &cmd.flavor).await?;
            print_json(&guide)
        }
    }
}

async fn run_server(command: ServeCommand) -> Result<()> {
    let config = ServerConfig {
        bind_address: command.bind_address,
        guides_dir: command.guides_dir,
        openrouter_api_key: command.openrouter_api_key.unwrap_or_default(),
        openrouter_model: command.openrouter_model,
    };

    serve(config).await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

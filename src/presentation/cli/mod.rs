use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate and cache city attraction guides", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CITYGUIDE_URL",
        default_value = "http://localhost:3106"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Fetch a guide from a running server
    Guide(GuideCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "CITYGUIDE_BIND_ADDRESS", default_value = "127.0.0.1:3106")]
    pub bind_address: SocketAddr,

    /// Directory where generated guides are persisted
    #[arg(long, env = "CITYGUIDE_GUIDES_DIR", default_value = "./guides")]
    pub guides_dir: PathBuf,

    #[arg(long, env = "CITYGUIDE_OPENROUTER_API_KEY")]
    pub openrouter_api_key: Option<String>,

    #[arg(
        long,
        env = "CITYGUIDE_OPENROUTER_MODEL",
        default_value = "anthropic/claude-3.5-sonnet"
    )]
    pub openrouter_model: String,
}

#[derive(Debug, Args)]
pub struct GuideCommand {
    /// City to fetch a guide for
    pub city: String,

    /// Stylistic flavor steering the tone of the descriptions
    pub flavor: String,
}

pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

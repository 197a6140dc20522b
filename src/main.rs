use clap::{Parser, Subcommand};
use forum_api::config::Config;
use forum_api::error::AppResult;
use forum_api::{openapi, server};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// The Forum API - backend for The Forum application
#[derive(Parser, Debug)]
#[command(name = "forum-api")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document to stdout
    Openapi,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = Config::from_env()?;

            // Override config with CLI args if provided
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.server.addr();

            server::run_server(config, addr).await
        }
        Commands::Openapi => {
            println!("{}", openapi::render()?);
            Ok(())
        }
    }
}

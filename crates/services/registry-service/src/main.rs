//! Registry Service - HTTP server for the employee registry.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use registry_service_lib::config::RegistryConfig;

#[derive(Parser)]
#[command(name = "registry-service")]
#[command(about = "Employee registry microservice")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "REGISTRY_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "REGISTRY_PORT", default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = RegistryConfig::from_env().with_listen_addr(host, port);
            tracing::debug!(?config, "Loaded configuration");

            if let Err(e) = registry_service_lib::run_server(config).await {
                tracing::error!("Registry service failed: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use log::info;
use toptrack::aggregator::Aggregator;
use toptrack::clients::errors::Result;
use toptrack::config::AppConfig;
use toptrack::server;

#[derive(Parser)]
#[command(name = "toptrack")]
#[command(version, about = "Compose a region's top track with its lyrics and artist image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /track/{region}
    Serve {
        /// Port to listen on, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the composed track info of a region once
    Lookup {
        /// Region (country name) to query
        region: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let mut config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Commands::Lookup { region } => {
            lookup(config, &region).await?;
        }
    }
    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    let port = config.port;
    let aggregator = Aggregator::try_from_app_config(config)?;
    server::serve(aggregator, port).await
}

async fn lookup(config: AppConfig, region: &str) -> Result<()> {
    let aggregator = Aggregator::try_from_app_config(config)?;
    let info = aggregator.get_top_track_info(region).await?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

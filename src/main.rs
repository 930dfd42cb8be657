//! `toptrack` binary: HTTP API and one-shot lookup.

mod cli;
use log::debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A .env file is optional, the environment may already carry the keys
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {e}");
    }

    cli::run().await?;

    Ok(())
}

//! Pharos autoswap - Main executable
//!
//! Asks for a private key, then loops over the action menu: randomized swaps through a
//! DEX router, or small native token transfers to the addresses listed in the wallet file.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use pharos_autoswap::{
    create_provider, signer_from_private_key, AlloyGateway, App, Config, Prompt,
    ServiceContainer, StdinPrompt,
};
use std::sync::Arc;
use std::time::Duration;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Pharos autoswap v{}", pharos_autoswap::VERSION);

    let config = Config::load().context("Failed to load configuration")?;

    let mut prompt = StdinPrompt::new();
    let private_key = prompt.ask("Enter your private key: ").await?;
    let signer = signer_from_private_key(&private_key)?;
    let address = signer.address();

    info!("Connecting to {}...", config.rpc_url);
    let provider =
        create_provider(&config.rpc_url, signer).context("Failed to create RPC provider")?;
    let gateway = Arc::new(AlloyGateway::new(
        provider,
        address,
        Duration::from_secs(config.confirmation_timeout_secs),
    ));
    info!("Wallet loaded: {:#x}", address);

    let services = Arc::new(ServiceContainer::new(config, gateway));

    info!("Ready! Press Ctrl+C to stop.");
    App::new(prompt, services).run().await
}

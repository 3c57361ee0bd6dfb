use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use anyhow::{anyhow, Result};

/// Create an HTTP provider that signs with `signer` and fills nonce, gas and chain id
pub fn create_provider(rpc_url: &str, signer: PrivateKeySigner) -> Result<DynProvider> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e| anyhow!("Invalid RPC URL {}: {}", rpc_url, e))?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url)
        .erased();

    Ok(provider)
}

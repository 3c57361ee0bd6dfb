use crate::chain::tokens::constants::NATIVE_DECIMALS;
use crate::chain::{self, ChainGateway};
use crate::config::SendSettings;
use crate::entity::{AppError, Submission};
use crate::utils;
use alloy::primitives::TxHash;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[async_trait]
pub trait SendInteractor: Send + Sync {
    fn wallet_file(&self) -> &Path;

    /// Create an empty address file if none exists. Returns true when it was created.
    async fn prepare_address_file(&self) -> Result<bool>;

    async fn load_recipients(&self) -> Result<Vec<String>>;

    /// Number of transfers for one recipient
    fn draw_tx_count(&self) -> u32;

    async fn send_native(&self, recipient: &str) -> Result<Submission>;

    async fn confirm(&self, hash: TxHash) -> Result<()>;

    fn next_delay(&self) -> u64;
}

pub struct SendInteractorImpl {
    gateway: Arc<dyn ChainGateway>,
    wallet_file: PathBuf,
    settings: SendSettings,
}

impl SendInteractorImpl {
    pub fn new(
        gateway: Arc<dyn ChainGateway>,
        wallet_file: PathBuf,
        settings: SendSettings,
    ) -> Self {
        Self {
            gateway,
            wallet_file,
            settings,
        }
    }
}

#[async_trait]
impl SendInteractor for SendInteractorImpl {
    fn wallet_file(&self) -> &Path {
        &self.wallet_file
    }

    async fn prepare_address_file(&self) -> Result<bool> {
        if tokio::fs::try_exists(&self.wallet_file)
            .await
            .map_err(AppError::AddressFile)?
        {
            return Ok(false);
        }

        tokio::fs::write(&self.wallet_file, "")
            .await
            .map_err(AppError::AddressFile)?;
        info!("Created address file {}", self.wallet_file.display());
        Ok(true)
    }

    async fn load_recipients(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.wallet_file)
            .await
            .map_err(AppError::AddressFile)?;

        Ok(utils::parse_recipients(&content))
    }

    fn draw_tx_count(&self) -> u32 {
        utils::random_tx_count(
            &mut rand::rng(),
            self.settings.min_tx_per_wallet,
            self.settings.max_tx_per_wallet,
        )
    }

    async fn send_native(&self, recipient: &str) -> Result<Submission> {
        let to = chain::parse_address(recipient)?;
        let amount = utils::random_amount(
            &mut rand::rng(),
            NATIVE_DECIMALS,
            self.settings.min_amount,
            self.settings.max_amount,
        )?;

        let hash = self
            .gateway
            .submit(chain::native_transfer_request(to, amount))
            .await?;
        info!("Transfer of {} wei to {:#x} submitted: {:#x}", amount, to, hash);

        Ok(Submission {
            hash,
            amount,
            nonce: None,
        })
    }

    async fn confirm(&self, hash: TxHash) -> Result<()> {
        self.gateway.wait_for_confirmation(hash).await
    }

    fn next_delay(&self) -> u64 {
        utils::random_delay(
            &mut rand::rng(),
            self.settings.min_delay_ms,
            self.settings.max_delay_ms,
        )
    }
}

use crate::chain::{self, ChainGateway, SwapCall};
use crate::config::SwapSettings;
use crate::entity::{Submission, SwapSession};
use crate::utils;
use alloy::primitives::TxHash;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Draw an amount, fetch the pending nonce and submit one router multicall
    async fn submit_swap(&self, session: &SwapSession) -> Result<Submission>;

    async fn confirm(&self, hash: TxHash) -> Result<()>;

    /// Pause before the next attempt, in milliseconds
    fn next_delay(&self) -> u64;
}

pub struct SwapInteractorImpl {
    gateway: Arc<dyn ChainGateway>,
    fee_tier: u32,
    settings: SwapSettings,
}

impl SwapInteractorImpl {
    pub fn new(gateway: Arc<dyn ChainGateway>, fee_tier: u32, settings: SwapSettings) -> Self {
        Self {
            gateway,
            fee_tier,
            settings,
        }
    }

    fn deadline(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64 + self.settings.deadline_secs
    }
}

#[async_trait]
impl SwapInteractor for SwapInteractorImpl {
    async fn submit_swap(&self, session: &SwapSession) -> Result<Submission> {
        let token_in = session.pair.token_in;
        let amount_in = utils::random_amount(
            &mut rand::rng(),
            token_in.decimals,
            self.settings.min_amount,
            self.settings.max_amount,
        )?;
        let deadline = self.deadline();

        // Explicit nonce keeps consecutive swaps in submission order
        let nonce = self.gateway.pending_nonce().await?;

        let call = SwapCall {
            router: session.dapp.router,
            pair: session.pair,
            fee_tier: self.fee_tier,
            recipient: self.gateway.address(),
            amount_in,
            deadline,
        };
        debug!(
            "Swapping {} {} via {} (nonce {}, deadline {})",
            amount_in, token_in.symbol, session.dapp.name, nonce, deadline
        );

        let hash = self.gateway.submit(chain::swap_request(&call, nonce)).await?;
        info!(
            "Swap {} on {} submitted: {:#x}",
            session.pair.label(),
            session.dapp.name,
            hash
        );

        Ok(Submission {
            hash,
            amount: amount_in,
            nonce: Some(nonce),
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

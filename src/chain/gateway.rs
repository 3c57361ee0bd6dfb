use crate::entity::AppError;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider};
use alloy::rpc::types::eth::TransactionRequest;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

/// Everything the swap and transfer loops need from the network
#[async_trait]
pub trait ChainGateway: Send + Sync {
    /// Address of the signing wallet
    fn address(&self) -> Address;

    /// Transaction count including pending transactions
    async fn pending_nonce(&self) -> Result<u64>;

    /// Sign and broadcast, returning as soon as the node accepts the transaction
    async fn submit(&self, request: TransactionRequest) -> Result<TxHash>;

    /// Wait for a successful receipt
    async fn wait_for_confirmation(&self, hash: TxHash) -> Result<()>;
}

pub struct AlloyGateway {
    provider: DynProvider,
    address: Address,
    confirmation_timeout: Duration,
}

impl AlloyGateway {
    pub fn new(provider: DynProvider, address: Address, confirmation_timeout: Duration) -> Self {
        Self {
            provider,
            address,
            confirmation_timeout,
        }
    }
}

#[async_trait]
impl ChainGateway for AlloyGateway {
    fn address(&self) -> Address {
        self.address
    }

    async fn pending_nonce(&self) -> Result<u64> {
        let nonce = self
            .provider
            .get_transaction_count(self.address)
            .pending()
            .await
            .map_err(|e| AppError::Rpc(format!("Failed to get nonce: {}", e)))?;

        debug!("Pending nonce for {:#x}: {}", self.address, nonce);
        Ok(nonce)
    }

    async fn submit(&self, request: TransactionRequest) -> Result<TxHash> {
        let request = request.with_from(self.address);

        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| AppError::Rpc(format!("Failed to send transaction: {}", e)))?;

        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, hash: TxHash) -> Result<()> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), hash)
            .with_timeout(Some(self.confirmation_timeout))
            .get_receipt()
            .await
            .map_err(|e| AppError::ConfirmationFailed(e.to_string()))?;

        if !receipt.status() {
            return Err(AppError::TransactionReverted(format!("{:#x}", hash)).into());
        }

        debug!(
            "Transaction {:#x} included in block {:?}",
            hash, receipt.block_number
        );
        Ok(())
    }
}

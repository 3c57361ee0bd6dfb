use alloy::primitives::{TxHash, U256};

/// A transaction accepted by the node. Confirmation is tracked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub hash: TxHash,
    pub amount: U256,
    pub nonce: Option<u64>,
}

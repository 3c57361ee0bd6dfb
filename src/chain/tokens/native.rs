use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::eth::TransactionRequest;

/// Plain PHRS value transfer. Nonce and gas are left to the provider fillers.
pub fn native_transfer_request(recipient: Address, amount: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(recipient)
        .with_value(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, TxKind};

    #[test]
    fn transfer_carries_value_and_no_calldata() {
        let to = address!("00000000000000000000000000000000000000aa");
        let request = native_transfer_request(to, U256::from(5_000_000_000_000_000u64));

        assert_eq!(request.to, Some(TxKind::Call(to)));
        assert_eq!(request.value, Some(U256::from(5_000_000_000_000_000u64)));
        assert!(request.input.input().is_none());
        assert!(request.nonce.is_none());
    }
}

use crate::entity::AppError;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::str::FromStr;

/// Restore a signer from a hex private key, with or without `0x`.
///
/// The key itself never appears in the error.
pub fn signer_from_private_key(private_key: &str) -> Result<PrivateKeySigner, AppError> {
    PrivateKeySigner::from_str(private_key.trim())
        .map_err(|e| AppError::InvalidPrivateKey(e.to_string()))
}

/// Parse a recipient line into an EVM address.
pub fn parse_address(address: &str) -> Result<Address, AppError> {
    Address::from_str(address.trim()).map_err(|_| AppError::InvalidAddress(address.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known anvil/hardhat account #0
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn restores_signer_with_and_without_prefix() {
        let expected = Address::from_str(ADDRESS).unwrap();

        let signer = signer_from_private_key(PRIVATE_KEY).unwrap();
        assert_eq!(signer.address(), expected);

        let signer = signer_from_private_key(&format!("  {}\n", &PRIVATE_KEY[2..])).unwrap();
        assert_eq!(signer.address(), expected);
    }

    #[test]
    fn malformed_key_is_rejected_without_echoing_it() {
        let err = signer_from_private_key("not-a-key").unwrap_err();
        assert!(matches!(err, AppError::InvalidPrivateKey(_)));
        assert!(!err.to_string().contains("not-a-key"));
    }

    #[test]
    fn parses_trimmed_addresses() {
        assert!(parse_address(" 0x3541423f25a1ca5c98fdbcf478405d3f0aad1164 ").is_ok());
        assert!(matches!(
            parse_address("0xabc"),
            Err(AppError::InvalidAddress(_))
        ));
    }
}

use alloy::primitives::Address;

/// Token descriptor from the static registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: &'static str, // Token symbol (e.g. "PHRS", "USDC")
    pub address: Address,     // Contract address (wrapped address for the native token)
    pub decimals: u8,         // Number of decimal places
    pub is_native: bool,      // Paid as transaction value instead of an ERC-20 transfer
}

use crate::entity::{Dapp, SwapPair, Token};
use alloy::primitives::address;

// Known token information
pub const PHRS: Token = Token {
    symbol: "PHRS",
    address: address!("76aaada469d23216be5f7c596fa25f282ff9b364"),
    decimals: 18,
    is_native: true,
};

pub const USDC: Token = Token {
    symbol: "USDC",
    address: address!("72df0bcd7276f2dfbac900d1ce63c272c4bccced"),
    decimals: 6,
    is_native: false,
};

pub const USDT: Token = Token {
    symbol: "USDT",
    address: address!("d4071393f8716661958f766df660033b3d35fd29"),
    decimals: 6,
    is_native: false,
};

// Router contracts
pub const ZENITH_FINANCE: Dapp = Dapp {
    name: "ZenithFinance",
    router: address!("276c746ae833cf98d9c20781d3a9f0c9095e788f"),
};

pub const FARO_SWAP: Dapp = Dapp {
    name: "FaroSwap",
    router: address!("3541423f25a1ca5c98fdbcf478405d3f0aad1164"),
};

/// DApps in menu order
pub const DAPPS: [Dapp; 2] = [ZENITH_FINANCE, FARO_SWAP];

/// Swap pairs in menu order
pub const SWAP_PAIRS: [SwapPair; 3] = [
    SwapPair::new(PHRS, USDT),
    SwapPair::new(PHRS, USDC),
    SwapPair::new(USDC, USDT),
];

pub const NATIVE_DECIMALS: u8 = PHRS.decimals;

use alloy::primitives::Address;

/// A DEX front-end and the router contract it swaps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dapp {
    pub name: &'static str,
    pub router: Address,
}

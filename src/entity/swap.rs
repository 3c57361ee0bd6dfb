use super::{Dapp, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair {
    pub token_in: Token,
    pub token_out: Token,
}

impl SwapPair {
    pub const fn new(token_in: Token, token_out: Token) -> Self {
        Self {
            token_in,
            token_out,
        }
    }

    /// Human readable label, e.g. "PHRS → USDT"
    pub fn label(&self) -> String {
        format!("{} → {}", self.token_in.symbol, self.token_out.symbol)
    }
}

/// Router and pair picked for one swap session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapSession {
    pub dapp: Dapp,
    pub pair: SwapPair,
}

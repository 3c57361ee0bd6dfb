// Re-export submodules
pub mod constants;
pub mod native;

// Re-export commonly used items
pub use constants::{DAPPS, FARO_SWAP, PHRS, SWAP_PAIRS, USDC, USDT, ZENITH_FINANCE};
pub use native::native_transfer_request;

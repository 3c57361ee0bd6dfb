// Re-export everything from submodules
pub mod client;
pub mod gateway;
pub mod router;
pub mod tokens;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use client::create_provider;
pub use gateway::{AlloyGateway, ChainGateway};
pub use router::{swap_request, SwapCall};
pub use tokens::native_transfer_request;
pub use utils::{display_amount, to_base_units};
pub use wallet::{parse_address, signer_from_private_key};

mod app_error;
mod dapp;
mod state;
mod swap;
mod swap_result;
mod token;
mod transaction;

pub use app_error::AppError;
pub use dapp::Dapp;
pub use state::Action;
pub use swap::{SwapPair, SwapSession};
pub use swap_result::SessionReport;
pub use token::Token;
pub use transaction::Submission;

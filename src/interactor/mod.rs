pub mod send_interactor;
pub mod swap_interactor;

pub use send_interactor::{SendInteractor, SendInteractorImpl};
pub use swap_interactor::{SwapInteractor, SwapInteractorImpl};

pub mod send_presenter;
pub mod swap_presenter;

pub use send_presenter::{SendPresenter, SendPresenterImpl};
pub use swap_presenter::{SwapPresenter, SwapPresenterImpl};

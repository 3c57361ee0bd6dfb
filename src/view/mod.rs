pub mod menu_view;
pub mod send_view;
pub mod swap_view;

pub use menu_view::{ConsoleMenuView, MenuView};
pub use send_view::{ConsoleSendView, SendView};
pub use swap_view::{ConsoleSwapView, SwapView};

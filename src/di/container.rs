use std::sync::Arc;

use crate::chain::ChainGateway;
use crate::config::Config;
use crate::interactor::send_interactor::SendInteractorImpl;
use crate::interactor::swap_interactor::SwapInteractorImpl;
use crate::view::menu_view::{ConsoleMenuView, MenuView};
use crate::view::send_view::{ConsoleSendView, SendView};
use crate::view::swap_view::{ConsoleSwapView, SwapView};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Signing wallet bound to the RPC endpoint, one per run
    gateway: Arc<dyn ChainGateway>,

    // Console output
    menu_view: Arc<dyn MenuView>,
    swap_view: Arc<dyn SwapView>,
    send_view: Arc<dyn SendView>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a container that prints to the terminal
    pub fn new(config: Config, gateway: Arc<dyn ChainGateway>) -> Self {
        let swap_view = Arc::new(ConsoleSwapView::new(config.explorer_url.clone()));
        let send_view = Arc::new(ConsoleSendView::new(config.explorer_url.clone()));

        Self::with_views(config, gateway, Arc::new(ConsoleMenuView), swap_view, send_view)
    }

    pub fn with_views(
        config: Config,
        gateway: Arc<dyn ChainGateway>,
        menu_view: Arc<dyn MenuView>,
        swap_view: Arc<dyn SwapView>,
        send_view: Arc<dyn SendView>,
    ) -> Self {
        Self {
            gateway,
            menu_view,
            swap_view,
            send_view,
            config,
        }
    }

    pub fn menu_view(&self) -> Arc<dyn MenuView> {
        self.menu_view.clone()
    }

    pub fn swap_view(&self) -> Arc<dyn SwapView> {
        self.swap_view.clone()
    }

    pub fn send_view(&self) -> Arc<dyn SendView> {
        self.send_view.clone()
    }

    pub fn swap_interactor(&self) -> Arc<SwapInteractorImpl> {
        Arc::new(SwapInteractorImpl::new(
            self.gateway.clone(),
            self.config.fee_tier,
            self.config.swap.clone(),
        ))
    }

    pub fn send_interactor(&self) -> Arc<SendInteractorImpl> {
        Arc::new(SendInteractorImpl::new(
            self.gateway.clone(),
            self.config.wallet_file.clone(),
            self.config.send.clone(),
        ))
    }
}

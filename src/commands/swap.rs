use anyhow::Result;
use log::info;
use std::sync::Arc;

use super::{menu, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::SwapSession;
use crate::presenter::swap_presenter::{SwapPresenter, SwapPresenterImpl};
use crate::prompt::Prompt;

pub struct SwapCommand;

impl CommandHandler for SwapCommand {
    fn command_name() -> &'static str {
        "swap"
    }

    fn description() -> &'static str {
        "Swap Tokens"
    }

    async fn execute(prompt: &mut dyn Prompt, services: Arc<ServiceContainer>) -> Result<()> {
        let menu_view = services.menu_view();
        menu_view.display_banner("SWAP TOKEN");

        let dapp = menu::select_dapp(prompt, menu_view.as_ref()).await?;
        let pair = menu::select_pair(prompt, menu_view.as_ref()).await?;
        let count = menu::ask_swap_count(prompt, menu_view.as_ref()).await?;

        let session = SwapSession { dapp, pair };
        info!(
            "Swap session: {} x {} on {}",
            count,
            pair.label(),
            dapp.name
        );

        let presenter = SwapPresenterImpl::new(services.swap_interactor(), services.swap_view());
        presenter.run_swaps(&session, count).await?;

        Ok(())
    }
}

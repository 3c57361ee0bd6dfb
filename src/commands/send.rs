use anyhow::Result;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::presenter::send_presenter::{SendPresenter, SendPresenterImpl};
use crate::prompt::Prompt;

pub struct SendCommand;

impl CommandHandler for SendCommand {
    fn command_name() -> &'static str {
        "send"
    }

    fn description() -> &'static str {
        "Send Native Token"
    }

    async fn execute(prompt: &mut dyn Prompt, services: Arc<ServiceContainer>) -> Result<()> {
        services.menu_view().display_banner("SEND NATIVE TOKEN");

        let presenter = SendPresenterImpl::new(services.send_interactor(), services.send_view());
        // Unwritable path ends the session, back to the main menu
        if !presenter.prepare_address_file().await {
            return Ok(());
        }

        prompt.ask("Press Enter to continue...").await?;

        // Same for an unreadable or empty file
        let Some(recipients) = presenter.load_recipients().await else {
            return Ok(());
        };

        presenter.distribute(&recipients).await?;

        Ok(())
    }
}

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::entity::Action;
use crate::prompt::Prompt;

pub mod menu;
pub mod send;
pub mod swap;

/// Trait that defines a command handler
#[allow(async_fn_in_trait)]
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// Label shown in the action menu
    fn description() -> &'static str;

    /// Run the command to completion
    async fn execute(prompt: &mut dyn Prompt, services: Arc<ServiceContainer>) -> Result<()>;
}

/// Run the command behind a main menu action
pub async fn dispatch(
    action: Action,
    prompt: &mut dyn Prompt,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    match action {
        Action::Swap => {
            info!("Running {} command", swap::SwapCommand::command_name());
            swap::SwapCommand::execute(prompt, services).await
        }
        Action::SendNative => {
            info!("Running {} command", send::SendCommand::command_name());
            send::SendCommand::execute(prompt, services).await
        }
    }
}

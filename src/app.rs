use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::commands::{self, menu};
use crate::di::ServiceContainer;
use crate::entity::Action;
use crate::prompt::Prompt;

/// Main menu loop: wait for an action, run it to completion, show the menu again
pub struct App<P: Prompt> {
    prompt: P,
    services: Arc<ServiceContainer>,
}

impl<P: Prompt> App<P> {
    pub fn new(prompt: P, services: Arc<ServiceContainer>) -> Self {
        Self { prompt, services }
    }

    /// One idle -> busy -> idle cycle. Returns the action that ran.
    pub async fn step(&mut self) -> Result<Action> {
        let menu_view = self.services.menu_view();
        let action = menu::select_action(&mut self.prompt, menu_view.as_ref()).await?;

        commands::dispatch(action, &mut self.prompt, self.services.clone()).await?;
        info!("{:?} session complete, back to main menu", action);

        Ok(action)
    }

    /// Runs until input closes or an unrecoverable error occurs
    pub async fn run(mut self) -> Result<()> {
        loop {
            self.step().await?;
        }
    }

    /// Input source, e.g. to check how many scripted answers a step consumed
    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

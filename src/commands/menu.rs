use crate::chain::tokens::constants::{DAPPS, SWAP_PAIRS};
use crate::entity::{Action, Dapp, SwapPair};
use crate::prompt::Prompt;
use crate::view::menu_view::MenuView;
use anyhow::Result;
use log::warn;

use super::{send::SendCommand, swap::SwapCommand, CommandHandler};

/// Show numbered options until the answer is one of their numbers.
///
/// There is no way to back out of a menu; only closed input ends it.
pub async fn choose<T: Clone>(
    prompt: &mut dyn Prompt,
    view: &dyn MenuView,
    title: &str,
    options: &[(String, T)],
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|(label, _)| label.clone()).collect();
    let numbers: Vec<String> = (1..=options.len()).map(|n| n.to_string()).collect();
    let query = format!("Enter your choice ({}): ", numbers.join("/"));

    loop {
        view.display_menu(title, &labels);
        let answer = prompt.ask(&query).await?;

        if let Some(position) = numbers.iter().position(|n| n == answer.trim()) {
            return Ok(options[position].1.clone());
        }

        warn!("Invalid choice {:?} for menu '{}'", answer, title);
        view.display_invalid_choice(&answer);
    }
}

pub async fn select_action(prompt: &mut dyn Prompt, view: &dyn MenuView) -> Result<Action> {
    let options = [
        (SwapCommand::description().to_string(), Action::Swap),
        (SendCommand::description().to_string(), Action::SendNative),
    ];
    choose(prompt, view, "Select Action", &options).await
}

pub async fn select_dapp(prompt: &mut dyn Prompt, view: &dyn MenuView) -> Result<Dapp> {
    let options: Vec<(String, Dapp)> = DAPPS
        .iter()
        .map(|dapp| (dapp.name.to_string(), *dapp))
        .collect();
    choose(prompt, view, "Select DApp", &options).await
}

pub async fn select_pair(prompt: &mut dyn Prompt, view: &dyn MenuView) -> Result<SwapPair> {
    let options: Vec<(String, SwapPair)> = SWAP_PAIRS
        .iter()
        .map(|pair| (pair.label(), *pair))
        .collect();
    choose(prompt, view, "Select swap pair", &options).await
}

/// Ask until a positive whole number is entered
pub async fn ask_swap_count(prompt: &mut dyn Prompt, view: &dyn MenuView) -> Result<u32> {
    loop {
        let answer = prompt.ask("Enter number of swaps: ").await?;

        match answer.trim().parse::<u32>() {
            Ok(count) if count > 0 => return Ok(count),
            _ => {
                warn!("Invalid swap count {:?}", answer);
                view.display_invalid_choice(&answer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tokens::constants::{FARO_SWAP, PHRS, USDC, USDT};
    use crate::prompt::ScriptedPrompt;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMenuView {
        menus: Mutex<Vec<(String, Vec<String>)>>,
        invalid: Mutex<Vec<String>>,
    }

    impl MenuView for RecordingMenuView {
        fn display_menu(&self, title: &str, options: &[String]) {
            self.menus
                .lock()
                .unwrap()
                .push((title.to_string(), options.to_vec()));
        }

        fn display_invalid_choice(&self, input: &str) {
            self.invalid.lock().unwrap().push(input.to_string());
        }

        fn display_banner(&self, _title: &str) {}
    }

    #[tokio::test]
    async fn dapp_menu_reprompts_until_valid() {
        let mut prompt = ScriptedPrompt::new(["9", "2"]);
        let view = RecordingMenuView::default();

        let dapp = select_dapp(&mut prompt, &view).await.unwrap();

        assert_eq!(dapp, FARO_SWAP);
        assert_eq!(
            dapp.router.to_string().to_lowercase(),
            "0x3541423f25a1ca5c98fdbcf478405d3f0aad1164"
        );
        assert_eq!(*view.invalid.lock().unwrap(), vec!["9".to_string()]);
        assert_eq!(view.menus.lock().unwrap().len(), 2);
        assert_eq!(prompt.asked(), ["Enter your choice (1/2): ", "Enter your choice (1/2): "]);
    }

    #[tokio::test]
    async fn pair_menu_lists_pairs_in_order() {
        let mut prompt = ScriptedPrompt::new(["3"]);
        let view = RecordingMenuView::default();

        let pair = select_pair(&mut prompt, &view).await.unwrap();

        assert_eq!(pair, SwapPair::new(USDC, USDT));
        let menus = view.menus.lock().unwrap();
        assert_eq!(menus[0].0, "Select swap pair");
        assert_eq!(menus[0].1, vec!["PHRS → USDT", "PHRS → USDC", "USDC → USDT"]);
        assert_eq!(prompt.asked(), ["Enter your choice (1/2/3): "]);
        assert_eq!(SWAP_PAIRS[0], SwapPair::new(PHRS, USDT));
    }

    #[tokio::test]
    async fn action_menu_rejects_out_of_range_and_blank_input() {
        let mut prompt = ScriptedPrompt::new(["0", "", "swap", " 2 "]);
        let view = RecordingMenuView::default();

        let action = select_action(&mut prompt, &view).await.unwrap();

        assert_eq!(action, Action::SendNative);
        assert_eq!(view.invalid.lock().unwrap().len(), 3);
        assert_eq!(
            view.menus.lock().unwrap()[0].1,
            vec!["Swap Tokens", "Send Native Token"]
        );
    }

    #[tokio::test]
    async fn swap_count_must_be_positive_integer() {
        let mut prompt = ScriptedPrompt::new(["abc", "0", "-3", "2.5", "4"]);
        let view = RecordingMenuView::default();

        assert_eq!(ask_swap_count(&mut prompt, &view).await.unwrap(), 4);
        assert_eq!(view.invalid.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn closed_input_ends_menu_with_error() {
        let mut prompt = ScriptedPrompt::new(["7"]);
        let view = RecordingMenuView::default();

        assert!(select_dapp(&mut prompt, &view).await.is_err());
        assert_eq!(prompt.remaining(), 0);
    }
}

use crate::chain::display_amount;
use crate::entity::{SessionReport, Submission, SwapSession};
use crate::utils::explorer_tx_url;
use alloy::primitives::TxHash;

pub trait SwapView: Send + Sync {
    fn display_session_start(&self, session: &SwapSession, count: u32);
    fn display_submitted(&self, index: u32, session: &SwapSession, submission: &Submission);
    fn display_confirmed(&self, hash: &TxHash);
    fn display_unconfirmed(&self, hash: &TxHash, error: &anyhow::Error);
    fn display_failed(&self, index: u32, error: &anyhow::Error);
    fn display_waiting(&self, delay_ms: u64);
    fn display_session_finished(&self, session: &SwapSession, report: &SessionReport);
}

pub struct ConsoleSwapView {
    explorer_url: String,
}

impl ConsoleSwapView {
    pub fn new(explorer_url: impl Into<String>) -> Self {
        Self {
            explorer_url: explorer_url.into(),
        }
    }
}

impl SwapView for ConsoleSwapView {
    fn display_session_start(&self, session: &SwapSession, count: u32) {
        println!(
            "\nStarting swap: {} on {} ({} swaps)",
            session.pair.label(),
            session.dapp.name,
            count
        );
    }

    fn display_submitted(&self, index: u32, session: &SwapSession, submission: &Submission) {
        println!(
            "\n#{} Swap {} {} on {} ⏳",
            index,
            display_amount(submission.amount, session.pair.token_in.decimals),
            session.pair.label(),
            session.dapp.name
        );
        println!("🔄 Submitted: {:#x}", submission.hash);
    }

    fn display_confirmed(&self, hash: &TxHash) {
        println!("✅ Success!");
        println!(
            "🔗 View on Explorer: {}",
            explorer_tx_url(&self.explorer_url, hash)
        );
    }

    fn display_unconfirmed(&self, _hash: &TxHash, _error: &anyhow::Error) {
        eprintln!("Wait Failed (Service Busy), moving to next swap.");
    }

    fn display_failed(&self, index: u32, _error: &anyhow::Error) {
        eprintln!("❌ Swap #{} Failed!", index);
    }

    fn display_waiting(&self, delay_ms: u64) {
        println!(
            "⏳ Waiting {}s before next swap...",
            delay_ms as f64 / 1000.0
        );
    }

    fn display_session_finished(&self, session: &SwapSession, report: &SessionReport) {
        println!(
            "\n🏁 Finished {} on {}: {} confirmed, {} unconfirmed, {} failed",
            session.pair.label(),
            session.dapp.name,
            report.confirmed,
            report.unconfirmed,
            report.failed
        );
    }
}

use crate::chain::display_amount;
use crate::chain::tokens::constants::{NATIVE_DECIMALS, PHRS};
use crate::entity::{SessionReport, Submission};
use crate::utils::{explorer_tx_url, shorten_address};
use alloy::primitives::TxHash;
use std::path::Path;

pub trait SendView: Send + Sync {
    fn display_file_created(&self, path: &Path);
    fn display_file_instructions(&self, path: &Path);
    fn display_read_error(&self, path: &Path, error: &anyhow::Error);
    fn display_no_recipients(&self, path: &Path);
    fn display_recipient_start(&self, recipient: &str, tx_count: u32);
    fn display_submitted(&self, index: u32, recipient: &str, submission: &Submission);
    fn display_confirmed(&self, hash: &TxHash);
    fn display_failed(&self, recipient: &str, error: &anyhow::Error);
    fn display_waiting(&self, delay_ms: u64);
    fn display_recipient_finished(&self, recipient: &str);
    fn display_all_finished(&self, report: &SessionReport);
}

pub struct ConsoleSendView {
    explorer_url: String,
}

impl ConsoleSendView {
    pub fn new(explorer_url: impl Into<String>) -> Self {
        Self {
            explorer_url: explorer_url.into(),
        }
    }
}

impl SendView for ConsoleSendView {
    fn display_file_created(&self, path: &Path) {
        println!("📂 Creating address file: {}", path.display());
    }

    fn display_file_instructions(&self, path: &Path) {
        println!("📥 Please open the file: {}", path.display());
        println!("👉 Paste the recipient wallet addresses (one per line).");
        println!("⚡️ Press Enter here when you have finished pasting the addresses...");
    }

    fn display_read_error(&self, path: &Path, _error: &anyhow::Error) {
        eprintln!("Cannot read {} file!", path.display());
    }

    fn display_no_recipients(&self, path: &Path) {
        println!("No recipient addresses found in {}", path.display());
    }

    fn display_recipient_start(&self, recipient: &str, tx_count: u32) {
        println!(
            "\n🚀 Starting transfers to {} - Total: {}",
            recipient, tx_count
        );
    }

    fn display_submitted(&self, index: u32, recipient: &str, submission: &Submission) {
        println!(
            "\n#{} Transfer {} {} to {} ⏳",
            index,
            display_amount(submission.amount, NATIVE_DECIMALS),
            PHRS.symbol,
            shorten_address(recipient)
        );
        println!("🚀 Submitted: {:#x}", submission.hash);
    }

    fn display_confirmed(&self, hash: &TxHash) {
        println!("✅ Success!");
        println!(
            "🔗 View on Explorer: {}",
            explorer_tx_url(&self.explorer_url, hash)
        );
    }

    fn display_failed(&self, recipient: &str, _error: &anyhow::Error) {
        eprintln!("❌ Transfer Failed to {}", recipient);
    }

    fn display_waiting(&self, delay_ms: u64) {
        println!(
            "⏳ Waiting {}s before next send...",
            delay_ms as f64 / 1000.0
        );
    }

    fn display_recipient_finished(&self, recipient: &str) {
        println!("✅ Finished transfers to {}", recipient);
        println!("-----------------------------");
    }

    fn display_all_finished(&self, report: &SessionReport) {
        println!(
            "✅ All transfers completed! ({} confirmed, {} failed)",
            report.confirmed,
            report.failed + report.unconfirmed
        );
    }
}

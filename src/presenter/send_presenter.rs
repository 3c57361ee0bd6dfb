use crate::entity::SessionReport;
use crate::interactor::send_interactor::SendInteractor;
use crate::view::send_view::SendView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait SendPresenter: Send + Sync {
    /// Create the address file if needed and print where to paste recipients.
    /// `false` when the file could not be created.
    async fn prepare_address_file(&self) -> bool;

    /// Read the address file. `None` when it could not be read or holds no addresses.
    async fn load_recipients(&self) -> Option<Vec<String>>;

    /// Send a random number of transfers to every recipient, in order
    async fn distribute(&self, recipients: &[String]) -> Result<SessionReport>;
}

pub struct SendPresenterImpl<I> {
    interactor: Arc<I>,
    view: Arc<dyn SendView>,
}

impl<I> SendPresenterImpl<I>
where
    I: SendInteractor,
{
    pub fn new(interactor: Arc<I>, view: Arc<dyn SendView>) -> Self {
        Self { interactor, view }
    }

    async fn send_to(&self, recipient: &str) -> SessionReport {
        let tx_count = self.interactor.draw_tx_count();
        self.view.display_recipient_start(recipient, tx_count);
        let mut report = SessionReport::default();

        for index in 1..=tx_count {
            match self.interactor.send_native(recipient).await {
                Ok(submission) => {
                    self.view.display_submitted(index, recipient, &submission);

                    match self.interactor.confirm(submission.hash).await {
                        Ok(()) => {
                            report.record_confirmed();
                            self.view.display_confirmed(&submission.hash);
                        }
                        Err(e) => {
                            warn!("Transfer {:#x} not confirmed: {:#}", submission.hash, e);
                            report.record_unconfirmed();
                            self.view.display_failed(recipient, &e);
                        }
                    }
                }
                Err(e) => {
                    error!("Transfer #{} to {} failed: {:#}", index, recipient, e);
                    report.record_failed();
                    self.view.display_failed(recipient, &e);
                }
            }

            let delay = self.interactor.next_delay();
            self.view.display_waiting(delay);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.view.display_recipient_finished(recipient);
        report
    }
}

#[async_trait]
impl<I> SendPresenter for SendPresenterImpl<I>
where
    I: SendInteractor + Send + Sync,
{
    async fn prepare_address_file(&self) -> bool {
        let path = self.interactor.wallet_file();

        match self.interactor.prepare_address_file().await {
            Ok(created) => {
                if created {
                    self.view.display_file_created(path);
                }
                self.view.display_file_instructions(path);
                true
            }
            Err(e) => {
                error!("Failed to create {}: {:#}", path.display(), e);
                self.view.display_read_error(path, &e);
                false
            }
        }
    }

    async fn load_recipients(&self) -> Option<Vec<String>> {
        let path = self.interactor.wallet_file();

        match self.interactor.load_recipients().await {
            Ok(recipients) if recipients.is_empty() => {
                warn!("No recipients in {}", path.display());
                self.view.display_no_recipients(path);
                None
            }
            Ok(recipients) => {
                info!("Loaded {} recipients from {}", recipients.len(), path.display());
                Some(recipients)
            }
            Err(e) => {
                error!("Failed to read {}: {:#}", path.display(), e);
                self.view.display_read_error(path, &e);
                None
            }
        }
    }

    async fn distribute(&self, recipients: &[String]) -> Result<SessionReport> {
        let mut report = SessionReport::default();

        for recipient in recipients {
            report.merge(self.send_to(recipient).await);
        }

        info!("Transfer session finished: {:?}", report);
        self.view.display_all_finished(&report);

        Ok(report)
    }
}

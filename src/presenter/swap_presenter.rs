use crate::entity::{SessionReport, SwapSession};
use crate::interactor::swap_interactor::SwapInteractor;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    /// Run `count` swap attempts back to back. A failed attempt never ends the session early.
    async fn run_swaps(&self, session: &SwapSession, count: u32) -> Result<SessionReport>;
}

pub struct SwapPresenterImpl<I> {
    interactor: Arc<I>,
    view: Arc<dyn SwapView>,
}

impl<I> SwapPresenterImpl<I>
where
    I: SwapInteractor,
{
    pub fn new(interactor: Arc<I>, view: Arc<dyn SwapView>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I> SwapPresenter for SwapPresenterImpl<I>
where
    I: SwapInteractor + Send + Sync,
{
    async fn run_swaps(&self, session: &SwapSession, count: u32) -> Result<SessionReport> {
        self.view.display_session_start(session, count);
        let mut report = SessionReport::default();

        for index in 1..=count {
            match self.interactor.submit_swap(session).await {
                Ok(submission) => {
                    debug!("Swap #{} sent with nonce {:?}", index, submission.nonce);
                    self.view.display_submitted(index, session, &submission);

                    match self.interactor.confirm(submission.hash).await {
                        Ok(()) => {
                            report.record_confirmed();
                            self.view.display_confirmed(&submission.hash);
                        }
                        Err(e) => {
                            warn!("Swap {:#x} not confirmed: {:#}", submission.hash, e);
                            report.record_unconfirmed();
                            self.view.display_unconfirmed(&submission.hash, &e);
                        }
                    }
                }
                Err(e) => {
                    error!("Swap #{} failed: {:#}", index, e);
                    report.record_failed();
                    self.view.display_failed(index, &e);
                }
            }

            let delay = self.interactor.next_delay();
            self.view.display_waiting(delay);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        info!(
            "Swap session {} on {} finished: {:?}",
            session.pair.label(),
            session.dapp.name,
            report
        );
        self.view.display_session_finished(session, &report);

        Ok(report)
    }
}

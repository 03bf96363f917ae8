//! Background explanation requests
//!
//! Provider calls run on their own task so the UI keeps drawing. Each reply
//! carries the ticket it was issued with; the session decides whether it is
//! still relevant.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::explain::{ExplainError, ExplanationProvider};
use crate::quiz::{HelpRequest, HelpTicket};

/// Provider result for one help request
#[derive(Debug)]
pub struct HelpReply {
    pub ticket: HelpTicket,
    pub result: Result<String, ExplainError>,
}

/// Ask the provider about `request` on a background task.
///
/// The reply is sent on `tx`; if the receiver is gone the reply is discarded.
pub fn spawn_help(
    provider: Arc<dyn ExplanationProvider>,
    request: HelpRequest,
    tx: mpsc::Sender<HelpReply>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let HelpRequest { ticket, topic, concept } = request;
        tracing::debug!(%topic, concept = %concept, "Requesting explanation");

        let result = provider.explain(topic, &concept).await;
        if tx.send(HelpReply { ticket, result }).await.is_err() {
            tracing::debug!("Explanation arrived after the app closed");
        }
    })
}

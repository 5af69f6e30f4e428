use std::collections::VecDeque;
use std::sync::Arc;

use shortener_core::{Effect, Msg, ShortenOutcome, Store};
use shortener_logging::{redact_query, shortener_info, shortener_warn};

use crate::{Clipboard, ClipboardError, ShortenClient, ShortenError, ShortenResponse};

/// What one workflow run did besides updating the store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Effects this runner does not own (opening a URL), for the caller.
    pub unhandled: Vec<Effect>,
    /// Texts written to the clipboard.
    pub copied: Vec<String>,
    pub clipboard_failures: Vec<ClipboardError>,
}

/// Drives a [`Store`] through the shorten-and-respond workflow.
///
/// Messages go through the store's reducer; the resulting effects are run
/// here until the queue drains. The store is borrowed mutably for the whole
/// run, so one workflow run is never interleaved with another on the same
/// store.
pub struct Workflow {
    client: Arc<dyn ShortenClient>,
    clipboard: Arc<dyn Clipboard>,
}

impl Workflow {
    pub fn new(client: Arc<dyn ShortenClient>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { client, clipboard }
    }

    /// Submit button: clear the previous result, then shorten the current input.
    pub async fn submit(&self, store: &mut Store) -> RunReport {
        self.dispatch(store, Msg::SubmitClicked).await
    }

    /// Enter key: same as [`Workflow::submit`], skipped while the input is empty.
    pub async fn press_enter(&self, store: &mut Store) -> RunReport {
        self.dispatch(store, Msg::EnterPressed).await
    }

    /// Applies `msg` and runs every effect it leads to.
    pub async fn dispatch(&self, store: &mut Store, msg: Msg) -> RunReport {
        let mut pending: VecDeque<Effect> = store.dispatch(msg).into();
        let mut report = RunReport::default();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::RequestShorten { request_id, url } => {
                    shortener_info!(
                        "RequestShorten request_id={} url={}",
                        request_id,
                        redact_query(&url)
                    );
                    let result = self.client.shorten(&url).await;
                    let outcome = outcome_from_result(result);
                    if let ShortenOutcome::TransportFailed(reason) = &outcome {
                        shortener_warn!("Request {} failed: {}", request_id, reason);
                    }
                    pending.extend(store.dispatch(Msg::ShortenCompleted {
                        request_id,
                        outcome,
                    }));
                }
                Effect::CopyToClipboard { text } => match self.clipboard.set_text(&text) {
                    Ok(()) => report.copied.push(text),
                    Err(err) => {
                        shortener_warn!("Copy to clipboard failed: {}", err);
                        report.clipboard_failures.push(err);
                    }
                },
                other @ Effect::OpenUrl { .. } => report.unhandled.push(other),
            }
        }

        report
    }
}

/// Maps a client result onto what the state machine distinguishes.
pub fn outcome_from_result(result: Result<ShortenResponse, ShortenError>) -> ShortenOutcome {
    match result {
        Ok(response) => match response.usable_new_url() {
            Some(id) => ShortenOutcome::Shortened(id.to_string()),
            None => ShortenOutcome::NoResult,
        },
        Err(err) => ShortenOutcome::TransportFailed(err.to_string()),
    }
}

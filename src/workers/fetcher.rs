//! One-shot roster fetch
//!
//! Runs the single roster request off the UI thread and reports back over the
//! event channel. There is no retry: a failure is reported once and the user
//! restarts the program to try again.

use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::roster::RosterSource;
use log::{debug, info, log};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type EventSender = mpsc::Sender<Event>;

/// Fetches the roster once and forwards the outcome.
pub struct RosterFetcher {
    source: Box<dyn RosterSource>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl RosterFetcher {
    pub fn new(source: Box<dyn RosterSource>, event_sender: EventSender) -> Self {
        Self {
            source,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Performs the fetch. Returns whether the outcome reached a receiver.
    pub async fn run(self) -> bool {
        let url = self.source.roster_url();
        info!("Fetching roster from {}", url);
        // The progress notice is best effort.
        let _ = self.event_sender.try_send(Event::fetch_started(&url));

        let event = match self.source.fetch_roster().await {
            Ok(records) => {
                info!("Fetched {} student records", records.len());
                Event::roster_loaded(records)
            }
            Err(e) => {
                let level = self.classifier.classify_fetch_error(&e);
                log!(log::Level::from(level), "Roster fetch failed: {}", e);
                Event::roster_failed(e.to_string(), level)
            }
        };

        // The receiver is gone once the browser has been closed; the result is dropped.
        match self.event_sender.send(event).await {
            Ok(()) => true,
            Err(_) => {
                debug!("Roster fetch finished after the browser closed; result dropped");
                false
            }
        }
    }

    pub fn spawn(self) -> JoinHandle<bool> {
        tokio::spawn(self.run())
    }
}

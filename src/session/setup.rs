//! Session setup and initialization

use crate::browser::{DisplayMode, Field, FieldVisibility, RosterBrowser};
use crate::config::Config;
use crate::consts::cli_consts::{DEFAULT_SITE_TITLE, EVENT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::roster::{RosterClient, RosterSource};
use crate::workers::RosterFetcher;
use std::error::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub roster_url: Option<String>,
    pub search_term: Option<String>,
    pub show_all: bool,
    pub hidden_fields: Vec<Field>,
}

/// Fully resolved settings of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub roster_url: String,
    pub media_origin: String,
    pub site_title: String,
    pub display_mode: DisplayMode,
    pub hidden_fields: Vec<Field>,
    pub search_term: String,
}

impl SessionSettings {
    /// Command line first, then the config file, then the environment defaults.
    pub fn resolve(config: &Config, env: Environment, overrides: SettingsOverrides) -> Self {
        let display_mode = if overrides.show_all {
            DisplayMode::ShowAll
        } else {
            config.display_mode.unwrap_or_default()
        };

        let mut hidden_fields = config.hidden_fields.clone();
        for field in overrides.hidden_fields {
            if !hidden_fields.contains(&field) {
                hidden_fields.push(field);
            }
        }

        Self {
            roster_url: overrides
                .roster_url
                .or_else(|| config.roster_url.clone())
                .unwrap_or_else(|| env.roster_url()),
            media_origin: config
                .media_origin
                .clone()
                .unwrap_or_else(|| env.media_origin()),
            site_title: config
                .site_title
                .clone()
                .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
            display_mode,
            hidden_fields,
            search_term: overrides.search_term.unwrap_or_default(),
        }
    }

    /// A browser in the loading state, configured from these settings.
    pub fn browser(&self) -> RosterBrowser {
        let mut browser = RosterBrowser::new(
            self.display_mode,
            FieldVisibility::with_hidden(&self.hidden_fields),
        );
        if !self.search_term.is_empty() {
            browser.set_search_term(self.search_term.clone());
        }
        browser
    }
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives the fetch outcome
    pub event_receiver: mpsc::Receiver<Event>,
    /// The roster fetch task; resolves to whether its outcome was delivered
    pub join_handle: JoinHandle<bool>,
    /// Settings the session was started with
    pub settings: SessionSettings,
}

/// Starts the one roster fetch against `source`.
pub fn start_fetch(
    source: Box<dyn RosterSource>,
) -> (mpsc::Receiver<Event>, JoinHandle<bool>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let join_handle = RosterFetcher::new(source, event_sender).spawn();
    (event_receiver, join_handle)
}

/// Builds the HTTP client and kicks off the fetch.
///
/// # Errors
/// Fails only if the HTTP client cannot be constructed.
pub fn setup_session(settings: SessionSettings) -> Result<SessionData, Box<dyn Error>> {
    let client = RosterClient::new(&settings.roster_url)?;
    let (event_receiver, join_handle) = start_fetch(Box::new(client));
    Ok(SessionData {
        event_receiver,
        join_handle,
        settings,
    })
}

//! Main application state and UI loop
//!
//! Contains the App struct and the loop that polls keys, drains fetch events
//! and redraws.

use crate::browser::RosterBrowser;
use crate::consts::cli_consts::ui::{splash_duration, tick_rate};
use crate::events::Event as WorkerEvent;
use crate::ui::roster::{RosterScreen, render_roster};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub site_title: String,
    pub media_origin: String,
    pub roster_url: String,
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Logo and version, shown while the roster loads.
    Splash,
    /// Search, navigation and student cards.
    Roster,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// When the splash screen went up.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Roster state. Exists from the start so a fetch that resolves during
    /// the splash is not lost.
    roster: Box<RosterScreen>,

    /// Receives events from the roster fetcher.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Whether the splash screen is shown at all.
    show_splash: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        browser: RosterBrowser,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        ui_config: UIConfig,
        show_splash: bool,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: if show_splash {
                Screen::Splash
            } else {
                Screen::Roster
            },
            roster: Box::new(RosterScreen::new(browser, ui_config)),
            event_receiver,
            show_splash,
        }
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    #[cfg(test)]
    pub fn roster(&self) -> &RosterScreen {
        &self.roster
    }

    /// Moves queued fetch events into the roster screen and applies them.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.roster.add_event(event);
        }
        self.roster.update();
    }

    fn leave_splash_if_elapsed(&mut self) {
        if self.current_screen == Screen::Splash
            && (!self.show_splash || self.start_time.elapsed() >= splash_duration())
        {
            self.current_screen = Screen::Roster;
        }
    }

    /// Handles one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match self.current_screen {
            Screen::Splash => {
                let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c');
                if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return true;
                }
                // Any other key skips the splash screen
                self.current_screen = Screen::Roster;
                false
            }
            Screen::Roster => self.roster.handle_key(key),
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.drain_events();
        app.leave_splash_if_elapsed();
        terminal.draw(|f| render(f, &app))?;

        if event::poll(tick_rate())? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Roster => render_roster(f, &app.roster),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::state::LoadState;
    use crate::browser::{DisplayMode, FieldVisibility};
    use crate::student::fixtures::smiths_and_jones;
    use crossterm::event::KeyEvent;

    fn app(show_splash: bool) -> (App, mpsc::Sender<WorkerEvent>) {
        let (sender, receiver) = mpsc::channel(8);
        let ui_config = UIConfig {
            with_background_color: false,
            site_title: "Class Roster".to_string(),
            media_origin: "https://dvonb.xyz".to_string(),
            roster_url: "http://roster.test/students".to_string(),
        };
        let browser = RosterBrowser::new(DisplayMode::Slideshow, FieldVisibility::default());
        (App::new(browser, receiver, ui_config, show_splash), sender)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_any_key_skips_splash() {
        let (mut app, _sender) = app(true);
        assert_eq!(app.current_screen(), Screen::Splash);
        assert!(!app.handle_key(press(KeyCode::Char(' '))));
        assert_eq!(app.current_screen(), Screen::Roster);
    }

    #[test]
    fn test_q_on_splash_quits() {
        let (mut app, _sender) = app(true);
        assert!(app.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_no_splash_starts_on_roster() {
        let (app, _sender) = app(false);
        assert_eq!(app.current_screen(), Screen::Roster);
    }

    #[tokio::test]
    async fn test_roster_loaded_during_splash_is_kept() {
        let (mut app, sender) = app(true);
        sender
            .send(WorkerEvent::roster_loaded(smiths_and_jones()))
            .await
            .unwrap();
        app.drain_events();
        assert_eq!(app.current_screen(), Screen::Splash);
        assert_eq!(app.roster().browser.load_state(), &LoadState::Loaded);
    }
}

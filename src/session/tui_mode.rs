//! TUI mode execution

use super::SessionData;
use super::messages::print_session_exit_success;
use super::terminal::TerminalSession;
use crate::ui::{self, UIConfig};
use std::error::Error;

/// Runs the application in TUI mode
///
/// The terminal is restored before this returns, also on error. A fetch still
/// in flight when the user quits is left to finish on its own; its result is
/// dropped.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
/// * `show_splash` - Whether to open on the splash screen
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
    show_splash: bool,
) -> Result<(), Box<dyn Error>> {
    let settings = session.settings;
    let ui_config = UIConfig {
        with_background_color: with_background,
        site_title: settings.site_title.clone(),
        media_origin: settings.media_origin.clone(),
        roster_url: settings.roster_url.clone(),
    };
    let app = ui::App::new(
        settings.browser(),
        session.event_receiver,
        ui_config,
        show_splash,
    );

    let result = {
        let mut terminal = TerminalSession::new()?;
        ui::run(terminal.terminal_mut(), app).await
    };
    result?;

    print_session_exit_success();
    Ok(())
}

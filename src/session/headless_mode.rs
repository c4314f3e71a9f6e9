//! Headless mode execution
//!
//! Waits for the roster, then prints every filtered card and the summary.

use super::SessionData;
use super::messages::SessionMessage;
use crate::browser::{RosterBrowser, StudentCard};
use std::error::Error;
use std::io::{self, Write};

/// Runs the application in headless mode
///
/// # Returns
/// * `Ok(())` - The roster was fetched and printed
/// * `Err` - The fetch failed; the error has already been printed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    let mut browser = session.settings.browser();

    while let Some(mut event) = session.event_receiver.recv().await {
        if event.should_display() {
            log::debug!("{}", event);
        }
        if let Some(outcome) = event.take_outcome() {
            browser.load_roster(outcome);
            break;
        }
    }
    let _ = session.join_handle.await;

    if browser.is_loading() {
        let message = "Roster fetch ended without a result";
        SessionMessage::error(message).print();
        return Err(message.into());
    }
    if let Some(error) = browser.error() {
        SessionMessage::error(format!("Failed to load roster: {}", error)).print();
        return Err(error.into());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_roster(&mut out, &browser, &session.settings.media_origin)?;
    out.flush()?;
    Ok(())
}

/// Every filtered card followed by a blank line, then the totals.
pub fn write_roster<W: Write>(
    out: &mut W,
    browser: &RosterBrowser,
    media_origin: &str,
) -> io::Result<()> {
    for record in browser.filtered() {
        let card = StudentCard::build(record, browser.field_visibility(), media_origin);
        if card.is_blank() {
            continue;
        }
        writeln!(out, "{}", card)?;
    }
    if let Some(message) = browser.no_results_message() {
        writeln!(out, "{}", message)?;
    }
    writeln!(out, "{}", browser.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{DisplayMode, Field, FieldVisibility};
    use crate::student::fixtures::smiths_and_jones;

    fn printed(browser: &RosterBrowser) -> String {
        let mut out = Vec::new();
        write_roster(&mut out, browser, "https://dvonb.xyz").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_matches_and_summary() {
        let mut browser = RosterBrowser::with_records(smiths_and_jones());
        browser.set_search_term("smith");
        let text = printed(&browser);
        assert!(text.contains("Alice A Smith\n"));
        assert!(text.contains("Cara C Smith\n"));
        assert!(!text.contains("Bob"));
        assert!(text.ends_with("2 of 3 students shown\n"));
    }

    #[test]
    fn test_prints_no_results_message() {
        let mut browser = RosterBrowser::with_records(smiths_and_jones());
        browser.set_search_term("zzz");
        assert_eq!(
            printed(&browser),
            "No students found matching \"zzz\".\n0 of 3 students shown\n"
        );
    }

    #[test]
    fn test_fully_hidden_cards_are_skipped() {
        let mut browser = RosterBrowser::new(
            DisplayMode::ShowAll,
            FieldVisibility::with_hidden(&[Field::Name, Field::Image]),
        );
        browser.load_roster(Ok(smiths_and_jones()));
        assert_eq!(printed(&browser), "3 of 3 students shown\n");
    }
}

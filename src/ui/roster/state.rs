//! Roster screen state
//!
//! Wraps the [`RosterBrowser`] with everything that only matters on screen:
//! input focus, picker cursor, scroll offset and the activity log.

use super::components::content::{content_lines, content_paragraph};
use crate::browser::{DisplayMode, RosterBrowser, StudentCard};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::ui::keys::{Action, Focus, map_key};
use crossterm::event::KeyEvent;
use ratatui::layout::Size;
use std::cell::Cell;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct RosterScreen {
    /// Roster, search term, selection and field visibility.
    pub browser: RosterBrowser,
    /// Control receiving keyboard input.
    pub focus: Focus,
    /// Highlighted row while the picker is open.
    pub picker_cursor: usize,
    /// First visible line of the main area.
    pub scroll: u16,
    /// Inner size of the main area at the last draw.
    pub viewport: Cell<Size>,
    /// Origin prepended to relative image paths.
    pub media_origin: String,
    /// Title shown in the header chrome.
    pub site_title: String,
    /// Where the roster is fetched from, shown while loading.
    pub roster_url: String,
    /// Whether to paint the background.
    pub with_background_color: bool,
    /// Events received but not yet applied.
    pub pending_events: VecDeque<WorkerEvent>,
    /// Most recent events, oldest first.
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Frame counter driving the loading spinner.
    pub tick: usize,
}

impl RosterScreen {
    pub fn new(browser: RosterBrowser, ui_config: UIConfig) -> Self {
        Self {
            browser,
            focus: Focus::Browse,
            picker_cursor: 0,
            scroll: 0,
            viewport: Cell::new(Size::default()),
            media_origin: ui_config.media_origin,
            site_title: ui_config.site_title,
            roster_url: ui_config.roster_url,
            with_background_color: ui_config.with_background_color,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// Queues an event; it is applied on the next [`RosterScreen::update`].
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Applies queued events and advances the tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        while let Some(mut event) = self.pending_events.pop_front() {
            if let Some(outcome) = event.take_outcome() {
                self.browser.load_roster(outcome);
                self.scroll = 0;
            }
            self.add_to_activity_log(event);
        }
    }

    /// Maps and applies a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match map_key(key, self.focus, self.browser.display_mode()) {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Returns `true` when the action ends the session.
    pub fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Previous => {
                self.browser.go_previous();
                self.scroll = 0;
            }
            Action::Next => {
                self.browser.go_next();
                self.scroll = 0;
            }
            Action::ToggleMode => {
                self.browser.toggle_display_mode();
                self.focus = Focus::Browse;
                self.scroll = 0;
            }
            Action::SetFocus(Focus::Picker) => {
                self.picker_cursor = self.browser.selected_index();
                self.focus = Focus::Picker;
            }
            Action::SetFocus(focus) => self.focus = focus,
            Action::SearchInput(c) => {
                self.browser.push_search_char(c);
                self.scroll = 0;
            }
            Action::SearchBackspace => {
                self.browser.pop_search_char();
                self.scroll = 0;
            }
            Action::ClearSearch => {
                self.browser.set_search_term("");
                self.scroll = 0;
            }
            Action::JumpInput(c) => self.browser.push_jump_char(c),
            Action::JumpBackspace => self.browser.pop_jump_char(),
            Action::SubmitJump => {
                // An invalid number leaves the box open for correction.
                if self.browser.submit_jump() {
                    self.focus = Focus::Browse;
                    self.scroll = 0;
                }
            }
            Action::PickerUp => self.picker_cursor = self.picker_cursor.saturating_sub(1),
            Action::PickerDown => {
                let last = self.browser.filtered_len().saturating_sub(1);
                self.picker_cursor = (self.picker_cursor + 1).min(last);
            }
            Action::PickerConfirm => {
                if self.browser.filtered_len() > 0 {
                    self.browser.jump_to_selection(self.picker_cursor);
                    self.scroll = 0;
                }
                self.focus = Focus::Browse;
            }
            Action::ToggleField(field) => self.browser.toggle_field(field),
            Action::ScrollUp(lines) => self.scroll = self.scroll.saturating_sub(lines),
            Action::ScrollDown(lines) => {
                self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
            }
        }
        false
    }

    /// Cards for the main area: the selected record, or every filtered record.
    pub fn visible_cards(&self) -> Vec<StudentCard> {
        let visibility = self.browser.field_visibility();
        match self.browser.display_mode() {
            DisplayMode::Slideshow => self
                .browser
                .current()
                .map(|record| StudentCard::build(record, visibility, &self.media_origin))
                .into_iter()
                .collect(),
            DisplayMode::ShowAll => self
                .browser
                .filtered()
                .map(|record| StudentCard::build(record, visibility, &self.media_origin))
                .collect(),
        }
    }

    /// Scroll offset that brings the last wrapped line to the bottom of the
    /// viewport. Before the first draw the width is unknown and lines count
    /// unwrapped.
    fn max_scroll(&self) -> u16 {
        let viewport = self.viewport.get();
        let height = if viewport.width == 0 {
            content_lines(self).len()
        } else {
            content_paragraph(self).line_count(viewport.width)
        };
        let hidden = height.saturating_sub(usize::from(viewport.height));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::state::LoadState;
    use crate::browser::{Field, FieldVisibility};
    use crate::events::Event;
    use crate::logging::LogLevel;
    use crate::student::fixtures::smiths_and_jones;

    fn screen(mode: DisplayMode) -> RosterScreen {
        let ui_config = UIConfig {
            with_background_color: false,
            site_title: "Class Roster".to_string(),
            media_origin: "https://dvonb.xyz".to_string(),
            roster_url: "http://roster.test/students".to_string(),
        };
        RosterScreen::new(RosterBrowser::new(mode, FieldVisibility::default()), ui_config)
    }

    fn loaded(mode: DisplayMode) -> RosterScreen {
        let mut screen = screen(mode);
        screen.add_event(Event::roster_loaded(smiths_and_jones()));
        screen.update();
        screen
    }

    #[test]
    fn test_update_applies_fetch_outcome() {
        let screen = loaded(DisplayMode::Slideshow);
        assert_eq!(screen.browser.load_state(), &LoadState::Loaded);
        assert_eq!(screen.browser.filtered_len(), 3);
        assert_eq!(screen.activity_logs.len(), 1);
        assert!(screen.pending_events.is_empty());
    }

    #[test]
    fn test_failed_fetch_shows_error() {
        let mut screen = screen(DisplayMode::Slideshow);
        screen.add_event(Event::roster_failed("boom".to_string(), LogLevel::Error));
        screen.update();
        assert_eq!(screen.browser.error(), Some("boom"));
        assert_eq!(screen.browser.counter(), "- / 0");
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut screen = screen(DisplayMode::Slideshow);
        for _ in 0..MAX_ACTIVITY_LOGS + 5 {
            screen.add_event(Event::fetch_started("http://roster.test"));
        }
        screen.update();
        assert_eq!(screen.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }

    #[test]
    fn test_typing_a_search_filters_and_resets_scroll() {
        let mut screen = loaded(DisplayMode::ShowAll);
        screen.scroll = 4;
        screen.apply_action(Action::SetFocus(Focus::Search));
        for c in "jones".chars() {
            screen.apply_action(Action::SearchInput(c));
        }
        assert_eq!(screen.browser.filtered_len(), 1);
        assert_eq!(screen.scroll, 0);
        assert_eq!(screen.focus, Focus::Search);
    }

    #[test]
    fn test_picker_opens_on_selection_and_confirms() {
        let mut screen = loaded(DisplayMode::Slideshow);
        screen.apply_action(Action::Next);
        screen.apply_action(Action::SetFocus(Focus::Picker));
        assert_eq!(screen.picker_cursor, 1);

        screen.apply_action(Action::PickerDown);
        screen.apply_action(Action::PickerDown);
        assert_eq!(screen.picker_cursor, 2);
        screen.apply_action(Action::PickerConfirm);
        assert_eq!(screen.browser.selected_index(), 2);
        assert_eq!(screen.focus, Focus::Browse);
    }

    #[test]
    fn test_failed_jump_keeps_focus() {
        let mut screen = loaded(DisplayMode::Slideshow);
        screen.apply_action(Action::SetFocus(Focus::Jump));
        screen.apply_action(Action::JumpInput('9'));
        screen.apply_action(Action::SubmitJump);
        assert_eq!(screen.focus, Focus::Jump);
        assert_eq!(screen.browser.selected_index(), 0);

        screen.apply_action(Action::JumpBackspace);
        screen.apply_action(Action::JumpInput('3'));
        screen.apply_action(Action::SubmitJump);
        assert_eq!(screen.focus, Focus::Browse);
        assert_eq!(screen.browser.selected_index(), 2);
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut screen = loaded(DisplayMode::ShowAll);
        screen.apply_action(Action::ScrollDown(1_000));
        let max = screen.scroll;
        screen.apply_action(Action::ScrollDown(1));
        assert_eq!(screen.scroll, max);
        screen.apply_action(Action::ScrollUp(1_000));
        assert_eq!(screen.scroll, 0);
    }

    #[test]
    fn test_show_all_renders_every_match() {
        let mut screen = loaded(DisplayMode::Slideshow);
        assert_eq!(screen.visible_cards().len(), 1);
        screen.apply_action(Action::ToggleMode);
        assert_eq!(screen.visible_cards().len(), 3);
        screen.apply_action(Action::ToggleField(Field::Name));
        assert!(screen.visible_cards().iter().all(|c| c.heading.is_none()));
    }

    #[test]
    fn test_quit() {
        let mut screen = loaded(DisplayMode::Slideshow);
        assert!(!screen.apply_action(Action::Next));
        assert!(screen.apply_action(Action::Quit));
    }
}

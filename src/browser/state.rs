//! Roster browser state
//!
//! Holds the fetched roster together with everything the user has done to it:
//! the search term, the selected position, the jump box, the display mode and
//! the field toggles. The filtered list and the selected index are derived
//! values; every mutating method recomputes them before returning, so a caller
//! can never observe an index outside the filtered list.

use super::fields::{Field, FieldVisibility};
use crate::student::StudentRecord;
use serde::{Deserialize, Serialize};

/// How the filtered roster is presented.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// One student at a time with previous / next navigation.
    #[default]
    Slideshow,
    /// Every filtered student in order.
    #[strum(to_string = "Show All")]
    ShowAll,
}

/// Where the roster fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Resets `prior` to the front when it does not address an entry of a list of
/// `len` items.
///
/// Out-of-range positions go back to the first entry rather than the last one.
pub fn clamp_index(len: usize, prior: isize) -> usize {
    if len == 0 || prior < 0 || prior as usize >= len {
        0
    } else {
        prior as usize
    }
}

#[derive(Debug, Clone)]
pub struct RosterBrowser {
    all_records: Vec<StudentRecord>,
    load_state: LoadState,
    search_term: String,
    /// Positions into `all_records`, in roster order.
    filtered: Vec<usize>,
    selected_index: usize,
    jump_input: String,
    display_mode: DisplayMode,
    field_visibility: FieldVisibility,
}

impl Default for RosterBrowser {
    fn default() -> Self {
        Self::new(DisplayMode::default(), FieldVisibility::default())
    }
}

impl RosterBrowser {
    pub fn new(display_mode: DisplayMode, field_visibility: FieldVisibility) -> Self {
        Self {
            all_records: Vec::new(),
            load_state: LoadState::Loading,
            search_term: String::new(),
            filtered: Vec::new(),
            selected_index: 0,
            jump_input: String::new(),
            display_mode,
            field_visibility,
        }
    }

    /// A browser that already holds `records`.
    #[cfg(test)]
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let mut browser = Self::default();
        browser.load_roster(Ok(records));
        browser
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Applies the outcome of the one roster fetch.
    ///
    /// The roster is set at most once; later outcomes are ignored.
    pub fn load_roster(&mut self, outcome: Result<Vec<StudentRecord>, String>) {
        if self.load_state != LoadState::Loading {
            return;
        }
        match outcome {
            Ok(records) => {
                self.all_records = records;
                self.load_state = LoadState::Loaded;
            }
            Err(message) => {
                self.all_records.clear();
                self.load_state = LoadState::Failed(message);
            }
        }
        self.refilter();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.refilter();
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
        self.refilter();
    }

    pub fn go_previous(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + len - 1) % len;
    }

    pub fn go_next(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves to the 1-based position typed in `input`.
    ///
    /// Non-numbers, zero, negatives and positions past the end leave the state
    /// untouched. Returns whether the jump happened.
    pub fn jump_to_number(&mut self, input: &str) -> bool {
        let Ok(n) = input.trim().parse::<i64>() else {
            return false;
        };
        if n <= 0 || n as u64 > self.filtered.len() as u64 {
            return false;
        }
        self.selected_index = (n - 1) as usize;
        self.jump_input.clear();
        true
    }

    pub fn push_jump_char(&mut self, c: char) {
        self.jump_input.push(c);
    }

    pub fn pop_jump_char(&mut self) {
        self.jump_input.pop();
    }

    /// Jumps to the number in the jump box; the box is cleared only on success.
    pub fn submit_jump(&mut self) -> bool {
        let input = self.jump_input.clone();
        self.jump_to_number(&input)
    }

    /// Selects a position taken from the filtered list itself (the picker).
    pub fn jump_to_selection(&mut self, index: usize) {
        self.selected_index = clamp_index(self.filtered.len(), index as isize);
    }

    pub fn toggle_field(&mut self, field: Field) {
        self.field_visibility.toggle(field);
    }

    #[cfg(test)]
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = match self.display_mode {
            DisplayMode::Slideshow => DisplayMode::ShowAll,
            DisplayMode::ShowAll => DisplayMode::Slideshow,
        };
    }

    fn refilter(&mut self) {
        let term = self.search_term.trim().to_lowercase();
        self.filtered = self
            .all_records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                term.is_empty() || record.display_name().to_lowercase().contains(&term)
            })
            .map(|(i, _)| i)
            .collect();
        self.selected_index = clamp_index(self.filtered.len(), self.selected_index as isize);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[cfg(test)]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    #[cfg(test)]
    pub fn all_records(&self) -> &[StudentRecord] {
        &self.all_records
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn field_visibility(&self) -> &FieldVisibility {
        &self.field_visibility
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Filtered records in roster order.
    pub fn filtered(&self) -> impl Iterator<Item = &StudentRecord> + '_ {
        self.filtered.iter().map(|&i| &self.all_records[i])
    }

    /// The selected record, or `None` when nothing matches.
    pub fn current(&self) -> Option<&StudentRecord> {
        self.filtered
            .get(self.selected_index)
            .map(|&i| &self.all_records[i])
    }

    /// "`position / total`", or "`- / 0`" when there is no selection.
    pub fn counter(&self) -> String {
        if self.filtered.is_empty() {
            "- / 0".to_string()
        } else {
            format!("{} / {}", self.selected_index + 1, self.filtered.len())
        }
    }

    /// "`N of M students shown`".
    pub fn summary(&self) -> String {
        format!(
            "{} of {} students shown",
            self.filtered.len(),
            self.all_records.len()
        )
    }

    /// Placeholder text of the jump box.
    pub fn jump_hint(&self) -> String {
        if self.filtered.is_empty() {
            "-".to_string()
        } else {
            format!("1 - {}", self.filtered.len())
        }
    }

    /// "`i. Display Name`" for every filtered record, 1-based.
    pub fn picker_entries(&self) -> Vec<String> {
        self.filtered()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record.display_name()))
            .collect()
    }

    /// Shown instead of the roster once it has resolved and nothing matches.
    ///
    /// A failed fetch shows this too, below the error.
    pub fn no_results_message(&self) -> Option<String> {
        if self.filtered.is_empty() && !self.is_loading() {
            Some(format!(
                "No students found matching \"{}\".",
                self.search_term
            ))
        } else {
            None
        }
    }
}

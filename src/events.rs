//! Event System
//!
//! Messages sent from the roster fetcher to whichever loop owns the browser
//! state (TUI or headless).

use crate::logging::{LogLevel, should_log_with_env};
use crate::student::StudentRecord;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// What the fetch produced, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Progress notice, carries no data.
    None,
    Loaded(Vec<StudentRecord>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub outcome: FetchOutcome,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel, outcome: FetchOutcome) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome,
        }
    }

    pub fn fetch_started(url: &str) -> Self {
        Self::new(
            format!("Fetching roster from {}", url),
            EventType::Refresh,
            LogLevel::Debug,
            FetchOutcome::None,
        )
    }

    pub fn roster_loaded(records: Vec<StudentRecord>) -> Self {
        Self::new(
            format!("Loaded {} students", records.len()),
            EventType::Success,
            LogLevel::Info,
            FetchOutcome::Loaded(records),
        )
    }

    pub fn roster_failed(message: String, log_level: LogLevel) -> Self {
        Self::new(
            format!("Failed to load roster: {}", message),
            EventType::Error,
            log_level,
            FetchOutcome::Failed(message),
        )
    }

    /// Moves the fetch result out, if this event carries one.
    pub fn take_outcome(&mut self) -> Option<Result<Vec<StudentRecord>, String>> {
        match std::mem::replace(&mut self.outcome, FetchOutcome::None) {
            FetchOutcome::None => None,
            FetchOutcome::Loaded(records) => Some(Ok(records)),
            FetchOutcome::Failed(message) => Some(Err(message)),
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::fixtures::smiths_and_jones;

    #[test]
    fn test_take_outcome_moves_records_once() {
        let mut event = Event::roster_loaded(smiths_and_jones());
        assert_eq!(event.msg, "Loaded 3 students");
        assert_eq!(event.take_outcome().map(|r| r.map(|v| v.len())), Some(Ok(3)));
        assert_eq!(event.take_outcome(), None);
    }

    #[test]
    fn test_failed_event_carries_message() {
        let mut event = Event::roster_failed("HTTP error with status 500".to_string(), LogLevel::Warn);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(
            event.take_outcome(),
            Some(Err("HTTP error with status 500".to_string()))
        );
        assert!(event.should_display());
        assert!(event.to_string().starts_with("Error ["));
    }
}

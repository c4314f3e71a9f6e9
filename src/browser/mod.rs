//! Roster browsing core
//!
//! Filtering, selection and per-record rendering, independent of any terminal.

pub mod card;
pub mod fields;
pub mod state;

pub use card::StudentCard;
pub use fields::{Field, FieldVisibility};
pub use state::{DisplayMode, RosterBrowser};

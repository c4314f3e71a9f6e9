//! Roster screen components
//!
//! One module per region of the screen, plus the two overlays.

pub mod content;
pub mod controls;
pub mod fields;
pub mod footer;
pub mod header;
pub mod logs;
pub mod picker;

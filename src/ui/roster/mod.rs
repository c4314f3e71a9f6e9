//! Roster screen
//!
//! State, renderer and components of the main screen.

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

pub use renderer::render_roster;
pub use state::RosterScreen;

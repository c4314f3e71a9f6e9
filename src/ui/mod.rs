// Module declarations
mod app;
pub mod keys;
pub mod roster;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};

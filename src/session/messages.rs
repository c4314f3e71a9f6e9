//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;91m"; // Bold Light Red
pub const COLOR_ERROR: &str = "\x1b[1;31m"; // Bold Red
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Success messages for completed operations
    Success(String),
    /// Recoverable problems, such as an unreadable config file
    Warn(String),
    /// Failures that end the session
    Error(String),
}

impl SessionMessage {
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// The message with its coloured `[LEVEL]` tag.
    pub fn formatted(&self) -> String {
        let (color, tag, msg) = match self {
            Self::Success(msg) => (COLOR_SUCCESS, "SUCCESS", msg),
            Self::Warn(msg) => (COLOR_WARN, "WARN", msg),
            Self::Error(msg) => (COLOR_ERROR, "ERROR", msg),
        };
        format!("{}[{}]{} {}", color, tag, COLOR_RESET, msg)
    }

    /// Success goes to stdout, warnings and errors to stderr.
    pub fn print(&self) {
        match self {
            Self::Success(_) => println!("{}", self.formatted()),
            Self::Warn(_) | Self::Error(_) => eprintln!("{}", self.formatted()),
        }
    }
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Class roster closed").print();
}

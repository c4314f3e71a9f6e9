pub mod cli_consts {
    //! Roster Browser Configuration Constants
    //!
    //! This module contains all configuration constants for the roster browser,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // DATA SOURCE CONFIGURATION
    // =============================================================================

    /// Roster endpoint used when no URL is configured.
    pub const DEFAULT_ROSTER_URL: &str =
        "https://dvonb.xyz/api/2025-fall/itis-3135/students?full=1";

    /// Origin prepended to relative `media.src` paths.
    pub const DEFAULT_MEDIA_ORIGIN: &str = "https://dvonb.xyz";

    /// Roster endpoint served by a locally running copy of the API.
    pub const LOCAL_ROSTER_URL: &str = "http://localhost:8080/api/students?full=1";

    /// Media origin of a locally running copy of the API.
    pub const LOCAL_MEDIA_ORIGIN: &str = "http://localhost:8080";

    /// Title shown in the header chrome of every screen.
    pub const DEFAULT_SITE_TITLE: &str = "Class Roster | ITIS3135";

    /// Suffix of the header chrome on the roster screen.
    pub const ROSTER_PAGE_TITLE: &str = "Class Introductions";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Buffer size of the channel carrying fetch outcomes to the UI.
    /// The fetcher sends a progress notice and then the outcome.
    pub const EVENT_QUEUE_SIZE: usize = 8;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 20;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP timeouts for the one roster request
    pub mod http {
        use std::time::Duration;

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 20;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal UI timing
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Key poll interval of the UI loop (milliseconds)
        pub const TICK_RATE_MS: u64 = 100;

        /// Lines scrolled by PageUp / PageDown
        pub const PAGE_SCROLL_LINES: u16 = 10;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn tick_rate() -> Duration {
            Duration::from_millis(TICK_RATE_MS)
        }
    }
}

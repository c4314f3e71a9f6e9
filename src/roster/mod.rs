use crate::roster::error::RosterError;
use crate::student::StudentRecord;

pub(crate) mod client;
pub use client::RosterClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The remote roster API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RosterSource: Send + Sync {
    /// Where the roster is fetched from, for display and logging.
    fn roster_url(&self) -> String;

    /// Fetches every student record. One request, no retries.
    async fn fetch_roster(&self) -> Result<Vec<StudentRecord>, RosterError>;
}

//! Roster API Client
//!
//! A reqwest client for the class roster endpoint.

use crate::consts::cli_consts::http;
use crate::roster::RosterSource;
use crate::roster::error::RosterError;
use crate::student::{StudentRecord, parse_roster};
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("class-roster/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RosterClient {
    client: Client,
    roster_url: String,
}

impl RosterClient {
    pub fn new(roster_url: impl Into<String>) -> Result<Self, RosterError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            roster_url: roster_url.into(),
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, RosterError> {
        if !response.status().is_success() {
            return Err(RosterError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl RosterSource for RosterClient {
    fn roster_url(&self) -> String {
        self.roster_url.clone()
    }

    async fn fetch_roster(&self) -> Result<Vec<StudentRecord>, RosterError> {
        let response = self
            .client
            .get(&self.roster_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(parse_roster(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response on a random local port and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/api/students?full=1", addr)
    }

    #[tokio::test]
    /// A 200 with a JSON array should yield the records in order.
    async fn test_fetch_roster_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"name":{"first":"Alice","last":"Smith"}},{"mascot":"Owl"}]"#,
        )
        .await;
        let client = RosterClient::new(url).unwrap();
        let roster = client.fetch_roster().await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].display_name(), "Alice Smith");
        assert_eq!(roster[1].display_name(), "Owl");
    }

    #[tokio::test]
    /// A 500 should surface as an HTTP error carrying the status.
    async fn test_fetch_roster_server_error() {
        let url = serve_once("500 Internal Server Error", "").await;
        let client = RosterClient::new(url).unwrap();
        let err = client.fetch_roster().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "HTTP error with status 500: Internal Server Error"
        );
    }

    #[tokio::test]
    /// A 200 with a body that is not a roster should be a decode error.
    async fn test_fetch_roster_invalid_json() {
        let url = serve_once("200 OK", "<html>maintenance</html>").await;
        let client = RosterClient::new(url).unwrap();
        let err = client.fetch_roster().await.unwrap_err();
        assert!(matches!(err, RosterError::Decode(_)));
    }

    #[tokio::test]
    /// Nothing listening should be a network error, not a panic.
    async fn test_fetch_roster_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = RosterClient::new(format!("http://{}/", addr)).unwrap();
        let err = client.fetch_roster().await.unwrap_err();
        assert!(matches!(err, RosterError::Reqwest(_)));
    }

    #[tokio::test]
    #[ignore] // This test requires network access to the live roster API.
    /// Should fetch the live roster.
    async fn test_fetch_live_roster() {
        let client = RosterClient::new(crate::consts::cli_consts::DEFAULT_ROSTER_URL).unwrap();
        match client.fetch_roster().await {
            Ok(roster) => println!("Got {} students", roster.len()),
            Err(e) => panic!("Failed to fetch roster: {}", e),
        }
    }
}

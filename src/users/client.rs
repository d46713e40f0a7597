//! HTTP client for the random-user service.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::batch::UserBatch;
use super::query::{RANDOM_USER_ENDPOINT, UserQuery};
use crate::error::UserError;

/// Fetches batches of generated users.
///
/// Cheap to clone; clones share the connection pool.
///
/// ```ignore
/// let client = RandomUserClient::new()?.timeout(Duration::from_secs(10));
/// let batch = client.fetch(&UserQuery::default()).await?;
/// println!("{}", batch.raw);
/// ```
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl RandomUserClient {
    /// Client for the public endpoint.
    pub fn new() -> Result<Self, UserError> {
        Self::with_endpoint(RANDOM_USER_ENDPOINT)
    }

    /// Client for another deployment of the same API.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, UserError> {
        Ok(Self {
            http: Client::new(),
            endpoint: Url::parse(endpoint)?,
            timeout: None,
        })
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run `query` and decode the body for its format.
    pub async fn fetch(&self, query: &UserQuery) -> Result<UserBatch, UserError> {
        let url = query.url(&self.endpoint);
        log::debug!("fetching users: {url}");

        let mut request = self.http.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            log::warn!("random-user request failed with HTTP {status}");
            return Err(UserError::Http { status, message });
        }

        let body = response.text().await?;
        let batch = UserBatch::from_body(query.format, body)?;
        log::debug!("received {} users as {}", batch.len(), query.format.param());
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let client = RandomUserClient::new().unwrap();
        assert_eq!(client.endpoint().as_str(), RANDOM_USER_ENDPOINT);
    }

    #[test]
    fn bad_endpoint_is_rejected() {
        let err = RandomUserClient::with_endpoint("not a url").unwrap_err();
        assert!(matches!(err, UserError::Url(_)));
    }
}

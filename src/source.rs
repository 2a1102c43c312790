use crate::config::CalendarKind;
use crate::models::Session;
use crate::normalize::parse_sessions;
use reqwest::{
    header::{ACCEPT, COOKIE},
    Client, StatusCode,
};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("session source unreachable: {0}")]
    Request(#[from] reqwest::Error),
    #[error("session source answered {0}")]
    Status(StatusCode),
    #[error("session source sent an unreadable session list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct SessionSource {
    client: Client,
    base_url: String,
}

impl SessionSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, kind: &CalendarKind) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), kind.upstream_path())
    }

    pub async fn fetch(
        &self,
        kind: &CalendarKind,
        cookie: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Session>, SourceError> {
        let mut url = self.url_for(kind);
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        debug!("fetching sessions from {url}");
        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(parse_sessions(decode_records(&body)?))
    }
}

fn decode_records(body: &[u8]) -> Result<Vec<Value>, SourceError> {
    Ok(serde_json::from_slice(body)?)
}

//! HTTP fetching with a bounded retry policy.
//!
//! Every catalog request goes through [`Fetcher::fetch`], which attaches the
//! bearer token, retries on a non-200 status, a transport failure or a body
//! that is not JSON, and gives up with [`FetchError::Exhausted`] once the
//! attempt budget is spent. Exhaustion aborts the run.
//!
//! The network itself sits behind the [`Transport`] trait so the retry
//! policy can be driven by scripted responses.

use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio::time::sleep;

use crate::{Res, config};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("gave up on {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: String,
    },
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub params: Vec<(String, String)>,
    /// Whether the bearer token is attached.
    pub authenticated: bool,
}

impl Request {
    pub fn api(url: impl Into<String>, params: &[(&str, String)]) -> Self {
        Self {
            url: url.into(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            authenticated: true,
        }
    }

    pub fn page(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
            authenticated: false,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    fn send(&self, request: &Request) -> impl Future<Output = Res<RawResponse>>;
}

/// [`Transport`] backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
    token: String,
}

impl HttpTransport {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Res<RawResponse> {
        let mut builder = self.client.get(&request.url).query(&request.params);
        if request.authenticated {
            builder = builder.bearer_auth(&self.token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

pub struct Fetcher<T = HttpTransport> {
    transport: T,
    attempts: u32,
    backoff: Duration,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            attempts: config::DEFAULT_FETCH_ATTEMPTS,
            backoff: Duration::ZERO,
        }
    }

    /// Sets the total number of attempts per request. Zero is treated as one.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Sets a fixed pause between failed attempts.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `url` with the bearer token and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Exhausted`] when every attempt ended in a
    /// transport error, a non-200 status or an unparseable body.
    pub async fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let request = Request::api(url, params);
        self.retry(&request, |body| {
            serde_json::from_str::<Value>(body).map_err(|e| e.to_string())
        })
        .await
    }

    /// Like [`Fetcher::fetch`], then decodes the JSON into `D`.
    ///
    /// A decode failure is not retried: the body was valid JSON, it just
    /// does not have the shape we need.
    pub async fn fetch_as<D: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<D, FetchError> {
        let value = self.fetch(url, params).await?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a public web page without credentials and returns its body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let request = Request::page(url);
        self.retry(&request, |body| Ok(body.to_string())).await
    }

    async fn retry<O, F>(&self, request: &Request, parse: F) -> Result<O, FetchError>
    where
        F: Fn(&str) -> Result<O, String>,
    {
        let mut last = String::new();

        for attempt in 1..=self.attempts {
            match self.transport.send(request).await {
                Ok(response) if response.status == 200 => match parse(&response.body) {
                    Ok(parsed) => return Ok(parsed),
                    Err(e) => last = format!("invalid body: {}", e),
                },
                Ok(response) => last = format!("HTTP status {}", response.status),
                Err(e) => last = e.to_string(),
            }

            if attempt < self.attempts && !self.backoff.is_zero() {
                sleep(self.backoff).await;
            }
        }

        Err(FetchError::Exhausted {
            url: request.url.clone(),
            attempts: self.attempts,
            last,
        })
    }
}

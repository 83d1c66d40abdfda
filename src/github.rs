use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use crate::models::SearchPage;

/// What a single search request came back with
#[derive(Debug)]
pub enum SearchOutcome {
    Page {
        page: SearchPage,
        /// `X-RateLimit-Remaining`, when the server sent it
        remaining: Option<u64>,
    },
    /// Rate limit exhausted; `reset` is the epoch second it lifts
    RateLimited { reset: i64 },
}

/// Source of repository search results
pub trait SearchApi {
    fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchOutcome>;
}

#[derive(Debug)]
pub struct GitHubSearchClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubSearchClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }
}

impl SearchApi for GitHubSearchClient {
    fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchOutcome> {
        debug!(query, page, per_page, "searching repositories");

        let response = self
            .client
            .get(&self.base_url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, concat!("scoutkit/", env!("CARGO_PKG_VERSION")))
            .query(&[
                ("q", query.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
                ("order", "desc".to_string()),
            ])
            .send()
            .context("Search request failed")?;

        let status = response.status();
        let remaining = header_number::<u64>(response.headers(), "x-ratelimit-remaining");

        if status == StatusCode::FORBIDDEN {
            if let Some(reset) = header_number::<i64>(response.headers(), "x-ratelimit-reset")
                .filter(|reset| *reset != 0)
            {
                return Ok(SearchOutcome::RateLimited { reset });
            }
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("GitHub search returned {status}: {}", body.trim());
        }

        let page = response
            .json::<SearchPage>()
            .context("Failed to parse search response JSON")?;

        Ok(SearchOutcome::Page { page, remaining })
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// How long to wait for a rate limit resetting at `reset` (epoch seconds).
/// Never shorter than `margin`, so stale resets still pause between retries.
#[must_use]
pub fn rate_limit_wait(reset: i64, now: DateTime<Utc>, margin: Duration) -> Duration {
    let margin_ms = i64::try_from(margin.as_millis()).unwrap_or(i64::MAX);
    let wait_ms = reset
        .saturating_mul(1000)
        .saturating_sub(now.timestamp_millis())
        .saturating_add(margin_ms)
        .max(margin_ms);

    u64::try_from(wait_ms).map_or(Duration::ZERO, Duration::from_millis)
}

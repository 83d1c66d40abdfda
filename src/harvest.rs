use std::collections::{BTreeMap, HashSet};
use std::thread;
use std::time::Instant;

use chrono::{TimeZone, Utc};
use tracing::{debug, warn};

use crate::config::HarvestConfig;
use crate::error_handling;
use crate::github::{rate_limit_wait, SearchApi, SearchOutcome};
use crate::models::{DateWindow, RepositoryItem, SearchPage};
use crate::ui;

/// Search query for one star value and creation window
#[must_use]
pub fn build_query(topic: &str, stars: u64, window: &DateWindow) -> String {
    format!("topic:{topic} stars:{stars} created:{window}")
}

/// Walks star values × date windows × pages against a [`SearchApi`]
pub struct Harvester<'a, A: SearchApi> {
    api: &'a A,
    config: &'a HarvestConfig,
}

impl<'a, A: SearchApi> Harvester<'a, A> {
    pub const fn new(api: &'a A, config: &'a HarvestConfig) -> Self {
        Self { api, config }
    }

    /// Fetch one page, sleeping through rate-limit resets.
    ///
    /// Any failure yields an empty page, which ends pagination for the
    /// current window.
    pub fn fetch_page(&self, query: &str, page: u32) -> SearchPage {
        loop {
            match self.api.search(query, page, self.config.per_page) {
                Ok(SearchOutcome::Page {
                    page: results,
                    remaining,
                }) => {
                    if let Some(remaining) = remaining {
                        ui::print_info(&format!("  [Rate limit remaining: {remaining}]"));
                    }
                    return results;
                }
                Ok(SearchOutcome::RateLimited { reset }) => {
                    let wait = rate_limit_wait(reset, Utc::now(), self.config.rate_limit_margin);
                    let reset_at = Utc
                        .timestamp_opt(reset, 0)
                        .single()
                        .map_or_else(|| reset.to_string(), |t| t.to_rfc3339());
                    ui::print_warning(&format!(
                        "⚠️  Rate limit reached (resets {reset_at}), waiting {} seconds...",
                        wait.as_secs()
                    ));
                    warn!(reset, wait_secs = wait.as_secs(), "rate limited");
                    thread::sleep(wait);
                }
                Err(e) => {
                    error_handling::report_search_failure(query, page, &e);
                    return SearchPage::default();
                }
            }
        }
    }

    /// All items for one (star, window) query, at most `max_pages` pages
    pub fn fetch_window(&self, stars: u64, window: &DateWindow) -> Vec<RepositoryItem> {
        let query = build_query(&self.config.topic, stars, window);
        debug!(%query, "starting window");

        let mut repos = Vec::new();
        let mut total_count = 0;
        let per_page = self.config.per_page as usize;

        for page_number in 1..=self.config.max_pages {
            let page = self.fetch_page(&query, page_number);

            if page_number == 1 {
                total_count = page.total_count;
            }

            if page.items.is_empty() {
                break;
            }

            let page_len = page.items.len();
            repos.extend(page.items);

            if page_len < per_page || page_number == self.config.max_pages {
                break;
            }

            thread::sleep(self.config.page_delay);
        }

        ui::print_info(&format!(
            "  📅 {} ~ {}: found {total_count} results, fetched {}",
            window.start,
            window.end,
            repos.len()
        ));
        repos
    }

    /// Run every configured query and return the deduplicated union
    pub fn harvest_all(&self) -> Vec<RepositoryItem> {
        let started = Instant::now();
        let mut all_repos = Vec::new();

        for &stars in &self.config.stars {
            ui::print_banner(&format!("🌟 Harvesting repositories with {stars} stars"));

            let mut star_count = 0;

            for window in &self.config.windows {
                let repos = self.fetch_window(stars, window);
                star_count += repos.len();
                all_repos.extend(repos);

                thread::sleep(self.config.window_delay);
            }

            ui::print_success(&format!("  ✅ {stars} stars: {star_count} repositories"));
        }

        let raw_count = all_repos.len();
        let unique = dedupe_by_id(all_repos);

        ui::print_banner("🎉 Harvest complete!");
        ui::print_info(&format!("Raw results: {raw_count}"));
        ui::print_info(&format!("After deduplication: {}", unique.len()));
        ui::print_info(&format!(
            "Elapsed: {:.1} seconds",
            started.elapsed().as_secs_f64()
        ));

        unique
    }
}

/// Keep the first record seen for each id, in first-seen order.
/// Records without an id (or with id 0) are dropped.
#[must_use]
pub fn dedupe_by_id(repos: Vec<RepositoryItem>) -> Vec<RepositoryItem> {
    let mut seen = HashSet::new();

    repos
        .into_iter()
        .filter(|repo| match repo.id {
            Some(id) if id != 0 => seen.insert(id),
            _ => false,
        })
        .collect()
}

/// Count records per star value
#[must_use]
pub fn star_histogram(repos: &[RepositoryItem]) -> BTreeMap<u64, usize> {
    let mut counts = BTreeMap::new();
    for repo in repos {
        *counts.entry(repo.stargazers_count.unwrap_or(0)).or_insert(0) += 1;
    }
    counts
}

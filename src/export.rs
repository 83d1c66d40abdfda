use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::models::RepositoryItem;

pub const DESCRIPTION_LIMIT: usize = 500;

pub const CSV_HEADER: [&str; 23] = [
    "owner",
    "owner_url",
    "repo",
    "repo_url",
    "description",
    "topics",
    "language",
    "stars_display",
    "stars",
    "updated_iso",
    "code_url",
    "issues_url",
    "pulls_url",
    "discussions_url",
    "sponsor_url",
    "forks",
    "watchers",
    "open_issues",
    "created_at",
    "license",
    "is_fork",
    "is_archived",
    "homepage",
];

/// Flattened repository as written to the JSON export
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportRecord {
    pub owner: Option<String>,
    pub owner_url: Option<String>,
    pub repo: Option<String>,
    pub repo_url: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stars_display: Option<u64>,
    pub stars: Option<u64>,
    pub updated_iso: Option<String>,
    pub code_url: Option<String>,
    pub issues_url: Option<String>,
    pub pulls_url: Option<String>,
    pub discussions_url: Option<String>,
    /// Needs a separate API call per repository; always null
    pub sponsor_url: Option<String>,
    pub id: Option<u64>,
    pub full_name: Option<String>,
    pub forks: Option<u64>,
    pub watchers: Option<u64>,
    pub open_issues: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    pub homepage: Option<String>,
    pub size: Option<u64>,
    pub default_branch: Option<String>,
    pub license: Option<String>,
    pub is_fork: Option<bool>,
    pub is_archived: Option<bool>,
    pub is_disabled: Option<bool>,
}

fn sub_url(repo_url: Option<&str>, suffix: &str) -> Option<String> {
    repo_url.map(|url| format!("{url}/{suffix}"))
}

impl From<&RepositoryItem> for ExportRecord {
    fn from(repo: &RepositoryItem) -> Self {
        let repo_url = repo.html_url.as_deref();

        Self {
            owner: repo.owner_login().map(str::to_string),
            owner_url: repo.owner_url().map(str::to_string),
            repo: repo.name.clone(),
            repo_url: repo.html_url.clone(),
            description: repo.description.clone(),
            topics: repo.topics.clone(),
            language: repo.language.clone(),
            stars_display: repo.stargazers_count,
            stars: repo.stargazers_count,
            updated_iso: repo.updated_at.clone(),
            code_url: repo.html_url.clone(),
            issues_url: sub_url(repo_url, "issues"),
            pulls_url: sub_url(repo_url, "pulls"),
            discussions_url: sub_url(repo_url, "discussions"),
            sponsor_url: None,
            id: repo.id,
            full_name: repo.full_name.clone(),
            forks: repo.forks_count,
            watchers: repo.watchers_count,
            open_issues: repo.open_issues_count,
            created_at: repo.created_at.clone(),
            updated_at: repo.updated_at.clone(),
            pushed_at: repo.pushed_at.clone(),
            homepage: repo.homepage.clone(),
            size: repo.size,
            default_branch: repo.default_branch.clone(),
            license: repo.license_name().map(str::to_string),
            is_fork: repo.fork,
            is_archived: repo.archived,
            is_disabled: repo.disabled,
        }
    }
}

/// Write the full field set as a pretty-printed JSON array
pub fn save_json(repos: &[RepositoryItem], path: &Path) -> Result<()> {
    let records: Vec<ExportRecord> = repos.iter().map(ExportRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).context("Failed to serialize repositories")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON output: {}", path.display()))?;
    Ok(())
}

/// First `limit` characters of `text`
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn bool_cell(value: Option<bool>) -> String {
    match value {
        Some(true) => "True".to_string(),
        Some(false) => "False".to_string(),
        None => String::new(),
    }
}

/// One CSV row in [`CSV_HEADER`] order
#[must_use]
pub fn csv_row(repo: &RepositoryItem) -> Vec<String> {
    let repo_url = repo.html_url.as_deref();

    vec![
        cell(repo.owner_login()),
        cell(repo.owner_url()),
        cell(repo.name.as_deref()),
        cell(repo_url),
        repo.description
            .as_deref()
            .map(|d| truncate_chars(d, DESCRIPTION_LIMIT).to_string())
            .unwrap_or_default(),
        repo.topics.join(", "),
        cell(repo.language.as_deref()),
        cell(repo.stargazers_count),
        cell(repo.stargazers_count),
        cell(repo.updated_at.as_deref()),
        cell(repo_url),
        cell(sub_url(repo_url, "issues")),
        cell(sub_url(repo_url, "pulls")),
        cell(sub_url(repo_url, "discussions")),
        String::new(),
        cell(repo.forks_count),
        cell(repo.watchers_count),
        cell(repo.open_issues_count),
        cell(repo.created_at.as_deref()),
        cell(repo.license_name()),
        bool_cell(repo.fork),
        bool_cell(repo.archived),
        cell(repo.homepage.as_deref()),
    ]
}

/// Write the CSV subset with a header row
pub fn save_csv(repos: &[RepositoryItem], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV output: {}", path.display()))?;

    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for repo in repos {
        writer
            .write_record(csv_row(repo))
            .with_context(|| format!("Failed to write CSV row for {repo}"))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV output: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{License, Owner};

    fn sample() -> RepositoryItem {
        RepositoryItem {
            id: Some(42),
            name: Some("agent".to_string()),
            full_name: Some("octo/agent".to_string()),
            html_url: Some("https://github.com/octo/agent".to_string()),
            description: Some("Tiny LLM agent".to_string()),
            owner: Some(Owner {
                login: Some("octo".to_string()),
                html_url: Some("https://github.com/octo".to_string()),
            }),
            topics: vec!["llm".to_string(), "agents".to_string()],
            language: Some("Rust".to_string()),
            stargazers_count: Some(2),
            forks_count: Some(1),
            watchers_count: Some(2),
            open_issues_count: Some(0),
            license: Some(License {
                name: Some("MIT License".to_string()),
            }),
            fork: Some(false),
            archived: Some(true),
            ..RepositoryItem::default()
        }
    }

    #[test]
    fn test_export_record_derives_urls() {
        let record = ExportRecord::from(&sample());
        assert_eq!(record.owner.as_deref(), Some("octo"));
        assert_eq!(
            record.issues_url.as_deref(),
            Some("https://github.com/octo/agent/issues")
        );
        assert_eq!(record.license.as_deref(), Some("MIT License"));
        assert_eq!(record.sponsor_url, None);
    }

    #[test]
    fn test_export_record_without_url_has_no_derived_urls() {
        let repo = RepositoryItem {
            id: Some(1),
            ..RepositoryItem::default()
        };
        let record = ExportRecord::from(&repo);
        assert_eq!(record.pulls_url, None);
        assert_eq!(record.discussions_url, None);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(600);
        let truncated = truncate_chars(&text, DESCRIPTION_LIMIT);
        assert_eq!(truncated.chars().count(), 500);
        assert_eq!(truncate_chars("short", DESCRIPTION_LIMIT), "short");
    }

    #[test]
    fn test_csv_row_layout() {
        let row = csv_row(&sample());
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(row[5], "llm, agents");
        assert_eq!(row[14], "");
        assert_eq!(row[20], "False");
        assert_eq!(row[21], "True");
        assert_eq!(row[22], "");
    }

    #[test]
    fn test_csv_row_truncates_description() {
        let mut repo = sample();
        repo.description = Some("x".repeat(2000));
        let row = csv_row(&repo);
        assert_eq!(row[4].len(), DESCRIPTION_LIMIT);
    }
}

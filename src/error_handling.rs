use crate::ui;

/// Broad cause of a failed request, used to pick recovery guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Authentication,
    RateLimit,
    Network,
    Other,
}

/// Classify an error chain by the messages it carries
#[must_use]
pub fn classify(err: &anyhow::Error) -> FailureKind {
    let message = format!("{err:#}").to_lowercase();

    if message.contains("401") || message.contains("bad credentials") {
        FailureKind::Authentication
    } else if message.contains("rate limit") || message.contains("403") {
        FailureKind::RateLimit
    } else if message.contains("timed out")
        || message.contains("timeout")
        || message.contains("connect")
        || message.contains("dns")
        || message.contains("connection")
    {
        FailureKind::Network
    } else {
        FailureKind::Other
    }
}

/// Report a failed search page; the caller carries on with an empty page
pub fn report_search_failure(query: &str, page: u32, err: &anyhow::Error) {
    ui::print_error(&format!("❌ Request error ({query}, page {page}): {err:#}"));
    tracing::warn!(query, page, error = %format!("{err:#}"), "search page dropped");

    match classify(err) {
        FailureKind::Authentication => {
            ui::print_info("🔑 Authentication issues:");
            ui::print_info("   • Check the token passed via --token or GITHUB_TOKEN");
            ui::print_info("   • Generate a new one at https://github.com/settings/tokens");
        }
        FailureKind::RateLimit => {
            ui::print_info("⏰ Rate limit issues:");
            ui::print_info("   • Check rate limit: curl -H \"Authorization: token $GITHUB_TOKEN\" https://api.github.com/rate_limit");
            ui::print_info("   • Raise --window-delay-ms to space out queries");
        }
        FailureKind::Network => {
            ui::print_info("🌐 Network issues:");
            ui::print_info("   • Check internet connection");
            ui::print_info("   • Check GitHub status: https://www.githubstatus.com/");
        }
        FailureKind::Other => {}
    }
}

/// Report a failed login request before the error ends the probe
pub fn report_probe_failure(url: &str, err: &anyhow::Error) {
    let suggestions: &[&str] = match classify(err) {
        FailureKind::Network => &[
            "Check that the lab instance is still running",
            "Lab URLs expire; start the lab again and pass the new --url",
        ],
        _ => &["Check the target URL and that it accepts form logins"],
    };

    ui::show_error_with_help(&format!("Login request to {url} failed: {err:#}"), suggestions);
}

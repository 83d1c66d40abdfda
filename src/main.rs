use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoutkit::commands;
use scoutkit::config::{self, HarvestConfig, ProbeConfig};
use scoutkit::models::DateWindow;

#[derive(Parser)]
#[command(name = "scoutkit")]
#[command(about = "GitHub low-star repository harvester and login response-length prober")]
#[command(version)]
#[command(
    long_about = "GitHub low-star repository harvester and login response-length prober.\n\n`harvest` collects repositories for a topic by exact star count and creation window, then writes JSON and CSV.\n`probe` enumerates usernames by response length and tests passwords against a training-lab login form."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect repositories from the GitHub search API
    Harvest(HarvestArgs),
    /// Enumerate usernames and passwords against a login form
    Probe(ProbeArgs),
}

#[derive(Args)]
struct HarvestArgs {
    /// Exact star count to search for (repeatable, default 2)
    #[arg(long = "star", value_name = "N")]
    stars: Vec<u64>,

    /// Creation window START..END (repeatable, defaults to the built-in table)
    #[arg(long = "window", value_name = "START..END")]
    windows: Vec<DateWindow>,

    /// Repository topic to filter on
    #[arg(long, default_value = "llm")]
    topic: String,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Search endpoint
    #[arg(long, default_value = config::GITHUB_SEARCH_URL)]
    api_url: String,

    /// JSON output path
    #[arg(long, default_value = config::DEFAULT_JSON_OUTPUT)]
    json_out: PathBuf,

    /// CSV output path
    #[arg(long, default_value = config::DEFAULT_CSV_OUTPUT)]
    csv_out: PathBuf,

    /// Pause between pages of one query
    #[arg(long, default_value_t = 1000)]
    page_delay_ms: u64,

    /// Pause between date windows
    #[arg(long, default_value_t = 2000)]
    window_delay_ms: u64,

    /// Extra wait after a rate-limit reset before retrying
    #[arg(long, default_value_t = 10)]
    rate_limit_margin_secs: u64,
}

impl HarvestArgs {
    fn into_config(self) -> HarvestConfig {
        let defaults = HarvestConfig::default();

        HarvestConfig {
            api_url: self.api_url,
            token: self.token.unwrap_or_default(),
            topic: self.topic,
            stars: if self.stars.is_empty() {
                defaults.stars
            } else {
                self.stars
            },
            windows: if self.windows.is_empty() {
                defaults.windows
            } else {
                self.windows
            },
            page_delay: Duration::from_millis(self.page_delay_ms),
            window_delay: Duration::from_millis(self.window_delay_ms),
            rate_limit_margin: Duration::from_secs(self.rate_limit_margin_secs),
            json_output: self.json_out,
            csv_output: self.csv_out,
            ..defaults
        }
    }
}

#[derive(Args)]
struct ProbeArgs {
    /// Login form URL of the lab instance
    #[arg(long)]
    url: String,

    /// Username list, one per line
    #[arg(long, default_value = "./username.txt")]
    usernames: PathBuf,

    /// Password list, one per line
    #[arg(long, default_value = "./password.txt")]
    passwords: PathBuf,

    /// Response body length for a username that does not exist
    #[arg(long, default_value_t = 2994)]
    invalid_length: usize,

    /// Login attempts per username before moving on
    #[arg(long, default_value_t = 5)]
    attempts: u32,
}

impl ProbeArgs {
    fn into_config(self) -> ProbeConfig {
        ProbeConfig {
            url: self.url,
            usernames_file: self.usernames,
            passwords_file: self.passwords,
            invalid_length: self.invalid_length,
            attempts_per_username: self.attempts,
            ..ProbeConfig::default()
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoutkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    ctrlc::set_handler(|| {
        println!("\n[*] Exiting");
        std::process::exit(1);
    })
    .context("Failed to install Ctrl-C handler")?;

    match cli.command {
        Commands::Harvest(args) => commands::harvest::handle_command(&args.into_config()),
        Commands::Probe(args) => commands::probe::handle_command(&args.into_config()),
    }
}

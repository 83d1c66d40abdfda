use anyhow::Result;

use crate::config::HarvestConfig;
use crate::export;
use crate::github::GitHubSearchClient;
use crate::harvest::{star_histogram, Harvester};
use crate::ui;

pub fn handle_command(config: &HarvestConfig) -> Result<()> {
    if let Err(e) = config.validate() {
        ui::show_error_with_help(
            &format!("{e}"),
            &[
                "Generate a token at https://github.com/settings/tokens (public_repo scope)",
                "Pass it with --token or export GITHUB_TOKEN",
            ],
        );
        return Err(e);
    }

    ui::print_info(&format!(
        "Harvesting topic '{}' for stars {:?} across {} date windows",
        config.topic,
        config.stars,
        config.windows.len()
    ));

    let client = GitHubSearchClient::new(&config.api_url, &config.token)?;
    let repos = Harvester::new(&client, config).harvest_all();

    export::save_json(&repos, &config.json_output)?;
    ui::print_success(&format!("💾 Saved to: {}", config.json_output.display()));

    export::save_csv(&repos, &config.csv_output)?;
    ui::print_success(&format!("💾 Saved to: {}", config.csv_output.display()));

    ui::print_header("\n📊 Statistics:");
    for (stars, count) in star_histogram(&repos) {
        ui::print_info(&format!("   {stars} stars: {count} repositories"));
    }

    Ok(())
}

use anyhow::Result;

use crate::config::ProbeConfig;
use crate::error_handling;
use crate::probe::{self, HttpLoginTarget};
use crate::ui;
use crate::wordlist;

pub fn handle_command(config: &ProbeConfig) -> Result<()> {
    config.validate()?;

    let target = HttpLoginTarget::new(&config.url)?;

    ui::print_header("\n[*] Validating usernames\n");
    let usernames = wordlist::read_wordlist(&config.usernames_file)?;
    let valid_usernames = probe::enumerate_usernames(&target, &usernames, config)
        .inspect_err(|e| error_handling::report_probe_failure(&config.url, e))?;

    ui::print_header("\n[*] Validating password\n");
    let passwords = wordlist::read_wordlist(&config.passwords_file)?;
    let credentials = probe::crack_passwords(
        &target,
        &valid_usernames,
        &passwords,
        &config.failure_patterns,
    )
    .inspect_err(|e| error_handling::report_probe_failure(&config.url, e))?;

    probe::print_credentials(&credentials);
    Ok(())
}

//! Organization command handlers

use log::debug;

use crate::cli::OrganizationCommand;
use crate::elis::ElisClient;
use crate::output::output_organization;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command};

/// Run the 'organization get' command
pub async fn run_organization_command(
    client: &ElisClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Organization {
        command: OrganizationCommand::Get { id, output },
    } = &cli.command
    else {
        unreachable!()
    };

    match id {
        Some(id) => debug!("Fetching organization {}", id),
        None => debug!("Fetching organization of the current user"),
    }

    let spinner = create_spinner("Fetching organization...", cli.quiet);
    let organization = client.get_organization(*id).await;
    finish_spinner(spinner);

    output_organization(&organization?, *output);
    Ok(())
}

//! elisctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use elisctl::{
    run_configure_command, run_organization_command, run_queue_command, run_schema_command,
    run_workspace_command, Cli, ClientIdentity, ClientOptions, Command, ElisClient,
    ProfileResolver,
};

async fn dispatch(client: &ElisClient, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Configure => unreachable!("configure runs without a session"),
        Command::Organization { .. } => run_organization_command(client, cli).await,
        Command::Workspace { .. } => run_workspace_command(client, cli).await,
        Command::Queue { .. } => run_queue_command(client, cli).await,
        Command::Schema { .. } => run_schema_command(client, cli).await,
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Configure = cli.command {
        return run_configure_command(cli);
    }

    let identity = ClientIdentity::from_build();
    debug!("Client identity: {}", identity.user_agent());

    let client = ElisClient::new(
        identity,
        ProfileResolver::new(cli.profile.as_deref()),
        ClientOptions::default(),
    );
    client.in_session(dispatch(&client, cli)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting elisctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: profile={:?}, verbose={}, quiet={}",
        cli.profile, cli.verbose, cli.quiet
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;
use clap::Parser;
use petfriends::cli::{Cli, Commands};
use petfriends::client::ApiClient;
use petfriends::commands;
use petfriends::config::Config;
use petfriends::output::print_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(status) if (200..300).contains(&status) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// RUST_LOG wins; otherwise `debug` for this crate with --verbose, `warn` without.
fn init_logging(verbose: bool) {
    let default = if verbose { "petfriends=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<u16> {
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = ApiClient::new(&config)?;
    let verbose = cli.verbose;

    match cli.command {
        Commands::Key(args) => commands::auth::key(&client, &config, args, verbose).await,
        Commands::Pets { mine } => {
            commands::pets::list(&client, &config, cli.format, mine, verbose).await
        }
        Commands::Add { fields, photo } => {
            commands::pets::add(&client, &config, &fields, &photo, verbose).await
        }
        Commands::AddSimple { fields } => {
            commands::pets::add_simple(&client, &config, &fields, verbose).await
        }
        Commands::SetPhoto { pet_id, photo } => {
            commands::pets::set_photo(&client, &config, &pet_id, &photo, verbose).await
        }
        Commands::Update { pet_id, fields } => {
            commands::pets::update(&client, &config, &pet_id, &fields, verbose).await
        }
        Commands::Delete { pet_id } => {
            commands::pets::delete(&client, &config, &pet_id, verbose).await
        }
    }
}

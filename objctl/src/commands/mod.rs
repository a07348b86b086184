//! Command dispatch

use anyhow::Context as _;

use crate::cli::Commands;
use crate::errors::CliError;
use crate::filesys::file::File;
use crate::http::client::HttpClient;
use crate::output::{render, OutputFormat};
use crate::storage::settings::{Context, Settings};

pub mod config;
pub mod objstore;
pub mod solution;

use objstore::ObjstoreCommand;
use solution::SolutionCommand;

fn connect<'a>(
    settings: &'a Settings,
    context_name: Option<&str>,
) -> Result<(&'a Context, HttpClient), CliError> {
    let context = settings.select_context(context_name)?;
    let client = HttpClient::for_context(context)?;
    Ok((context, client))
}

/// Run one command to completion
pub async fn dispatch(
    command: &Commands,
    settings: Settings,
    config_file: &File,
    context_name: Option<&str>,
) -> anyhow::Result<()> {
    match command {
        Commands::Config(command) => {
            if let Some(row) = config::run(command, settings, config_file, context_name).await? {
                println!("{}", render(&row, OutputFormat::Detail)?);
            }
        }
        Commands::Objstore(ObjstoreCommand::Create(args)) => {
            let (context, client) = connect(&settings, context_name)?;
            objstore::create::run(&client, context, args)
                .await
                .context("objstore command failed")?;
        }
        Commands::Objstore(ObjstoreCommand::CreatePatch(args)) => {
            let (context, client) = connect(&settings, context_name)?;
            objstore::create_patch::run(&client, context, args)
                .await
                .context("Creating a patched object command failed")?;
        }
        Commands::Solution(SolutionCommand::Status(args)) => {
            let (context, client) = connect(&settings, context_name)?;
            let row = solution::status::run(&client, context, args)
                .await
                .context("Issue fetching install/upload status")?;
            println!("{}", render(&row, args.output)?);
        }
    }

    Ok(())
}

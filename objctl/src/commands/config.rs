//! `config` commands

use clap::{Args, Subcommand};
use tracing::info;

use crate::errors::CliError;
use crate::filesys::file::File;
use crate::output::ReportRow;
use crate::storage::settings::{Context, Settings};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the active context
    Show,

    /// Create or replace a context and make it current
    SetContext(SetContextArgs),

    /// Switch the current context
    UseContext {
        /// Context name
        name: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SetContextArgs {
    /// Context name
    #[arg(long)]
    pub name: String,

    /// Base URL of the service
    #[arg(long)]
    pub url: String,

    /// Tenant identifier
    #[arg(long)]
    pub tenant: String,

    /// Pre-issued bearer token
    #[arg(long)]
    pub token: Option<String>,
}

/// Describe a context, never revealing its token
pub fn describe_context(context: &Context, current: bool) -> ReportRow {
    let mut row = ReportRow::new();
    row.push("Name", context.name.as_str());
    row.push("URL", context.url.as_str());
    row.push("Tenant", context.tenant.as_str());
    row.push("Token", if context.token.is_some() { "set" } else { "none" });
    row.push("Current", current.to_string());
    row
}

/// Run a config command. Returns the row to print, if any.
pub async fn run(
    command: &ConfigCommand,
    mut settings: Settings,
    file: &File,
    context_name: Option<&str>,
) -> Result<Option<ReportRow>, CliError> {
    match command {
        ConfigCommand::Show => {
            let context = settings.select_context(context_name)?;
            let current = settings.current_context.as_deref() == Some(context.name.as_str());
            Ok(Some(describe_context(context, current)))
        }
        ConfigCommand::SetContext(args) => {
            if args.name.trim().is_empty() {
                return Err(CliError::ValidationError(
                    "--name must not be empty".to_string(),
                ));
            }
            settings.upsert_context(Context {
                name: args.name.clone(),
                url: args.url.clone(),
                tenant: args.tenant.clone(),
                token: args.token.clone(),
            });
            settings.save(file).await?;
            info!(
                "Context {} saved to {}",
                args.name,
                file.path().display()
            );
            Ok(None)
        }
        ConfigCommand::UseContext { name } => {
            settings.use_context(name)?;
            settings.save(file).await?;
            info!("Switched to context {}", name);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_context(name: &str, tenant: &str) -> ConfigCommand {
        ConfigCommand::SetContext(SetContextArgs {
            name: name.to_string(),
            url: "https://example.com".to_string(),
            tenant: tenant.to_string(),
            token: Some("secret-token".to_string()),
        })
    }

    #[tokio::test]
    async fn test_set_use_and_show() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("config.json"));

        run(&set_context("prod", "acme"), Settings::load(&file).await.unwrap(), &file, None)
            .await
            .unwrap();
        run(&set_context("dev", "acme-dev"), Settings::load(&file).await.unwrap(), &file, None)
            .await
            .unwrap();

        let settings = Settings::load(&file).await.unwrap();
        assert_eq!(settings.contexts.len(), 2);
        assert_eq!(settings.current_context.as_deref(), Some("dev"));

        let use_prod = ConfigCommand::UseContext {
            name: "prod".to_string(),
        };
        run(&use_prod, settings, &file, None).await.unwrap();

        let row = run(&ConfigCommand::Show, Settings::load(&file).await.unwrap(), &file, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.value("Tenant"), Some("acme"));
        assert_eq!(row.value("Token"), Some("set"));
        assert_eq!(row.value("Current"), Some("true"));
        assert!(row.fields().iter().all(|(_, v)| v != "secret-token"));
    }

    #[tokio::test]
    async fn test_use_unknown_context_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("config.json"));

        let command = ConfigCommand::UseContext {
            name: "nope".to_string(),
        };
        let result = run(&command, Settings::default(), &file, None).await;
        assert!(matches!(result, Err(CliError::ContextNotFound(_))));
        assert!(!file.exists().await);
    }
}

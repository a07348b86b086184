//! Settings file management
//!
//! The settings file holds named contexts. A context names the service
//! endpoint and the tenant every layered write and status query is scoped to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CliError;
use crate::filesys::file::File;
use crate::logs::LogLevel;

/// objctl settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Name of the context used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,

    /// Known contexts
    #[serde(default)]
    pub contexts: Vec<Context>,
}

/// A service endpoint together with the tenant it belongs to
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Context name
    pub name: String,

    /// Base URL of the service
    #[serde(default)]
    pub url: String,

    /// Tenant identifier
    #[serde(default)]
    pub tenant: String,

    /// Pre-issued bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("tenant", &self.tenant)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl Settings {
    /// Load settings, treating a missing file as empty settings
    pub async fn load(file: &File) -> Result<Self, CliError> {
        if !file.exists().await {
            return Ok(Self::default());
        }
        file.read_json().await.map_err(|e| {
            CliError::ConfigError(format!(
                "unable to read {}: {}",
                file.path().display(),
                e
            ))
        })
    }

    /// Persist settings, readable by the owner only since contexts may hold tokens
    pub async fn save(&self, file: &File) -> Result<(), CliError> {
        file.write_json(self).await?;
        file.set_permissions_600().await
    }

    /// Select the context to operate in.
    ///
    /// Explicit name, then `current_context`, then the only context when
    /// exactly one is configured.
    pub fn select_context(&self, name: Option<&str>) -> Result<&Context, CliError> {
        if let Some(name) = name.or(self.current_context.as_deref()) {
            return self
                .contexts
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| CliError::ContextNotFound(name.to_string()));
        }

        match self.contexts.as_slice() {
            [only] => Ok(only),
            [] => Err(CliError::ContextNotFound(
                "no contexts configured; run `objctl config set-context`".to_string(),
            )),
            _ => Err(CliError::ContextNotFound(
                "several contexts configured and none selected; use --context or `objctl config use-context`"
                    .to_string(),
            )),
        }
    }

    /// Insert or replace a context by name and make it current
    pub fn upsert_context(&mut self, context: Context) {
        let name = context.name.clone();
        match self.contexts.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = context,
            None => self.contexts.push(context),
        }
        self.current_context = Some(name);
    }

    /// Make an existing context current
    pub fn use_context(&mut self, name: &str) -> Result<(), CliError> {
        if !self.contexts.iter().any(|c| c.name == name) {
            return Err(CliError::ContextNotFound(name.to_string()));
        }
        self.current_context = Some(name.to_string());
        Ok(())
    }
}

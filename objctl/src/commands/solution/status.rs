//! `solution status`
//!
//! Upload and install state of a solution live in two separate object
//! types. Both are queried with the same filter and the most recent record
//! of each is merged into one report row.

use std::convert::Infallible;
use std::str::FromStr;

use clap::Args;
use objstore_models::StatusItem;
use tracing::debug;

use crate::errors::CliError;
use crate::http::client::HttpClientExt;
use crate::http::objects::{query_first, ObjectQuery, SOLUTION_INSTALL_TYPE, SOLUTION_RELEASE_TYPE};
use crate::layers::{resolve, LayerType};
use crate::output::{OutputFormat, ReportRow};
use crate::storage::settings::Context;

pub const HEADER_NAME: &str = "Solution Name";
pub const HEADER_UPLOAD_VERSION: &str = "Solution Upload Version";
pub const HEADER_UPLOAD_TIMESTAMP: &str = "Upload Timestamp";
pub const HEADER_INSTALL_VERSION: &str = "Solution Install Version";
pub const HEADER_INSTALL_SUCCESSFUL: &str = "Solution Install Successful?";
pub const HEADER_INSTALL_TIME: &str = "Solution Install Time";
pub const HEADER_INSTALL_MESSAGE: &str = "Solution Install Message";

/// Which side of the status to report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusType {
    Upload,
    Install,
    /// Both sides. Any unrecognised value means this.
    #[default]
    All,
}

impl FromStr for StatusType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "upload" => StatusType::Upload,
            "install" => StatusType::Install,
            _ => StatusType::All,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// The name of the solution
    #[arg(long)]
    pub name: String,

    /// Restrict to one version of the solution
    #[arg(long)]
    pub solution_version: Option<String>,

    /// The status to show: upload, install or all
    #[arg(long, default_value = "all")]
    pub status_type: StatusType,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Most recent upload and install records of a solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionStatus {
    pub upload: StatusItem,
    pub install: StatusItem,
}

/// Filter expression selecting a solution, optionally pinned to a version
pub fn status_filter(name: &str, version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!(
            r#"data.solutionName eq "{}" and data.solutionVersion eq "{}""#,
            name, version
        ),
        None => format!(r#"data.solutionName eq "{}""#, name),
    }
}

/// Fetch the latest upload and install records, scoped to the context's tenant.
///
/// A missing record is its zero value; any transport failure is an error.
pub async fn fetch_status<C: HttpClientExt + ?Sized>(
    client: &C,
    context: &Context,
    name: &str,
    version: Option<&str>,
) -> Result<SolutionStatus, CliError> {
    if context.tenant.is_empty() {
        return Err(CliError::ConfigError(format!(
            "context {} has no tenant",
            context.name
        )));
    }

    let layer = resolve(&LayerType::Tenant, SOLUTION_RELEASE_TYPE, context, None)?;
    let query = ObjectQuery::latest(status_filter(name, version));
    debug!("Querying solution status with filter {}", query.filter);

    let upload = query_first(client, SOLUTION_RELEASE_TYPE, &query, layer.headers()?)
        .await?
        .unwrap_or_default();
    let install = query_first(client, SOLUTION_INSTALL_TYPE, &query, layer.headers()?)
        .await?
        .unwrap_or_default();

    Ok(SolutionStatus { upload, install })
}

/// Assemble the report row for the requested status type
pub fn build_row(status_type: StatusType, status: &SolutionStatus) -> ReportRow {
    let upload = &status.upload;
    let install = &status.install;

    let name = if upload.data.solution_name.is_empty() {
        &install.data.solution_name
    } else {
        &upload.data.solution_name
    };

    let mut row = ReportRow::new();
    row.push(HEADER_NAME, name.as_str());

    if status_type != StatusType::Install {
        row.push(HEADER_UPLOAD_VERSION, upload.data.solution_version.as_str());
        row.push(HEADER_UPLOAD_TIMESTAMP, upload.created_at.as_str());
    }
    if status_type != StatusType::Upload {
        row.push(HEADER_INSTALL_VERSION, install.data.solution_version.as_str());
        row.push(
            HEADER_INSTALL_SUCCESSFUL,
            install.data.successful_install.to_string(),
        );
        row.push(HEADER_INSTALL_TIME, install.data.install_time.as_str());
        row.push(HEADER_INSTALL_MESSAGE, install.data.install_message.as_str());
    }

    row
}

/// Query both status resources and build the report row
pub async fn run<C: HttpClientExt + ?Sized>(
    client: &C,
    context: &Context,
    args: &StatusArgs,
) -> Result<ReportRow, CliError> {
    let status = fetch_status(
        client,
        context,
        &args.name,
        args.solution_version.as_deref(),
    )
    .await?;
    Ok(build_row(args.status_type, &status))
}

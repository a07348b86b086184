//! `objstore create`

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::commands::objstore::{load_object_file, require_non_empty};
use crate::errors::CliError;
use crate::http::client::HttpClientExt;
use crate::http::objects::create_object;
use crate::layers::{resolve, LayerType};
use crate::storage::settings::Context;

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// The fully qualified type name of the object
    #[arg(long = "type")]
    pub object_type: String,

    /// Path to the JSON file containing the object definition
    #[arg(long)]
    pub object_file: PathBuf,

    /// The layer type the created object will be added to
    #[arg(long)]
    pub layer_type: LayerType,

    /// The layer id the created object will be added to.
    /// Derived automatically for TENANT and SOLUTION layers.
    #[arg(long)]
    pub layer_id: Option<String>,
}

/// Create a new object at a layer
pub async fn run<C: HttpClientExt + ?Sized>(
    client: &C,
    context: &Context,
    args: &CreateArgs,
) -> Result<(), CliError> {
    require_non_empty("type", &args.object_type)?;

    let object = load_object_file(&args.object_file).await?;
    let layer = resolve(
        &args.layer_type,
        &args.object_type,
        context,
        args.layer_id.as_deref(),
    )?;
    debug!(
        "Creating {} object at layer {}/{}",
        args.object_type, layer.layer_type, layer.layer_id
    );

    create_object(client, &args.object_type, layer.headers()?, &object).await?;
    info!("Successfully created {} object", args.object_type);
    Ok(())
}

//! `objstore create-patch`

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::commands::objstore::{load_object_file, require_non_empty};
use crate::errors::CliError;
use crate::http::client::HttpClientExt;
use crate::http::objects::patch_object;
use crate::layers::{resolve, LayerType};
use crate::storage::settings::Context;

#[derive(Debug, Clone, Args)]
pub struct CreatePatchArgs {
    /// The fully qualified type name of the object
    #[arg(long = "type")]
    pub object_type: String,

    /// The id of the parent object to patch at a lower layer
    #[arg(long)]
    pub parent_object_id: String,

    /// Path to the JSON file containing the object definition
    #[arg(long)]
    pub object_file: PathBuf,

    /// The layer type at which the patch object is created.
    /// Must be a lower layer than the parent object's layer.
    #[arg(long)]
    pub target_layer_type: LayerType,

    /// Explicit layer id for layer types that cannot be derived
    #[arg(long)]
    pub layer_id: Option<String>,
}

/// Create a patch object overriding a parent object.
///
/// The server decides whether the target layer sits below the parent's.
pub async fn run<C: HttpClientExt + ?Sized>(
    client: &C,
    context: &Context,
    args: &CreatePatchArgs,
) -> Result<(), CliError> {
    require_non_empty("type", &args.object_type)?;
    require_non_empty("parent-object-id", &args.parent_object_id)?;

    let object = load_object_file(&args.object_file).await?;
    let layer = resolve(
        &args.target_layer_type,
        &args.object_type,
        context,
        args.layer_id.as_deref(),
    )?;
    debug!(
        "Patching {} object {} at layer {}/{}",
        args.object_type, args.parent_object_id, layer.layer_type, layer.layer_id
    );

    patch_object(
        client,
        &args.object_type,
        &args.parent_object_id,
        layer.headers()?,
        &object,
    )
    .await?;
    info!(
        "Successfully created patched {} object at the {} layer",
        args.object_type, layer.layer_type
    );
    Ok(())
}

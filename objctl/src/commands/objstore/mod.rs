//! Object store commands

use std::path::Path;

use clap::Subcommand;
use objstore_models::ObjectDefinition;

use crate::errors::CliError;
use crate::filesys::file::File;

pub mod create;
pub mod create_patch;

#[derive(Debug, Subcommand)]
pub enum ObjstoreCommand {
    /// Create a new object of a given type
    Create(create::CreateArgs),

    /// Create a new patched object of a given type.
    ///
    /// A patched object inherits values from an object that exists at a
    /// higher layer and overrides mutable fields where needed.
    CreatePatch(create_patch::CreatePatchArgs),
}

/// Load an object definition file. The content must be a JSON object.
pub async fn load_object_file(path: &Path) -> Result<ObjectDefinition, CliError> {
    let contents = File::new(path).read_string().await.map_err(|e| {
        CliError::ObjectFileError(format!(
            "Can't find the object definition file named {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        CliError::ObjectFileError(format!(
            "Can't generate an object from the {} file ({}). Make sure the file holds a valid JSON object",
            path.display(),
            e
        ))
    })
}

pub(crate) fn require_non_empty(flag: &str, value: &str) -> Result<(), CliError> {
    if value.trim().is_empty() {
        return Err(CliError::ValidationError(format!("--{} must not be empty", flag)));
    }
    Ok(())
}

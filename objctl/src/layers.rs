//! Layer types and layer-id resolution
//!
//! Every object write is scoped to a layer, sent as a `layer-type` and
//! `layer-id` header pair. Some layer types carry an id that follows from
//! the active context or the object type; the rest need an explicit id.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::errors::CliError;
use crate::storage::settings::Context;

pub const LAYER_TYPE_HEADER: HeaderName = HeaderName::from_static("layer-type");
pub const LAYER_ID_HEADER: HeaderName = HeaderName::from_static("layer-id");

/// Layer at which an object variant is stored
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tenant,
    Solution,
    Account,
    GlobalUser,
    LocalUser,
    /// Any layer type this client has no special knowledge of, kept verbatim
    Custom(String),
}

/// Where the id for a layer type comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerIdSource {
    /// The tenant of the active context
    Tenant,
    /// The namespace prefix of the object type (`ns:name` -> `ns`)
    TypeNamespace,
    /// Only an explicitly supplied id
    Explicit,
}

impl LayerType {
    pub fn as_str(&self) -> &str {
        match self {
            LayerType::Tenant => "TENANT",
            LayerType::Solution => "SOLUTION",
            LayerType::Account => "ACCOUNT",
            LayerType::GlobalUser => "GLOBALUSER",
            LayerType::LocalUser => "LOCALUSER",
            LayerType::Custom(name) => name,
        }
    }

    pub fn id_source(&self) -> LayerIdSource {
        match self {
            LayerType::Tenant => LayerIdSource::Tenant,
            LayerType::Solution => LayerIdSource::TypeNamespace,
            _ => LayerIdSource::Explicit,
        }
    }
}

impl FromStr for LayerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "TENANT" => LayerType::Tenant,
            "SOLUTION" => LayerType::Solution,
            "ACCOUNT" => LayerType::Account,
            "GLOBALUSER" => LayerType::GlobalUser,
            "LOCALUSER" => LayerType::LocalUser,
            _ => LayerType::Custom(s.to_string()),
        })
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved layer: type plus non-empty id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerReference {
    pub layer_type: LayerType,
    pub layer_id: String,
}

impl LayerReference {
    /// Request headers scoping a call to this layer
    pub fn headers(&self) -> Result<HeaderMap, CliError> {
        let mut headers = HeaderMap::new();
        headers.insert(LAYER_TYPE_HEADER, HeaderValue::from_str(self.layer_type.as_str())?);
        headers.insert(LAYER_ID_HEADER, HeaderValue::from_str(&self.layer_id)?);
        Ok(headers)
    }
}

/// Derive the layer id from the context or object type, if the layer type allows it
pub fn derive_layer_id(layer_type: &LayerType, object_type: &str, context: &Context) -> Option<String> {
    let derived = match layer_type.id_source() {
        LayerIdSource::Tenant => context.tenant.as_str(),
        LayerIdSource::TypeNamespace => object_type.split(':').next().unwrap_or_default(),
        LayerIdSource::Explicit => return None,
    };

    (!derived.is_empty()).then(|| derived.to_string())
}

/// Resolve the layer a write targets.
///
/// A derivable id always wins over a supplied one. Without either, the write
/// must not be sent.
pub fn resolve(
    layer_type: &LayerType,
    object_type: &str,
    context: &Context,
    supplied: Option<&str>,
) -> Result<LayerReference, CliError> {
    let layer_id = derive_layer_id(layer_type, object_type, context)
        .or_else(|| supplied.filter(|id| !id.is_empty()).map(str::to_string))
        .ok_or_else(|| CliError::LayerError(layer_type.to_string()))?;

    Ok(LayerReference {
        layer_type: layer_type.clone(),
        layer_id,
    })
}

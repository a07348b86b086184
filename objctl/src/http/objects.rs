//! Object store API

use http::{HeaderMap, Method};
use objstore_models::{ObjectDefinition, ObjectList};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::errors::CliError;
use crate::http::client::{ApiRequest, HttpClientExt};

/// Root of the object store object resources
pub const OBJECTS_PATH: &str = "objstore/v1beta/objects";

/// Solution upload records
pub const SOLUTION_RELEASE_TYPE: &str = "extensibility:solutionRelease";

/// Solution install records
pub const SOLUTION_INSTALL_TYPE: &str = "extensibility:solutionInstall";

/// Newest-first ordering
pub const ORDER_DESC: &str = "desc";

/// Reject path segments that would change the request target
fn check_segment(name: &str, segment: &str) -> Result<(), CliError> {
    if segment.is_empty() || segment.contains(['/', '?', '#']) {
        return Err(CliError::ValidationError(format!(
            "{} {:?} must be non-empty and must not contain '/', '?' or '#'",
            name, segment
        )));
    }
    Ok(())
}

/// Path of an object type collection
pub fn objects_path(object_type: &str) -> Result<String, CliError> {
    check_segment("object type", object_type)?;
    Ok(format!("{}/{}", OBJECTS_PATH, object_type))
}

/// Path of a single object
pub fn object_path(object_type: &str, object_id: &str) -> Result<String, CliError> {
    check_segment("object id", object_id)?;
    Ok(format!("{}/{}", objects_path(object_type)?, object_id))
}

/// Filtered, ordered, bounded object query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    pub order: &'static str,
    pub filter: String,
    pub max: u32,
}

impl ObjectQuery {
    /// Most recent single object matching `filter`
    pub fn latest(filter: impl Into<String>) -> Self {
        Self {
            order: ORDER_DESC,
            filter: filter.into(),
            max: 1,
        }
    }

    /// Render as a URL query string, including the leading `?`
    pub fn to_query_string(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("order", self.order)
            .append_pair("filter", &self.filter)
            .append_pair("max", &self.max.to_string())
            .finish();
        format!("?{}", query)
    }
}

/// Create a new object of the given type
pub async fn create_object<C: HttpClientExt + ?Sized>(
    client: &C,
    object_type: &str,
    headers: HeaderMap,
    object: &ObjectDefinition,
) -> Result<(), CliError> {
    let request = ApiRequest::new(Method::POST, objects_path(object_type)?, headers)
        .with_body(serde_json::Value::Object(object.clone()));
    client.send(request).await?;
    Ok(())
}

/// Create a patch object overriding `parent_id` at the layer named in `headers`
pub async fn patch_object<C: HttpClientExt + ?Sized>(
    client: &C,
    object_type: &str,
    parent_id: &str,
    headers: HeaderMap,
    object: &ObjectDefinition,
) -> Result<(), CliError> {
    let request = ApiRequest::new(Method::PATCH, object_path(object_type, parent_id)?, headers)
        .with_body(serde_json::Value::Object(object.clone()));
    client.send(request).await?;
    Ok(())
}

/// Run a query and return the first matching object, if any
pub async fn query_first<C, T>(
    client: &C,
    object_type: &str,
    query: &ObjectQuery,
    headers: HeaderMap,
) -> Result<Option<T>, CliError>
where
    C: HttpClientExt + ?Sized,
    T: DeserializeOwned,
{
    let path = format!("{}{}", objects_path(object_type)?, query.to_query_string());
    let body = client.send(ApiRequest::new(Method::GET, path, headers)).await?;

    if body.trim().is_empty() {
        return Ok(None);
    }

    let list: ObjectList<T> = serde_json::from_str(&body)?;
    Ok(list.into_first())
}

//! Object store wire models
//!
//! Request and response shapes shared by the object store resources. Every
//! field is defaulted so that sparse records decode to their zero values.

use serde::{Deserialize, Serialize};

/// Arbitrary object body, forwarded to the store without inspection
pub type ObjectDefinition = serde_json::Map<String, serde_json::Value>;

/// List envelope returned by object queries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ObjectList<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for ObjectList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ObjectList<T> {
    /// Take the first item, if any
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

/// Payload of a solution release or solution install record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
    #[serde(default)]
    pub install_time: String,

    #[serde(default)]
    pub install_message: String,

    #[serde(default, rename = "isSuccessful")]
    pub successful_install: bool,

    #[serde(default)]
    pub solution_name: String,

    #[serde(default)]
    pub solution_version: String,
}

/// One status record as stored in the object store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusItem {
    #[serde(default)]
    pub data: StatusData,

    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_list_decodes_sparse_items() {
        let raw = r#"{
            "items": [
                {
                    "data": {"solutionName": "mySolution", "isSuccessful": true},
                    "createdAt": "2023-01-02T03:04:05Z"
                }
            ]
        }"#;

        let list: ObjectList<StatusItem> = serde_json::from_str(raw).unwrap();
        let item = list.into_first().unwrap();
        assert_eq!(item.data.solution_name, "mySolution");
        assert!(item.data.successful_install);
        assert_eq!(item.data.solution_version, "");
        assert_eq!(item.created_at, "2023-01-02T03:04:05Z");
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn first_of<T: serde::de::DeserializeOwned>(raw: &str) -> Option<T> {
        serde_json::from_str::<ObjectList<T>>(raw).unwrap().into_first()
    }

    #[test]
    fn test_list_of_items_without_default() {
        let item: Named = first_of(r#"{"items": [{"name": "a"}, {"name": "b"}]}"#).unwrap();
        assert_eq!(item.name, "a");
        assert!(first_of::<Named>("{}").is_none());
    }

    #[test]
    fn test_missing_items_is_empty_list() {
        let list: ObjectList<StatusItem> = serde_json::from_str("{}").unwrap();
        assert!(list.into_first().is_none());
    }
}

//! Generic SCIM resource representation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic SCIM resource representation.
///
/// A resource is a structured data object with a type identifier and JSON
/// data. Handlers exchange resources in this type-erased form so that the
/// registry can hold heterogeneous handlers behind one trait object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// The type of this resource (e.g., "User", "Schema")
    pub resource_type: String,
    /// The resource data as JSON
    pub data: Value,
}

impl Resource {
    /// Create a new resource with the given type and data.
    pub fn new(resource_type: impl Into<String>, data: Value) -> Self {
        Self {
            resource_type: resource_type.into(),
            data,
        }
    }

    /// Get the unique identifier of this resource.
    ///
    /// Returns the "id" field from the resource data if present.
    pub fn get_id(&self) -> Option<&str> {
        self.data.get("id")?.as_str()
    }

    /// Get a named attribute from the resource data.
    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_id_access() {
        let resource = Resource::new(
            "Schema",
            json!({"id": "urn:ietf:params:scim:schemas:core:2.0:User", "name": "User"}),
        );
        assert_eq!(
            resource.get_id(),
            Some("urn:ietf:params:scim:schemas:core:2.0:User")
        );
        assert_eq!(resource.get_attribute("name"), Some(&json!("User")));
        assert_eq!(resource.get_attribute("missing"), None);
    }
}

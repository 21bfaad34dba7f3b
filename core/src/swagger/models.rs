#![deny(missing_docs)]

//! # Swagger 1.2 Models
//!
//! Output structures, serialized with the field names of the Swagger 1.2
//! resource listing and API declaration schemas.
//!
//! Optional values that are absent are left out of the serialized form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Version written into every generated document.
pub const SWAGGER_VERSION: &str = "1.2";

/// Settings shared by every document generated in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationOptions {
    /// Version of the described API.
    pub api_version: Option<String>,
    /// Base URL the API paths are relative to.
    pub base_path: String,
}

impl Default for DeclarationOptions {
    fn default() -> Self {
        Self {
            api_version: None,
            base_path: "/".to_string(),
        }
    }
}

/// An API declaration: every operation of one resource, grouped by path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeclaration {
    /// Version of the described API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Always `1.2`.
    pub swagger_version: String,
    /// Base URL the API paths are relative to.
    #[serde(default)]
    pub base_path: String,
    /// Path of this resource within the resource listing.
    #[serde(default)]
    pub resource_path: String,
    /// APIs in first-seen path order. Paths are unique.
    #[serde(default)]
    pub apis: Vec<Api>,
}

impl Default for ApiDeclaration {
    fn default() -> Self {
        Self {
            api_version: None,
            swagger_version: SWAGGER_VERSION.to_string(),
            base_path: String::new(),
            resource_path: String::new(),
            apis: Vec::new(),
        }
    }
}

impl ApiDeclaration {
    /// An empty declaration for the resource at `resource_path`.
    pub fn new(resource_path: impl Into<String>, options: &DeclarationOptions) -> Self {
        Self {
            api_version: options.api_version.clone(),
            base_path: options.base_path.clone(),
            resource_path: resource_path.into(),
            ..Self::default()
        }
    }

    /// Finds the API registered for `path`.
    pub fn api(&self, path: &str) -> Option<&Api> {
        self.apis.iter().find(|api| api.path == path)
    }
}

/// All operations available on one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Path with brace-style parameters, e.g. `/widgets/{id}`.
    pub path: String,
    /// Operations in the order they were added.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// A single HTTP operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// HTTP method, upper case.
    pub method: String,
    /// Unique operation id, safe to use as an element id.
    pub nickname: String,
    /// Swagger type of the result.
    #[serde(rename = "type")]
    pub ty: String,
    /// Element descriptor when the result is an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    /// Accepted parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Always empty.
    #[serde(default)]
    pub response_messages: Vec<Value>,
    /// Short description of the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Always empty.
    #[serde(default)]
    pub notes: String,
}

/// Location a parameter is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    /// `path`
    Path,
    /// `query`
    Query,
    /// `form`
    Form,
    /// `body`
    Body,
    /// `header`
    Header,
    /// Any other transport specific source, kept verbatim.
    Other(String),
}

impl ParamType {
    /// The serialized name.
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::Path => "path",
            ParamType::Query => "query",
            ParamType::Form => "form",
            ParamType::Body => "body",
            ParamType::Header => "header",
            ParamType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ParamType {
    fn from(s: &str) -> Self {
        match s {
            "path" => ParamType::Path,
            "query" => ParamType::Query,
            "form" => ParamType::Form,
            "body" => ParamType::Body,
            "header" => ParamType::Header,
            other => ParamType::Other(other.to_string()),
        }
    }
}

impl From<String> for ParamType {
    fn from(s: String) -> Self {
        ParamType::from(s.as_str())
    }
}

impl From<ParamType> for String {
    fn from(p: ParamType) -> Self {
        p.as_str().to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Element type of an array parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items {
    /// Swagger type of each element.
    #[serde(rename = "type")]
    pub ty: String,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Where the value is read from.
    pub param_type: ParamType,
    /// Parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description, passed through as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Swagger type.
    #[serde(rename = "type")]
    pub ty: String,
    /// Element type when `ty` is `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// Whether the caller must supply the value.
    #[serde(default)]
    pub required: bool,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Lower bound, as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Value>,
    /// Upper bound, as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Value>,
    /// Always false.
    #[serde(default)]
    pub allow_multiple: bool,
}

/// Top-level document listing every resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListing {
    /// Version of the described API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Always `1.2`.
    pub swagger_version: String,
    /// One entry per resource.
    #[serde(default)]
    pub apis: Vec<ResourceRef>,
}

impl ResourceListing {
    /// An empty listing.
    pub fn new(options: &DeclarationOptions) -> Self {
        Self {
            api_version: options.api_version.clone(),
            swagger_version: SWAGGER_VERSION.to_string(),
            apis: Vec::new(),
        }
    }
}

/// Pointer from the resource listing to one API declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Resource path, e.g. `/Widget`.
    pub path: String,
    /// Short description of the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_param_type_names() {
        for name in ["path", "query", "form", "body", "header", "cookie"] {
            assert_eq!(ParamType::from(name).as_str(), name);
        }
        assert_eq!(ParamType::from("cookie"), ParamType::Other("cookie".into()));
    }

    #[test]
    fn test_parameter_serializes_camel_case() {
        let param = Parameter {
            param_type: ParamType::Path,
            name: Some("id".into()),
            description: None,
            ty: "string".into(),
            items: None,
            required: true,
            default_value: None,
            minimum: Some(json!("1")),
            maximum: None,
            allow_multiple: false,
        };

        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({
                "paramType": "path",
                "name": "id",
                "type": "string",
                "required": true,
                "minimum": "1",
                "allowMultiple": false
            })
        );
    }

    #[test]
    fn test_declaration_defaults() {
        let options = DeclarationOptions {
            api_version: Some("2.0.0".into()),
            base_path: "/api".into(),
        };
        let doc = ApiDeclaration::new("/Widget", &options);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "apiVersion": "2.0.0",
                "swaggerVersion": "1.2",
                "basePath": "/api",
                "resourcePath": "/Widget",
                "apis": []
            })
        );
    }
}

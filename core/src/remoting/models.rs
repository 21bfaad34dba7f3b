#![deny(missing_docs)]

//! # Remoting Models
//!
//! Deserialization layer for the routes exposed by the remoting layer.
//!
//! Every field is optional on the wire. Missing values fall back to empty
//! strings or lists, so a sparse route still converts instead of being
//! rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ldl::is_truthy;

/// One remote-callable endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Express-style path, e.g. `/widgets/:id`.
    pub path: String,
    /// HTTP verb, or the remoting aliases `all` and `del`.
    pub verb: String,
    /// Dotted method name, e.g. `Widget.prototype.find`.
    pub method: String,
    /// Arguments accepted by the method, in declaration order.
    pub accepts: Vec<ParamSpec>,
    /// Values returned by the method, in declaration order.
    pub returns: Vec<ReturnSpec>,
    /// Human readable description, used as the operation summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Type of an argument or return value.
///
/// The list form names the element type of an array in its first entry,
/// e.g. `["string"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// A named primitive or model type.
    Name(String),
    /// An array type.
    List(Vec<TypeSpec>),
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

/// Where the transport reads an argument from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HttpSpec {
    /// Explicit mapping, e.g. `{ "source": "path" }`.
    Mapping(HttpMapping),
    /// The argument is computed from the request at call time.
    ///
    /// Any non-object `http` value lands here; in a serialized listing it is
    /// typically the name of the function doing the derivation.
    Derived(Value),
}

/// Body of [`HttpSpec::Mapping`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpMapping {
    /// Request location: `path`, `query`, `form`, `body`, `header`, `req`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl HttpSpec {
    /// The mapped source, if it is set and non-empty.
    pub fn source(&self) -> Option<&str> {
        match self {
            HttpSpec::Mapping(HttpMapping { source: Some(s) }) if !s.is_empty() => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    /// True when the argument is derived rather than supplied by the caller.
    pub fn is_derived(&self) -> bool {
        matches!(self, HttpSpec::Derived(_))
    }
}

/// An argument accepted by a remote method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Argument name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Legacy spelling of the argument name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Primitive type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeSpec>,
    /// Complex type name; wins over `ty` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Whether the caller must supply the argument (JavaScript truthiness).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,
    /// Transport mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpSpec>,
    /// Remaining keys (`doc`, `default`, `min`, `max`, `description`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ParamSpec {
    /// `name`, falling back to `arg` when `name` is missing or empty.
    pub fn resolved_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or(self.arg.as_deref())
    }

    /// The model name, if set and non-empty.
    pub fn model_name(&self) -> Option<&str> {
        non_empty(self.model.as_deref())
    }

    /// Truthiness of `required`.
    pub fn is_required(&self) -> bool {
        self.required.as_ref().is_some_and(is_truthy)
    }

    /// Looks up one of the loose keys.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A value returned by a remote method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSpec {
    /// Name of the returned value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Primitive type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeSpec>,
    /// Complex type name; wins over `ty` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Element descriptor for array returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    /// Remaining keys.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ReturnSpec {
    /// The model name, if set and non-empty.
    pub fn model_name(&self) -> Option<&str> {
        non_empty(self.model.as_deref())
    }
}

/// Parameters every instance method inherits from the constructor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedCtor {
    /// Constructor arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts: Option<Vec<ParamSpec>>,
}

/// The class owning a set of routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Class (model) name.
    #[serde(default)]
    pub name: String,
    /// Shared constructor, if the class has one.
    #[serde(
        default,
        rename = "sharedCtor",
        skip_serializing_if = "Option::is_none"
    )]
    pub shared_ctor: Option<SharedCtor>,
}

impl ClassDef {
    /// A class without a shared constructor.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shared_ctor: None,
        }
    }

    /// Constructor arguments, when declared.
    pub fn shared_accepts(&self) -> Option<&[ParamSpec]> {
        self.shared_ctor.as_ref()?.accepts.as_deref()
    }
}

/// A class together with the routes it exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRoutes {
    /// The owning class.
    #[serde(flatten)]
    pub class: ClassDef,
    /// Routes in registration order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// The file format consumed by the CLI: every class with its routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteListing {
    /// Version of the described API.
    #[serde(
        default,
        rename = "apiVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_version: Option<String>,
    /// Base URL the routes are mounted under.
    #[serde(default, rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Classes in registration order.
    #[serde(default)]
    pub classes: Vec<ClassRoutes>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

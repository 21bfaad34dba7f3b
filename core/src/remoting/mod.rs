#![deny(missing_docs)]

//! # Remoting Module
//!
//! Input side of the converter: the routes, arguments and classes described
//! by the remoting layer, plus the listing file that bundles them.

pub mod models;

use crate::error::AppResult;

pub use models::{
    ClassDef, ClassRoutes, HttpMapping, HttpSpec, ParamSpec, ReturnSpec, Route, RouteListing,
    SharedCtor, TypeSpec,
};

/// Parses a route listing from JSON or YAML text.
///
/// YAML is a superset of JSON, so a single parser covers both formats.
pub fn parse_route_listing(content: &str) -> AppResult<RouteListing> {
    let listing: RouteListing = serde_yaml::from_str(content)?;
    tracing::debug!(classes = listing.classes.len(), "parsed route listing");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_parse_yaml_listing() {
        let yaml = r#"
apiVersion: "1.2.3"
classes:
  - name: Widget
    routes:
      - path: /widgets/:id
        verb: get
        method: Widget.findById
        accepts:
          - arg: id
            type: any
            required: true
"#;
        let listing = parse_route_listing(yaml).unwrap();
        assert_eq!(listing.api_version.as_deref(), Some("1.2.3"));
        assert_eq!(listing.base_path, None);
        assert_eq!(listing.classes[0].routes[0].accepts[0].resolved_name(), Some("id"));
    }

    #[test]
    fn test_parse_json_listing() {
        let json = r#"{ "basePath": "/api", "classes": [{ "name": "Widget", "routes": [] }] }"#;
        let listing = parse_route_listing(json).unwrap();
        assert_eq!(listing.base_path.as_deref(), Some("/api"));
        assert_eq!(listing.classes[0].class.name, "Widget");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_route_listing("classes: 42").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }
}

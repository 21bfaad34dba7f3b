#![deny(missing_docs)]

//! # Route Conversion
//!
//! Turns one remoting route into a Swagger API entry and merges it into an
//! API declaration, grouping operations by path.

use crate::remoting::{ClassDef, Route};
use crate::swagger::models::{Api, ApiDeclaration, Operation};
use crate::swagger::naming::{convert_path, convert_verb, to_nickname};
use crate::swagger::normalize::normalize_route;
use crate::swagger::params::accept_to_parameter;
use crate::swagger::types::map_data_type;

/// Converts a normalized route into an API holding a single operation.
pub fn route_to_api(route: &Route) -> Api {
    let returns = route.returns.first();
    let ty = match returns {
        Some(ret) => match ret.model_name() {
            Some(model) => model.to_string(),
            None => map_data_type(ret.ty.as_ref()),
        },
        None => "void".to_string(),
    };

    let operation = Operation {
        method: convert_verb(&route.verb),
        nickname: to_nickname(&route.method),
        ty,
        items: returns.and_then(|ret| ret.items.clone()),
        parameters: route
            .accepts
            .iter()
            .map(|accept| accept_to_parameter(route, accept))
            .collect(),
        response_messages: Vec::new(),
        summary: route.description.clone(),
        notes: String::new(),
    };

    Api {
        path: convert_path(&route.path),
        operations: vec![operation],
    }
}

/// Documents `route` of `class_def` in `doc`.
///
/// A route whose path is already present adds its operation to that API;
/// otherwise a new API is appended. Never fails: missing fields fall back to
/// empty values.
pub fn add_route_to_api_declaration(
    route: &Route,
    class_def: &ClassDef,
    doc: &mut ApiDeclaration,
) {
    let route = normalize_route(route, class_def);
    let api = route_to_api(&route);

    match doc.apis.iter_mut().find(|existing| existing.path == api.path) {
        Some(existing) => {
            tracing::debug!(
                path = %api.path,
                method = %route.method,
                "merging operation into existing api"
            );
            existing.operations.extend(api.operations);
        }
        None => {
            tracing::debug!(path = %api.path, method = %route.method, "adding api");
            doc.apis.push(api);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn route(value: Value) -> Route {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_route_without_returns_is_void() {
        let api = route_to_api(&route(json!({
            "path": "/widgets/:id",
            "verb": "del",
            "method": "Widget.deleteById"
        })));

        assert_eq!(api.path, "/widgets/{id}");
        let op = &api.operations[0];
        assert_eq!(op.method, "DELETE");
        assert_eq!(op.nickname, "Widget_deleteById");
        assert_eq!(op.ty, "void");
        assert_eq!(op.items, None);
        assert!(op.parameters.is_empty());
        assert!(op.response_messages.is_empty());
        assert!(op.notes.is_empty());
    }

    #[test]
    fn test_return_model_wins() {
        let api = route_to_api(&route(json!({
            "verb": "get",
            "returns": [{ "arg": "owner", "type": "object", "model": "User" }]
        })));
        assert_eq!(api.operations[0].ty, "User");
    }

    #[test]
    fn test_return_type_mapped() {
        let api = route_to_api(&route(json!({
            "verb": "get",
            "returns": [{ "arg": "count", "type": "number" }]
        })));
        assert_eq!(api.operations[0].ty, "double");
    }

    #[test]
    fn test_summary_from_description() {
        let api = route_to_api(&route(json!({ "verb": "get", "description": "Count widgets" })));
        assert_eq!(api.operations[0].summary.as_deref(), Some("Count widgets"));
    }

    #[test]
    fn test_add_route_merges_same_path() {
        let class = ClassDef::named("Widget");
        let mut doc = ApiDeclaration::default();

        add_route_to_api_declaration(
            &route(json!({ "path": "/widgets", "verb": "get", "method": "Widget.find" })),
            &class,
            &mut doc,
        );
        add_route_to_api_declaration(
            &route(json!({ "path": "/widgets", "verb": "post", "method": "Widget.create" })),
            &class,
            &mut doc,
        );
        add_route_to_api_declaration(
            &route(json!({ "path": "/widgets/count", "verb": "get", "method": "Widget.count" })),
            &class,
            &mut doc,
        );

        assert_eq!(doc.apis.len(), 2);
        let methods: Vec<_> = doc.apis[0].operations.iter().map(|op| op.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "POST"]);
        assert_eq!(doc.apis[1].path, "/widgets/count");
    }

    #[test]
    fn test_add_route_applies_return_fixup() {
        let class = ClassDef::named("Widget");
        let mut doc = ApiDeclaration::default();
        add_route_to_api_declaration(
            &route(json!({
                "path": "/widgets",
                "verb": "get",
                "method": "Widget.find",
                "returns": [{ "arg": "data", "type": "array" }]
            })),
            &class,
            &mut doc,
        );

        let op = &doc.apis[0].operations[0];
        assert_eq!(op.ty, "array");
        assert_eq!(op.items, Some(json!({ "$ref": "Widget" })));
    }
}

#![deny(missing_docs)]

//! # Parameter Mapping
//!
//! Converts a normalized route argument into a Swagger parameter.

use crate::remoting::{ParamSpec, Route};
use crate::swagger::models::{Items, ParamType, Parameter};
use crate::swagger::naming::{is_path_parameter, owner_name};
use crate::swagger::types::{map_data_type, map_element_type};

/// Location used when neither the path nor an explicit mapping decides:
/// `query` for GET routes, `form` otherwise.
pub fn default_param_type(route: &Route) -> ParamType {
    if route.verb.eq_ignore_ascii_case("get") {
        ParamType::Query
    } else {
        ParamType::Form
    }
}

/// Maps one argument of `route` to a Swagger parameter.
///
/// Location precedence, lowest to highest: the verb default, a `:<name>`
/// occurrence in the path, an explicit `http.source`.
pub fn accept_to_parameter(route: &Route, accept: &ParamSpec) -> Parameter {
    let name = accept.resolved_name();

    let mut param_type = default_param_type(route);
    if name.is_some_and(|name| is_path_parameter(&route.path, name)) {
        param_type = ParamType::Path;
    }
    if let Some(source) = accept.http.as_ref().and_then(|http| http.source()) {
        param_type = ParamType::from(source);
    }

    let mut ty = match accept.model_name() {
        Some(model) => model.to_string(),
        None => map_data_type(accept.ty.as_ref()),
    };
    // Generic `data` payloads are documented as the owning model.
    if name == Some("data") && ty == "object" {
        ty = owner_name(&route.method).to_string();
    }
    let items = (ty == "array").then(|| Items {
        ty: map_element_type(accept.ty.as_ref()),
    });

    Parameter {
        param_type,
        name: name.map(str::to_string),
        description: accept.field("description").cloned(),
        ty,
        items,
        required: accept.is_required(),
        default_value: accept.field("defaultValue").cloned(),
        minimum: accept.field("minimum").cloned(),
        maximum: accept.field("maximum").cloned(),
        allow_multiple: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn route(verb: &str, path: &str, method: &str) -> Route {
        Route {
            verb: verb.into(),
            path: path.into(),
            method: method.into(),
            ..Route::default()
        }
    }

    fn accept(value: Value) -> ParamSpec {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_param_type_by_verb() {
        let get = route("GET", "/widgets", "Widget.find");
        let post = route("post", "/widgets", "Widget.create");
        let p = accept(json!({ "arg": "filter", "type": "object" }));

        assert_eq!(accept_to_parameter(&get, &p).param_type, ParamType::Query);
        assert_eq!(accept_to_parameter(&post, &p).param_type, ParamType::Form);
    }

    #[test]
    fn test_path_parameter_detected() {
        let r = route("get", "/widgets/:id", "Widget.findById");
        let p = accept(json!({ "arg": "id", "type": "any", "required": true }));

        let param = accept_to_parameter(&r, &p);
        assert_eq!(param.param_type, ParamType::Path);
        assert_eq!(param.name.as_deref(), Some("id"));
        assert_eq!(param.ty, "any");
        assert!(param.required);
    }

    #[test]
    fn test_path_parameter_substring_false_positive() {
        let r = route("get", "/widgets/:idle", "Widget.idle");
        let p = accept(json!({ "arg": "id" }));
        assert_eq!(accept_to_parameter(&r, &p).param_type, ParamType::Path);
    }

    #[test]
    fn test_http_source_wins() {
        let r = route("get", "/widgets/:id", "Widget.findById");
        let p = accept(json!({ "arg": "id", "http": { "source": "header" } }));
        assert_eq!(accept_to_parameter(&r, &p).param_type, ParamType::Header);

        let custom = accept(json!({ "arg": "token", "http": { "source": "cookie" } }));
        assert_eq!(
            accept_to_parameter(&r, &custom).param_type,
            ParamType::Other("cookie".into())
        );
    }

    #[test]
    fn test_model_wins_over_type() {
        let r = route("post", "/widgets", "Widget.create");
        let p = accept(json!({ "arg": "owner", "type": "object", "model": "User" }));
        assert_eq!(accept_to_parameter(&r, &p).ty, "User");
    }

    #[test]
    fn test_data_object_becomes_owner() {
        let r = route("put", "/widgets/:id", "Widget.prototype.updateAttributes");
        let p = accept(json!({ "arg": "data", "type": "object" }));
        assert_eq!(accept_to_parameter(&r, &p).ty, "Widget");

        let other = accept(json!({ "arg": "filter", "type": "object" }));
        assert_eq!(accept_to_parameter(&r, &other).ty, "object");
    }

    #[test]
    fn test_array_parameter_items() {
        let r = route("get", "/widgets/ids", "Widget.byIds");
        let p = accept(json!({ "arg": "ids", "type": ["number"] }));

        let param = accept_to_parameter(&r, &p);
        assert_eq!(param.ty, "array");
        assert_eq!(param.items, Some(Items { ty: "double".into() }));
    }

    #[test]
    fn test_translated_fields_passed_through() {
        let r = route("get", "/widgets", "Widget.find");
        let p = accept(json!({
            "arg": "limit",
            "type": "number",
            "description": "Page size",
            "defaultValue": 25,
            "minimum": "1",
            "maximum": "100"
        }));

        let param = serde_json::to_value(accept_to_parameter(&r, &p)).unwrap();
        assert_eq!(
            param,
            json!({
                "paramType": "query",
                "name": "limit",
                "description": "Page size",
                "type": "double",
                "required": false,
                "defaultValue": 25,
                "minimum": "1",
                "maximum": "100",
                "allowMultiple": false
            })
        );
    }

    #[test]
    fn test_unnamed_parameter_never_in_path() {
        let r = route("get", "/widgets/:", "Widget.find");
        let p = accept(json!({ "type": "string" }));

        let param = accept_to_parameter(&r, &p);
        assert_eq!(param.name, None);
        assert_eq!(param.param_type, ParamType::Query);
    }
}

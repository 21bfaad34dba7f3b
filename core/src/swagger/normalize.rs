#![deny(missing_docs)]

//! # Route Normalization
//!
//! Rewrites a route into the shape the converter documents: constructor
//! arguments merged in, request-derived arguments dropped, generic `data`
//! returns pointed at the owning class, and LDL keys translated.
//!
//! The input route is never mutated; normalization works on a copy.

use serde_json::json;

use crate::ldl::translate_keys;
use crate::remoting::{ClassDef, ParamSpec, Route, TypeSpec};
use crate::swagger::naming::is_instance_method;

/// Sources whose arguments are never documented as discrete inputs.
const HIDDEN_SOURCES: [&str; 2] = ["req", "body"];

/// Returns a normalized copy of `route` for the class `class_def`.
pub fn normalize_route(route: &Route, class_def: &ClassDef) -> Route {
    let mut route = route.clone();

    if let Some(shared) = class_def.shared_accepts() {
        if is_instance_method(&route.method) {
            route.accepts.extend(shared.iter().cloned());
        }
    }

    route.accepts.retain(|accept| {
        let hidden = is_hidden_parameter(accept);
        if hidden {
            tracing::trace!(
                method = %route.method,
                param = accept.resolved_name().unwrap_or_default(),
                "dropping request-derived parameter"
            );
        }
        !hidden
    });

    if let Some(first) = route.returns.first_mut() {
        if first.arg.as_deref() == Some("data") {
            if first.ty == Some(TypeSpec::from("object")) {
                first.ty = Some(TypeSpec::Name(class_def.name.clone()));
            } else if first.ty == Some(TypeSpec::from("array")) {
                first.items = Some(json!({ "$ref": class_def.name }));
            }
        }
    }

    for accept in &mut route.accepts {
        translate_keys(&mut accept.fields);
    }
    for ret in &mut route.returns {
        translate_keys(&mut ret.fields);
    }

    route
}

/// True for arguments the caller never supplies: derived from the request by
/// a function, or mapped to the raw request or body.
pub fn is_hidden_parameter(accept: &ParamSpec) -> bool {
    match &accept.http {
        None => false,
        Some(http) if http.is_derived() => true,
        Some(http) => http
            .source()
            .is_some_and(|source| HIDDEN_SOURCES.contains(&source)),
    }
}

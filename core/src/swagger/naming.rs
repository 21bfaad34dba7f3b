#![deny(missing_docs)]

//! # Naming Utilities
//!
//! String rewrites from remoting conventions to Swagger ones, and the two
//! string-shape heuristics the converter relies on.

/// Converts Express-style path parameters to Swagger braces.
///
/// e.g. `/widgets/:id` -> `/widgets/{id}`
pub fn convert_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Maps a remoting verb to an HTTP method.
///
/// `all` is documented as `POST` and `del` as `DELETE`.
pub fn convert_verb(verb: &str) -> String {
    match verb {
        "all" => "POST".to_string(),
        "del" => "DELETE".to_string(),
        other => other.to_uppercase(),
    }
}

/// Derives the operation nickname from a dotted method name.
///
/// Documentation UIs use the nickname as an element id, where dots break
/// selectors. e.g. `Widget.prototype.find` -> `Widget_prototype_find`
pub fn to_nickname(method: &str) -> String {
    method.replace('.', "_")
}

/// Heuristic: methods nested deeper than `Class.method` run on an instance
/// (`Class.prototype.method`) and therefore take the constructor arguments.
pub fn is_instance_method(method: &str) -> bool {
    method.split('.').count() > 2
}

/// Heuristic: a parameter is bound from the path when `:<name>` occurs
/// anywhere in it.
///
/// This is a plain substring test, so `id` also matches `/:idle`.
pub fn is_path_parameter(path: &str, name: &str) -> bool {
    path.contains(&format!(":{}", name))
}

/// First segment of a dotted method name, i.e. the owning class.
pub fn owner_name(method: &str) -> &str {
    method.split('.').next().unwrap_or(method)
}

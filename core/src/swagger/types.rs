#![deny(missing_docs)]

//! # Data Type Mapping
//!
//! Maps remoting primitive types onto Swagger 1.2 data types.

use crate::remoting::TypeSpec;

/// Remoting type -> Swagger type. Anything else passes through unchanged.
const TYPE_TRANSLATIONS: [(&str, &str); 3] =
    [("buffer", "byte"), ("date", "Date"), ("number", "double")];

/// Maps an optional remoting type to its Swagger name.
///
/// A missing or empty type is `void`; any list form is `array`.
pub fn map_data_type(ty: Option<&TypeSpec>) -> String {
    match ty {
        None => "void".to_string(),
        Some(TypeSpec::List(_)) => "array".to_string(),
        Some(TypeSpec::Name(name)) if name.is_empty() => "void".to_string(),
        Some(TypeSpec::Name(name)) => TYPE_TRANSLATIONS
            .iter()
            .find(|(from, _)| *from == name.as_str())
            .map(|(_, to)| to.to_string())
            .unwrap_or_else(|| name.clone()),
    }
}

/// Element type of an array-typed argument, read from the first list entry.
///
/// A non-list type has no element entry and maps to `void`.
pub fn map_element_type(ty: Option<&TypeSpec>) -> String {
    match ty {
        Some(TypeSpec::List(items)) => map_data_type(items.first()),
        _ => map_data_type(None),
    }
}

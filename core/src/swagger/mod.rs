#![deny(missing_docs)]

//! # Swagger Module
//!
//! - **models**: Swagger 1.2 output structures.
//! - **types**: Remoting type -> Swagger data type mapping.
//! - **naming**: Path, verb and nickname rewrites plus the string heuristics.
//! - **normalize**: Route clean-up before conversion.
//! - **params**: Argument -> parameter mapping.
//! - **routes**: Route -> API conversion and merging into a declaration.
//! - **listing**: Per-class declarations and the resource listing.

pub mod listing;
pub mod models;
pub mod naming;
pub mod normalize;
pub mod params;
pub mod routes;
pub mod types;

pub use listing::{build_swagger, SwaggerBundle};
pub use models::{
    Api, ApiDeclaration, DeclarationOptions, Items, Operation, ParamType, Parameter,
    ResourceListing, ResourceRef,
};
pub use routes::{add_route_to_api_declaration, route_to_api};

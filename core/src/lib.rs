#![deny(missing_docs)]

//! # Remoting Swagger Core
//!
//! Documents remote method routes as Swagger 1.2 API declarations.

/// Shared error types.
pub mod error;

/// LDL -> Swagger key translation.
pub mod ldl;

/// Route, argument and class descriptions from the remoting layer.
pub mod remoting;

/// Swagger 1.2 models and the route converter.
pub mod swagger;

pub use error::{AppError, AppResult};
pub use ldl::translate_keys;
pub use remoting::{parse_route_listing, ClassDef, ParamSpec, ReturnSpec, Route, RouteListing};
pub use swagger::{
    add_route_to_api_declaration, build_swagger, ApiDeclaration, DeclarationOptions,
    SwaggerBundle,
};

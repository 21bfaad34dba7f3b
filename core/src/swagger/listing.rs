#![deny(missing_docs)]

//! # Resource Listing
//!
//! Builds the full Swagger 1.2 output for a route listing: one API
//! declaration per class plus the resource listing pointing at them.

use indexmap::IndexMap;
use serde::Serialize;

use crate::remoting::RouteListing;
use crate::swagger::models::{ApiDeclaration, DeclarationOptions, ResourceListing, ResourceRef};
use crate::swagger::routes::add_route_to_api_declaration;

/// Everything generated for one route listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerBundle {
    /// Top-level listing of every resource.
    pub resources: ResourceListing,
    /// API declarations keyed by class name, in first-seen class order.
    pub declarations: IndexMap<String, ApiDeclaration>,
}

impl SwaggerBundle {
    /// The declaration generated for `class_name`.
    pub fn declaration(&self, class_name: &str) -> Option<&ApiDeclaration> {
        self.declarations.get(class_name)
    }
}

/// Resource path of a class, e.g. `/Widget`.
pub fn resource_path(class_name: &str) -> String {
    format!("/{}", class_name)
}

/// Converts every route of every class in `listing`.
pub fn build_swagger(listing: &RouteListing, options: &DeclarationOptions) -> SwaggerBundle {
    let mut resources = ResourceListing::new(options);
    let mut declarations: IndexMap<String, ApiDeclaration> = IndexMap::new();

    for entry in &listing.classes {
        let name = &entry.class.name;
        let doc = declarations.entry(name.clone()).or_insert_with(|| {
            resources.apis.push(ResourceRef {
                path: resource_path(name),
                description: None,
            });
            ApiDeclaration::new(resource_path(name), options)
        });

        for route in &entry.routes {
            add_route_to_api_declaration(route, &entry.class, doc);
        }
    }

    tracing::debug!(resources = resources.apis.len(), "built swagger bundle");
    SwaggerBundle {
        resources,
        declarations,
    }
}

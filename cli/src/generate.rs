#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads a route listing and prints the Swagger 1.2 resource listing, or the
//! API declaration of a single resource.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use remoting_swagger_core::remoting::parse_route_listing;
use remoting_swagger_core::swagger::{build_swagger, DeclarationOptions};
use remoting_swagger_core::{AppError, AppResult, RouteListing};
use serde::Serialize;

/// Output encodings.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the route listing (JSON or YAML).
    #[clap(long, env = "REMOTING_SWAGGER_INPUT")]
    pub input: PathBuf,

    /// Print the API declaration of this class instead of the resource listing.
    #[clap(long)]
    pub resource: Option<String>,

    /// API version; overrides `apiVersion` from the listing.
    #[clap(long, env = "REMOTING_SWAGGER_API_VERSION")]
    pub api_version: Option<String>,

    /// Base path; overrides `basePath` from the listing.
    #[clap(long, env = "REMOTING_SWAGGER_BASE_PATH")]
    pub base_path: Option<String>,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Resolves document options: flags and environment first, then the listing.
    pub fn options(&self, listing: &RouteListing) -> DeclarationOptions {
        let defaults = DeclarationOptions::default();
        DeclarationOptions {
            api_version: self
                .api_version
                .clone()
                .or_else(|| listing.api_version.clone()),
            base_path: self
                .base_path
                .clone()
                .or_else(|| listing.base_path.clone())
                .unwrap_or(defaults.base_path),
        }
    }
}

/// Executes the generation, writing the document to `out`.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `out` - Destination of the rendered document (stdout in the binary).
pub fn execute(args: &GenerateArgs, out: &mut impl Write) -> AppResult<()> {
    if !args.input.exists() {
        return Err(AppError::General(format!(
            "Route listing not found: {:?}",
            args.input
        )));
    }

    let content = fs::read_to_string(&args.input)?;
    let listing = parse_route_listing(&content)?;
    let options = args.options(&listing);
    tracing::info!(
        input = %args.input.display(),
        classes = listing.classes.len(),
        "generating swagger"
    );

    let bundle = build_swagger(&listing, &options);

    let rendered = match &args.resource {
        Some(name) => {
            let doc = bundle
                .declaration(name)
                .ok_or_else(|| AppError::General(format!("Unknown resource: {}", name)))?;
            render(doc, args.format)?
        }
        None => render(&bundle.resources, args.format)?,
    };

    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> AppResult<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

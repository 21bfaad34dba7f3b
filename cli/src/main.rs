#![deny(missing_docs)]

//! # Remoting Swagger CLI
//!
//! Command Line Interface for documenting remote method routes.
//!
//! Supported Commands:
//! - `generate`: Route listing -> Swagger 1.2 resource listing / API declaration.

use clap::{Parser, Subcommand};
use remoting_swagger_core::AppResult;

mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger 1.2 generator for remote method routes")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Swagger document for a route listing.
    Generate(generate::GenerateArgs),
}

fn main() -> AppResult<()> {
    logging::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            let stdout = std::io::stdout();
            generate::execute(args, &mut stdout.lock())?;
        }
    }

    Ok(())
}

//! mdstitch - documentation-build glue for Markdown
//!
//! Flattens Markdown documents by expanding `{{include: path}}` directives
//! recursively (with cycle detection), substitutes `{{key}}` placeholders
//! from the leading frontmatter block, and can translate or transform a
//! document body via the OpenAI Responses API while keeping the frontmatter
//! untouched.

use clap::Parser;

mod api;
mod cli;
mod commands;
mod error;
mod expand;
mod frontmatter;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Translate(args) => commands::translate::run(args),
        Commands::Process(args) => commands::process::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

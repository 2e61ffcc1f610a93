//! Build command: expand includes, then substitute frontmatter variables

use console::Style;

use crate::cli::BuildArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::{expand, frontmatter};

/// Run build command
pub fn run(args: BuildArgs) -> Result<()> {
    let flattened = expand::expand_document(&args.input)?;
    let document = frontmatter::substitute(&flattened);

    helpers::write_output(&args.output, &document)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("OK:"),
        args.output.display()
    );
    Ok(())
}

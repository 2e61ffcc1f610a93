//! Process command: transform a document body with free-form instructions
//!
//! Instructions come from `-i <string>` or `-c <file>`. With empty
//! instructions the body is copied unchanged and no API call is made.
//! Output goes to a file (with an `OK:` summary on stderr) or to stdout.

use console::Style;

use crate::api::{self, ResponsesClient};
use crate::cli::ProcessArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::frontmatter;
use crate::progress::ApiSpinner;

/// Run process command
pub fn run(args: ProcessArgs) -> Result<()> {
    let document = helpers::read_input(&args.input)?;
    let (front, body) = frontmatter::split_raw(&document);

    let instructions = load_instructions(&args)?;
    let out_text = if instructions.is_empty() {
        body.to_string()
    } else {
        transform_body(&args, &instructions, body)?
    };

    let result = format!("{front}{out_text}");
    match &args.output {
        Some(path) => {
            helpers::write_output(path, &result)?;
            eprintln!(
                "{} {} (in: {} bytes, out: {} bytes)",
                Style::new().green().bold().apply_to("OK:"),
                path.display(),
                document.len(),
                result.len()
            );
        }
        None => print!("{result}"),
    }
    Ok(())
}

fn load_instructions(args: &ProcessArgs) -> Result<String> {
    match &args.instructions_file {
        Some(file) => helpers::read_input(file).map(|s| s.trim().to_string()),
        None => Ok(args
            .instructions
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string()),
    }
}

fn transform_body(args: &ProcessArgs, instructions: &str, body: &str) -> Result<String> {
    let client = ResponsesClient::new(args.api_key.as_deref().unwrap_or_default())?;
    let model = args.model.as_deref().unwrap_or(api::DEFAULT_MODEL);

    let spinner = ApiSpinner::start(&format!("Processing {} ({model})", args.input.display()));
    match client.transform(model, instructions, body) {
        Ok(text) => {
            spinner.finish();
            Ok(text)
        }
        Err(e) => {
            spinner.abandon();
            Err(e)
        }
    }
}

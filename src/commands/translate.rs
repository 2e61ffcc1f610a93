//! Translate command: German-to-English body translation via the Responses API
//!
//! The leading frontmatter block is carried over byte-for-byte; only the
//! Markdown body is sent to the API.

use console::Style;

use crate::api::{self, ResponsesClient};
use crate::cli::TranslateArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::frontmatter;
use crate::progress::ApiSpinner;

const INSTRUCTIONS: &str = "\
You are a professional technical translator.

Task:
- Translate the provided Markdown BODY from German to English.
- Keep Markdown structure exactly (headings, lists, tables, links).
- Do NOT translate code blocks (fenced ``` or ~~~) and do NOT translate inline code (`like this`).
- Do NOT translate URLs.
- Preserve product names, variable names, filenames, identifiers exactly.
- Do not add commentary. Output ONLY the translated Markdown body.";

/// Run translate command
pub fn run(args: TranslateArgs) -> Result<()> {
    let document = helpers::read_input(&args.input)?;
    let (front, body) = frontmatter::split_raw(&document);

    let client = ResponsesClient::new(args.api_key.as_deref().unwrap_or_default())?;
    let model = args.model.as_deref().unwrap_or(api::DEFAULT_MODEL);

    let spinner = ApiSpinner::start(&format!("Translating {} ({model})", args.input.display()));
    let translated = match client.transform(model, INSTRUCTIONS, body) {
        Ok(text) => {
            spinner.finish();
            text
        }
        Err(e) => {
            spinner.abandon();
            return Err(e);
        }
    };

    let result = format!("{front}{translated}");
    helpers::write_output(&args.output, &result)?;

    eprintln!(
        "{} {} (in: {} bytes, out: {} bytes)",
        Style::new().green().bold().apply_to("OK:"),
        args.output.display(),
        document.len(),
        result.len()
    );
    Ok(())
}

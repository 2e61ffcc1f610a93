//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mdstitch - documentation-build glue for Markdown
#[derive(Parser, Debug)]
#[command(
    name = "mdstitch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Markdown build tool: include expansion, frontmatter variables, AI body transforms",
    long_about = "mdstitch flattens Markdown documents by expanding {{include: path}} directives \
                  recursively (with cycle detection), substitutes {{key}} placeholders from the \
                  leading frontmatter block, and can translate or transform a document body via \
                  the OpenAI Responses API while leaving the frontmatter untouched.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mdstitch build docs/recipes/product-a.md build/product-a.md\n    \
                  mdstitch translate docs/intro.md build/intro.en.md\n    \
                  mdstitch process docs/intro.md -i \"Compact to a short summary\"\n    \
                  mdstitch process docs/intro.md -c prompts/translate_de_en.txt build/intro.en.md"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand includes and substitute frontmatter variables
    Build(BuildArgs),

    /// Translate a document body (German to English), keeping frontmatter untouched
    Translate(TranslateArgs),

    /// Transform a document body with free-form instructions
    Process(ProcessArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build a recipe document:\n    mdstitch build docs/recipes/product-a.md build/product-a.md\n\n\
                  Output directories are created as needed:\n    mdstitch build docs/index.md build/nested/dir/index.md")]
pub struct BuildArgs {
    /// Entry document with {{include: path}} directives
    pub input: PathBuf,

    /// Destination file for the flattened document
    pub output: PathBuf,
}

/// Arguments for the translate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Translate a document:\n    mdstitch translate docs/intro.md build/intro.en.md\n\n\
                  Use a different model:\n    mdstitch translate docs/intro.md build/intro.en.md -m gpt-4.1-nano")]
pub struct TranslateArgs {
    /// Input markdown file
    pub input: PathBuf,

    /// Output file for the translated document
    pub output: PathBuf,

    /// Model name override
    #[arg(long, short = 'm', value_name = "MODEL")]
    pub model: Option<String>,

    /// API key (defaults to the OPENAI_API_KEY environment variable)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the process command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Instructions as a string:\n    mdstitch process docs/text.md -i \"Translate into English\" build/text.en.md\n\n\
                  Instructions from a file:\n    mdstitch process docs/text.md -c prompts/translate_de_en.txt build/text.en.md\n\n\
                  Write to stdout:\n    mdstitch process docs/text.md -i \"Compact to a short summary\"\n\n\
                  No instructions copies the input unchanged (no API call):\n    mdstitch process docs/text.md build/copy.md")]
pub struct ProcessArgs {
    /// Input markdown file
    pub input: PathBuf,

    /// Output file. If omitted, writes to stdout
    pub output: Option<PathBuf>,

    /// Instructions as a string
    #[arg(long, short = 'i', value_name = "STRING", conflicts_with = "instructions_file")]
    pub instructions: Option<String>,

    /// Load instructions from a file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub instructions_file: Option<PathBuf>,

    /// Model name override
    #[arg(long, short = 'm', value_name = "MODEL")]
    pub model: Option<String>,

    /// API key (defaults to the OPENAI_API_KEY environment variable)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mdstitch completions --shell bash > ~/.bash_completion.d/mdstitch\n\n\
                  Generate zsh completions:\n    mdstitch completions --shell zsh > ~/.zfunc/_mdstitch")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

//! treehtml CLI
//!
//! Usage:
//!   treehtml [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>     Render configuration (TOML format)
//!   -i, --indent <TEXT>     Indentation unit
//!   -d, --depth <N>         Starting indent depth
//!   --doctype [<NAME>]      Emit a doctype line (default name: html)
//!   -t, --tree              Print the built node tree instead of markup
//!   -a, --args              Treat the input as an argument list
//!   -v, --verbose           Log progress to stderr
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use treehtml::{
    render_with_config, split_arguments_onto, ConfigError, Content, Doctype, OutputMode,
    RenderConfig, RenderError, Rendered,
};

#[derive(Parser)]
#[command(name = "treehtml")]
#[command(about = "Render JSON element descriptions as indented HTML")]
struct Cli {
    /// Input file with a JSON document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text used for one level of indentation
    #[arg(short, long)]
    indent: Option<String>,

    /// Indent depth of the top-level elements
    #[arg(short, long)]
    depth: Option<usize>,

    /// Emit a doctype line, optionally with a custom declaration
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "html")]
    doctype: Option<String>,

    /// Print the built node tree instead of markup
    #[arg(short, long)]
    tree: bool,

    /// Treat the input as an argument list whose first entry may be a configuration object
    #[arg(short, long)]
    args: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Error loading config '{path}': {source}")]
    Config { path: PathBuf, source: ConfigError },
    #[error("Error reading input: {0}")]
    Input(#[from] io::Error),
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error: {0}")]
    Render(#[from] RenderError),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    match run(&cli) {
        Ok(Rendered::Markup(html)) => print!("{}", html),
        Ok(Rendered::Tree(node)) => println!("{:#?}", node),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Rendered, CliError> {
    let base = match &cli.config {
        Some(path) => RenderConfig::from_file(path).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?,
        None => RenderConfig::default(),
    };

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // A leading config object sits on top of the config file
    let (config, content) = if cli.args {
        split_arguments_onto(base, Content::arguments_from_json_str(&source)?)?
    } else {
        (base, vec![Content::from_json_str(&source)?])
    };
    let config = apply_overrides(config, cli);

    info!(
        arguments = content.len(),
        mode = ?config.output_mode,
        "rendering document"
    );
    Ok(render_with_config(&config, &content)?)
}

/// Command-line flags win over the configuration file
fn apply_overrides(mut config: RenderConfig, cli: &Cli) -> RenderConfig {
    if let Some(indent) = &cli.indent {
        config.indent_unit = indent.clone();
    }
    if let Some(depth) = cli.depth {
        config.indent_depth = depth;
    }
    if let Some(doctype) = &cli.doctype {
        config.doctype = match doctype.as_str() {
            "html" => Doctype::Html,
            other => Doctype::Custom(other.to_string()),
        };
    }
    if cli.tree {
        config.output_mode = OutputMode::Tree;
    }
    config
}

fn print_intro() {
    println!(
        r#"treehtml - render JSON element descriptions as indented HTML

USAGE:
    treehtml [OPTIONS] [FILE]
    echo '<json>' | treehtml

OPTIONS:
    -c, --config <FILE>   Render configuration (TOML file)
    -i, --indent <TEXT>   Indentation unit (default: two spaces)
    -d, --depth <N>       Starting indent depth
    --doctype [<NAME>]    Emit a doctype line (default name: html)
    -t, --tree            Print the node tree instead of markup
    -a, --args            Input is an argument list, optionally led by a config object
    -v, --verbose         Log progress to stderr
    -h, --help            Print help

QUICK START:
    echo '["p", {{"class": "lead"}}, "Hello"]' | treehtml

An element is a JSON array: the tag name, an optional attribute object,
then the children (strings, numbers, or nested arrays)."#
    );
}

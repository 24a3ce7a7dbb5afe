//! # vlua
//!
//! Converts a Lua file into a visual representation.
//!
//! ```text
//! vlua <filename> [-o|--output-file PATH] [-f|--format html|text|json]
//!      [--standalone] [--indent N]
//! ```
//!
//! Without `--output-file` the markup is printed to stdout.

use std::fs;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use config::constants::MAX_NESTING_DEPTH;
use config::RenderConfig;
use vlua_render::{render_source, Format};

const USAGE: &str = "\
A tool for converting Lua code into visual representations for enhanced program comprehension.

Usage: vlua <filename> [options]

Arguments:
  <filename>               Path to the input Lua file

Options:
  -o, --output-file PATH   Write the result to PATH instead of the console
  -f, --format FORMAT      Output format: html, text or json (default: html)
      --standalone         Wrap HTML output in a complete document
      --indent N           Spaces per indentation level (default: 4)
  -h, --help               Print this help";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    input: String,
    output: Option<String>,
    format: Format,
    config: RenderConfig,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Render(Options),
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args = args.into_iter();
    let mut input = None;
    let mut output = None;
    let mut format = Format::default();
    let mut standalone = false;
    let mut indent = config::constants::DEFAULT_INDENT_WIDTH;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--output-file" => {
                output = Some(
                    args.next()
                        .ok_or_else(|| anyhow!("Missing path after {arg}"))?,
                );
            }
            "-f" | "--format" => {
                let name = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing format name after {arg}"))?;
                format = name.parse()?;
            }
            "--standalone" => standalone = true,
            "--indent" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing width after {arg}"))?;
                indent = value
                    .parse()
                    .with_context(|| format!("Invalid indent width '{value}'"))?;
            }
            flag if flag.starts_with('-') => bail!("Unknown option '{flag}'"),
            _ => {
                if input.is_some() {
                    bail!("Only one input file is supported");
                }
                input = Some(arg);
            }
        }
    }

    let input = input.ok_or_else(|| anyhow!("Missing input filename\n\n{USAGE}"))?;
    let config = RenderConfig::new(indent, MAX_NESTING_DEPTH)?.with_standalone(standalone);

    Ok(Command::Render(Options {
        input,
        output,
        format,
        config,
    }))
}

fn run() -> Result<()> {
    let options = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Render(options) => options,
    };

    let source = fs::read_to_string(&options.input)
        .with_context(|| format!("Reading {}", options.input))?;
    let markup = render_source(&source, options.format, options.config)
        .with_context(|| format!("Rendering {}", options.input))?;

    match &options.output {
        Some(path) => fs::write(path, markup).with_context(|| format!("Writing {path}"))?,
        None => println!("{markup}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

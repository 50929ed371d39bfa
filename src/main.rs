use std::process::ExitCode;

use clap::{Parser, Subcommand};
use okpath::{Accessor, Check, Kind, Options, DEFAULT_SEPARATOR};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Read, write and default values inside a JSON document by property path.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Character separating property names in a path
    #[arg(long, short, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,
    /// Raise log verbosity (repeatable); `OKPATH_LOG` takes precedence
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at PATH; exits 1 when it is undefined
    Get {
        json: String,
        path: String,
        /// Returned when the value is null or missing
        #[arg(long)]
        default: Option<String>,
    },
    /// Write VALUE at PATH and print the document
    Set { json: String, path: String, value: String },
    /// Write VALUE at PATH only if it is null or missing, and print the document
    Ensure { json: String, path: String, value: String },
    /// Print every predicate for the value at PATH (or the document itself)
    Check { json: String, path: Option<String> },
}

#[derive(Serialize)]
struct CheckReport {
    #[serde(rename = "typeof")]
    type_of: &'static str,
    kindof: &'static str,
    defined: bool,
    undefined: bool,
    null: bool,
    value: bool,
    truthy: bool,
    falsy: bool,
}

impl CheckReport {
    fn new(check: &Check<'_>) -> Self {
        let kind = Kind::of(check.data());
        Self {
            type_of: kind.type_tag(),
            kindof: kind.kind_tag(),
            defined: check.defined(),
            undefined: check.undefined(),
            null: check.null(),
            value: check.value(),
            truthy: check.truthy(),
            falsy: check.falsy(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("OKPATH_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the document argument; exits 2 on invalid JSON.
fn parse_document(json: &str) -> Result<Value, ExitCode> {
    serde_json::from_str(json).map_err(|e| {
        eprintln!("Invalid JSON: {e}");
        ExitCode::from(2)
    })
}

/// Value arguments are JSON when they parse, plain strings otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => error!("cannot render output: {e}"),
    }
}

fn run(accessor: Accessor, command: Command) -> Result<(), ExitCode> {
    match command {
        Command::Get { json, path, default } => {
            let doc = parse_document(&json)?;
            let fallback = default.as_deref().map(parse_value);
            let found = match fallback.as_ref() {
                Some(fb) => accessor.get_or(&doc, &path, Some(fb)),
                None => accessor.get(&doc, &path),
            };
            match found {
                Some(v) => print(v),
                None => {
                    debug!(path = %path, "value is undefined");
                    return Err(ExitCode::from(1));
                }
            }
        }
        Command::Set { json, path, value } => {
            let mut doc = parse_document(&json)?;
            let out = accessor.set(&mut doc, &path, parse_value(&value)).map_err(fail)?;
            print(out);
        }
        Command::Ensure { json, path, value } => {
            let mut doc = parse_document(&json)?;
            let out = accessor.ensure(&mut doc, &path, parse_value(&value)).map_err(fail)?;
            print(out);
        }
        Command::Check { json, path } => {
            let doc = parse_document(&json)?;
            let check = match path.as_deref() {
                Some(p) => accessor.check_at(&doc, p),
                None => okpath::check(&doc),
            };
            match serde_json::to_value(CheckReport::new(&check)) {
                Ok(report) => print(&report),
                Err(e) => error!("cannot render report: {e}"),
            }
        }
    }
    Ok(())
}

fn fail(e: okpath::PathError) -> ExitCode {
    eprintln!("{e}");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();
    init_tracing(args.verbose);

    let accessor = Accessor::with_options(Options::with_separator(args.separator));
    match run(accessor, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

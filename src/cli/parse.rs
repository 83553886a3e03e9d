//! Parse command implementation.
//!
//! Parses one raw value of a declared kind and prints its canonical form.

use clap::Args;
use serde_yaml::Value;

use crate::error::Result;
use crate::kind::{self, ValueKind};
use crate::output::Printer;
use crate::parser::Parser;

/// Parse a raw value and print its canonical form
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Declared kind of the value, e.g. `percentage` or `list<range(0..9)>`
    pub kind: ValueKind,

    /// Raw value to parse
    pub raw: String,

    /// Decode RAW as YAML first, so `[1, 2]` is read as a sequence
    #[arg(long)]
    pub yaml: bool,

    /// Print the typed value as JSON instead of its canonical text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let output = match parse_and_format(&args) {
        Ok(output) => output,
        Err(e) => {
            printer.error("Rejected", &format!("{} {}", args.kind, printer.dim(&args.raw)));
            return Err(e);
        }
    };

    println!("{}", output);
    printer.status("Parsed", &format!("{} {}", args.kind, printer.dim(&args.raw)));
    Ok(())
}

fn parse_and_format(args: &ParseArgs) -> Result<String> {
    let raw = if args.yaml {
        serde_yaml::from_str(&args.raw)?
    } else {
        Value::String(args.raw.clone())
    };

    let value = kind::parse_or_error(&args.kind, &raw)?;

    if args.json {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(args.kind.parser().render(&value))
    }
}

pub mod completions;
pub mod kinds;
pub mod parse;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// cfgval - Typed configuration value parser
#[derive(Parser, Debug)]
#[command(name = "cfgval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a raw value of a given kind and print its canonical form
    Parse(parse::ParseArgs),

    /// List the supported value kinds and their tag syntax
    Kinds,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Install the stderr tracing subscriber for the binary.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}

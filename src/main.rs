use clap::Parser;
use miette::Result;
use cfgval::cli::{Cli, Commands};
use cfgval::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cfgval::cli::init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Parse(args) => cfgval::cli::parse::run(args, &printer)?,
        Commands::Kinds => cfgval::cli::kinds::run(),
        Commands::Completions(args) => cfgval::cli::completions::run(args)?,
    }

    Ok(())
}

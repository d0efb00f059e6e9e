use clap::Parser;
use idxtex::cli::{Cli, Commands};
use idxtex::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => idxtex::cli::build::run(args, &printer)?,
        Commands::Inspect(args) => idxtex::cli::inspect::run(args, &printer)?,
    }

    Ok(())
}

pub mod build;
pub mod inspect;

use clap::{Parser, Subcommand};

/// idxtex - compile RGBA sprites into palette-indexed C arrays
#[derive(Parser, Debug)]
#[command(name = "idxtex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every asset in the project into indexed arrays
    Build(build::BuildArgs),

    /// Print the palette an image would compile to
    Inspect(inspect::InspectArgs),
}

//! Build command implementation.
//!
//! Compiles every asset in the project, then writes the artifacts. All
//! assets are compiled before anything is written, so a failing asset
//! leaves no output behind.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::compile::compile_asset;
use crate::discovery::{discover, load_project, Project};
use crate::error::{IdxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{emit, ArtifactEncoder, CSourceEncoder, DirSink, JsonEncoder};
use crate::types::{Artifact, AssetSpec};

/// Output encodings the build can produce.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// C array literals
    C,
    /// Pretty-printed JSON
    Json,
    /// Both C and JSON
    All,
}

impl OutputFormat {
    fn encoders(self, include: Option<String>) -> Vec<Box<dyn ArtifactEncoder>> {
        let c: Box<dyn ArtifactEncoder> = Box::new(CSourceEncoder::new(include));
        match self {
            OutputFormat::C => vec![c],
            OutputFormat::Json => vec![Box::new(JsonEncoder)],
            OutputFormat::All => vec![c, Box::new(JsonEncoder)],
        }
    }
}

/// Compile every asset in the project into indexed arrays
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest to use instead of <PATH>/idxtex.yaml
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::C)]
    pub format: OutputFormat,

    /// Only build the named assets (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Header to #include in C output (overrides the manifest)
    #[arg(long)]
    pub include: Option<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    execute(args, printer).map(|_| ())
}

/// Run the build, returning every path written.
pub fn execute(args: BuildArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let project = match &args.manifest {
        Some(path) => load_project(path)?,
        None => discover(&args.path)?,
    };

    if !project.has_manifest {
        printer.info("Using", "builtin assets (no idxtex.yaml found)");
    }

    let assets = select_assets(&project, &args.only)?;
    if assets.is_empty() {
        printer.warning("Warning", "no assets to build");
        return Ok(vec![]);
    }

    let artifacts = compile_all(&assets, &project, printer)?;

    let output_dir = args.output.clone().unwrap_or_else(|| project.output_dir());
    let include = args.include.clone().or_else(|| project.manifest.include.clone());
    let encoders = args.format.encoders(include);
    let mut sink = DirSink::new(&output_dir);
    let mut written = Vec::new();

    for artifact in &artifacts {
        for encoder in &encoders {
            let path = emit(artifact, &**encoder, &mut sink)?;
            printer.info("Wrote", &display_path(&path));
            written.push(path);
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(artifacts.len(), "asset", "assets"),
            display_path(sink.dir())
        ),
    );

    Ok(written)
}

/// Restrict the project's assets to `only`, keeping manifest order.
fn select_assets<'a>(project: &'a Project, only: &[String]) -> Result<Vec<&'a AssetSpec>> {
    if let Some(missing) = only
        .iter()
        .find(|name| !project.assets.iter().any(|a| &a.name == *name))
    {
        let known: Vec<&str> = project.assets.iter().map(|a| a.name.as_str()).collect();
        return Err(IdxError::Parse {
            message: format!("Unknown asset '{}'", missing),
            help: Some(format!("Known assets: {}", known.join(", "))),
        });
    }

    Ok(project
        .assets
        .iter()
        .filter(|a| only.is_empty() || only.contains(&a.name))
        .collect())
}

fn compile_all(
    assets: &[&AssetSpec],
    project: &Project,
    printer: &Printer,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::with_capacity(assets.len());

    for spec in assets {
        printer.status("Compiling", &format!("{} ({})", spec.name, spec.geometry));

        let source = project.root.join(&spec.source);
        if source.extension().and_then(|e| e.to_str()) != Some("png") {
            printer.warning(
                "Warning",
                &format!("{} does not have a .png extension", display_path(&source)),
            );
        }

        let artifact = match compile_asset(spec, &project.root) {
            Ok(artifact) => artifact,
            Err(e) => {
                printer.error("Failed", &spec.name);
                return Err(e);
            }
        };

        printer.info(
            "Indexed",
            &format!(
                "{}, {}",
                plural(artifact.ntiles() as usize, "tile", "tiles"),
                plural(artifact.palette_len(), "colour", "colours")
            ),
        );
        artifacts.push(artifact);
    }

    Ok(artifacts)
}

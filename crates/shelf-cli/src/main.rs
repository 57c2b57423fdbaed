//! shelf-build: build a shelf document and export every solid as binary STL.

mod stl;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shelf_engine::{build, plan};
use shelf_format::{default_document, load_document, ShelfDocument};
use shelf_kernel::{GeometryBackend, TruckBackend};
use tracing::info;

/// Build a modular storage case and its drawers.
#[derive(Parser, Debug)]
#[command(name = "shelf-build")]
#[command(about = "Generate shelf case and drawer solids from a layout document", long_about = None)]
#[command(version)]
struct Cli {
    /// Shelf document (JSON). The built-in three-column shelf when omitted.
    #[arg(name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Directory the STL files are written to
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Tessellation tolerance
    #[arg(long, default_value_t = 0.05)]
    tolerance: f64,

    /// Print the planned drawer geometry and exit without building
    #[arg(long)]
    plan: bool,
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn read_document(path: Option<&PathBuf>) -> Result<ShelfDocument> {
    let Some(path) = path else {
        return Ok(default_document());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    load_document(&json).with_context(|| format!("failed to load {}", path.display()))
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let document = read_document(cli.document.as_ref())?;
    info!(
        project = %document.project.name,
        drawers = document.layout.drawer_count(),
        "document loaded"
    );

    if cli.plan {
        let plan = plan(&document.layout, &document.config)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let mut backend = TruckBackend::new();
    let report = build(&document.layout, &document.config, &mut backend)?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;
    for (name, solid) in report.named_solids() {
        let mesh = backend
            .tessellate(solid, cli.tolerance)
            .with_context(|| format!("failed to tessellate {}", name))?;
        let bytes = stl::export_binary_stl(&mesh, &name)?;
        let path = cli.out.join(format!("{}.stl", name));
        fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), triangles = mesh.triangle_count(), "wrote");
    }
    Ok(())
}

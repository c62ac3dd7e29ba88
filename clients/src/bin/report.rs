//! `liealg-report`: prints the structural invariants of a Lie algebra.
//!
//! The algebra comes from a JSON bracket table or a built-in preset and is
//! evaluated over the chosen exact field.
//!
//! **Usage:**
//! ```text
//! liealg-report (--input <path> | --preset <name>) [--field rational|gf2|gf3|gf5|gf7]
//!               [--format text|json] [--verify-jacobi]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use liealg::algebras::StructureConstantsAlgebra;
use liealg::field::{Gf2, Gf3, Gf5, Gf7, Rational};
use liealg::Field;
use liealg_clients::{Definition, Preset, Report};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Base field for the computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FieldChoice {
    /// The rationals.
    Rational,
    /// GF(2).
    Gf2,
    /// GF(3).
    Gf3,
    /// GF(5).
    Gf5,
    /// GF(7).
    Gf7,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable summary.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Report structural invariants of a finite-dimensional Lie algebra.
#[derive(Parser)]
#[command(
    name = "liealg-report",
    about = "Report structural invariants of a finite-dimensional Lie algebra"
)]
struct Args {
    /// JSON file with `generators` and `brackets`.
    #[arg(long, conflicts_with = "preset")]
    input: Option<PathBuf>,

    /// Built-in algebra: sl2, so3, two-dim, heisenberg[:n].
    #[arg(long)]
    preset: Option<Preset>,

    /// Base field.
    #[arg(long, value_enum, default_value_t = FieldChoice::Rational)]
    field: FieldChoice,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Check the Jacobi identity on every basis triple before reporting.
    #[arg(long)]
    verify_jacobi: bool,
}

fn load<F: Field>(args: &Args) -> Result<StructureConstantsAlgebra<F>> {
    match (&args.input, args.preset) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Definition::from_json(&text)?.build()
        }
        (None, Some(preset)) => Ok(preset.build()),
        (None, None) => bail!("either --input or --preset is required"),
    }
}

fn run<F: Field>(args: &Args) -> Result<String> {
    let algebra = load::<F>(args)?;
    if args.verify_jacobi {
        algebra.verify_jacobi().context("not a Lie algebra")?;
        info!("Jacobi identity holds on every basis triple");
    }
    let report = Report::of(&algebra);
    match args.format {
        Format::Text => Ok(report.to_string()),
        Format::Json => serde_json::to_string_pretty(&report).context("serializing report"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let output = match args.field {
        FieldChoice::Rational => run::<Rational>(&args)?,
        FieldChoice::Gf2 => run::<Gf2>(&args)?,
        FieldChoice::Gf3 => run::<Gf3>(&args)?,
        FieldChoice::Gf5 => run::<Gf5>(&args)?,
        FieldChoice::Gf7 => run::<Gf7>(&args)?,
    };
    println!("{output}");
    Ok(())
}

//! jncgen CLI - JNC Java class generator for YANG modules
//!
//! Loads YIN files, resolves references across them and writes one Java
//! class per container, list and typedef of every module, plus the
//! `.schema` files JNC reads at runtime.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use jncgen_codegen::{CONFIG_FILE_NAME, CodegenError, GeneratorConfig, generate};
use jncgen_schema::{Schema, annotate, load_yin_file};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

mod logging;

#[derive(Parser)]
#[command(name = "jncgen")]
#[command(author, version, about = "Generate JNC Java classes from YANG modules", long_about = None)]
struct Cli {
    /// YIN files to load, including the modules they import
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Base Java package of the generated classes (default: gen)
    #[arg(short = 'd', long)]
    java_package: Option<String>,

    /// Output directory for the package tree
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to a configuration file (default: ./jncgen.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not generate .schema files
    #[arg(long)]
    no_schema: bool,

    /// Generate even if the modules contain errors
    #[arg(long)]
    ignore_errors: bool,

    /// Log every generation step
    #[arg(long)]
    verbose: bool,

    /// Debug logging for jncgen itself
    #[arg(long)]
    debug: bool,

    /// Leave the date out of class headers
    #[arg(long)]
    no_date: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CodegenError>()
                .map_or(1, CodegenError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let mut schema = Schema::new();
    for file in &cli.files {
        load_yin_file(&mut schema, file)
            .with_context(|| format!("Failed to load {}", file.display()))?;
    }
    annotate(&mut schema);
    for diagnostic in schema.diagnostics() {
        debug!(%diagnostic, "Schema diagnostic");
    }

    let generation = generate(&mut schema, &config)?;
    let written = generation
        .write_to(&cli.output)
        .with_context(|| format!("Failed to write output to {}", cli.output.display()))?;

    info!(
        classes = generation.classes.len(),
        schemas = generation.schemas.len(),
        warnings = generation.warnings.len(),
        "Generation complete"
    );
    if cli.verbose {
        for path in written {
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Configuration file values with command-line flags applied on top.
fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if Path::new(CONFIG_FILE_NAME).is_file() => {
            GeneratorConfig::load(Path::new(CONFIG_FILE_NAME))
                .with_context(|| format!("Failed to load config {CONFIG_FILE_NAME}"))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(package) = &cli.java_package {
        config.package = package.clone();
    }
    config.no_schema |= cli.no_schema;
    config.ignore_errors |= cli.ignore_errors;
    if cli.no_date {
        config.date = None;
    } else if config.date.is_none() {
        config.date = Some(Local::now().format("%Y-%m-%d").to_string());
    }

    debug!(?config, "Configuration loaded");
    Ok(config)
}

//! Fish data preparation CLI
//!
//! Command-line tool for turning unpacked game data tables into one
//! cross-referenced fish document per locale.

use clap::{Args, Parser, Subcommand};
use fish_core::{run_all, scan_source, Locale, PipelineConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prepare-data")]
#[command(about = "Prepare per-locale fish data documents", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    /// Config file (JSON); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the unpacked game content [default: /source]
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory [default: /data]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Game version embedded in the documents [default: Latest]
    #[arg(long)]
    version_name: Option<String>,

    /// Locale codes to run (repeatable); "en" for the default locale
    #[arg(short, long)]
    locale: Vec<String>,
}

impl RunArgs {
    /// Config file values with the command-line flags applied on top
    fn into_config(self) -> fish_core::Result<PipelineConfig> {
        let mut config = match self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(version) = self.version_name {
            config.version = version;
        }
        if !self.locale.is_empty() {
            config.locales = Some(self.locale);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build and write the document of every configured locale (default)
    Run(RunArgs),

    /// List the tables of a source directory and their translations
    Scan {
        /// Directory holding the unpacked game content
        #[arg(short, long, default_value = "/source")]
        source: PathBuf,

        /// Also list the locales each table is missing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a config file template
    CreateConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fish_core=info,prepare_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> fish_core::Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        None => cmd_run(&cli.run.into_config()?),
        Some(Commands::Run(args)) => cmd_run(&args.into_config()?),
        Some(Commands::Scan { source, verbose }) => cmd_scan(&source, verbose),
        Some(Commands::CreateConfig { output }) => cmd_create_config(&output),
    }
}

fn cmd_run(config: &PipelineConfig) -> fish_core::Result<bool> {
    info!(
        source = %config.source.display(),
        output = %config.output.display(),
        version = %config.version,
        "starting run"
    );
    let report = run_all(config)?;

    for (locale, path) in &report.written {
        println!("{}: {}", locale.language(), path.display());
    }

    if !report.failed.is_empty() {
        println!("\nFailed ({}):", report.failed.len());
        for (locale, err) in &report.failed {
            println!("  {} [{}]: {}", locale.language(), locale, err);
        }
    }

    Ok(report.is_success())
}

fn cmd_scan(source: &Path, verbose: bool) -> fish_core::Result<bool> {
    let result = scan_source(source)?;

    println!("Scanned {}", result.root.display());
    println!(
        "Found {} files in {} tables",
        result.total_files,
        result.families.len()
    );
    println!();

    for family in &result.families {
        let locales: Vec<String> = family.members.iter().map(|m| m.locale.to_string()).collect();
        println!("  {} [{}]", family.name, locales.join(", "));

        if verbose {
            let missing = family.missing_locales();
            if missing.len() == Locale::ALL.len() - 1 {
                println!("    no translations");
            } else if !missing.is_empty() {
                let missing: Vec<String> = missing.iter().map(Locale::to_string).collect();
                println!("    missing: {}", missing.join(", "));
            }
        }
    }

    Ok(true)
}

fn cmd_create_config(output: &Path) -> fish_core::Result<bool> {
    let config = PipelineConfig {
        locales: Some(
            Locale::ALL
                .iter()
                .map(|l| l.code().unwrap_or("en").to_string())
                .collect(),
        ),
        ..Default::default()
    };

    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to configure your run, then run:");
    println!("  prepare-data run --config {}", output.display());

    Ok(true)
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;
use tracing::info;

use primerqc::model::{Thresholds, DEFAULT_MAX_TM_DIFFERENCE};
use primerqc::thermo::DEFAULT_ANNEALING_OFFSET;

/// primerqc CLI
#[derive(Parser)]
#[command(name = "primerqc")]
#[command(version)]
#[command(about = "Check PCR primer pairs: Tm, Ta, GC, hairpins, dimers, target binding", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct TargetArgs {
    /// Target sequence the primers should bind to (exact match)
    #[arg(long, conflicts_with = "target_file")]
    target: Option<String>,
    /// FASTA/FASTQ file whose first record is the target
    #[arg(long)]
    target_file: Option<PathBuf>,
}

impl TargetArgs {
    fn resolve(&self) -> anyhow::Result<Option<String>> {
        match (&self.target, &self.target_file) {
            (Some(t), _) => Ok(Some(t.clone())),
            (None, Some(p)) => Ok(Some(primerqc::seqio::read_target(p)?)),
            (None, None) => Ok(None),
        }
    }
}

#[derive(Args, Clone, Copy)]
struct ThresholdArgs {
    /// Largest tolerated Tm difference between the primers (°C)
    #[arg(long, default_value_t = DEFAULT_MAX_TM_DIFFERENCE)]
    max_tm_diff: i32,
    /// Subtracted from the lower Tm to get the annealing temperature (°C)
    #[arg(long, default_value_t = DEFAULT_ANNEALING_OFFSET, allow_hyphen_values = true)]
    ta_offset: i32,
}

impl From<ThresholdArgs> for Thresholds {
    fn from(a: ThresholdArgs) -> Self {
        Thresholds { max_tm_difference: a.max_tm_diff, annealing_offset: a.ta_offset }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one primer pair given as "FORWARD,REVERSE"
    Evaluate {
        /// Forward and reverse primer separated by a comma
        primers: String,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        thresholds: ThresholdArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every pair in a CSV/TSV sheet (name,forward,reverse[,target])
    Batch {
        /// Input sheet
        sheet: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        thresholds: ThresholdArgs,
        /// Emit CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    primerqc::logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Evaluate { primers, target, thresholds, json } => {
            cmd_evaluate(&primers, &target, thresholds.into(), json)
        }
        Commands::Batch { sheet, target, thresholds, csv } => cmd_batch(&sheet, &target, thresholds.into(), csv),
    }
}

fn cmd_evaluate(primers: &str, target: &TargetArgs, thresholds: Thresholds, json: bool) -> anyhow::Result<()> {
    let target = target.resolve()?;
    let report = primerqc::evaluate_primer_pair_with(primers, target.as_deref(), &thresholds)?;
    info!(usable = report.is_usable(), "evaluated primer pair");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn cmd_batch(sheet: &std::path::Path, target: &TargetArgs, thresholds: Thresholds, csv: bool) -> anyhow::Result<()> {
    let target = target.resolve()?;
    let rows = primerqc::batch::load_pairs(sheet).with_context(|| format!("cannot read {}", sheet.display()))?;
    let outcomes = primerqc::batch::evaluate_rows(&rows, target.as_deref(), &thresholds);
    let usable = outcomes.iter().filter(|o| o.result.as_ref().map(|r| r.is_usable()).unwrap_or(false)).count();
    info!(pairs = outcomes.len(), usable, "batch evaluated");

    let mut df = primerqc::batch::summary_frame(&outcomes)?;
    if csv {
        let w = CsvWriter::new(std::io::stdout());
        w.include_header(true).finish(&mut df)?;
    } else {
        // Show every row and full explanations.
        std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
        std::env::set_var("POLARS_FMT_MAX_COLS", "100");
        std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
        std::env::set_var("POLARS_FMT_STR_LEN", "1000");
        println!("{df}");
    }
    Ok(())
}

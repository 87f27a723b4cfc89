//! CLI entrypoint for `namelistgen`.
//!
//! Reads one full name per line from the input file(s), expands every name
//! into the supported username conventions, and writes one file per
//! convention into the output directory. Optionally writes a combined CSV and
//! prints a short summary.
use std::fs;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::{LevelFilter, error, info};
use namelistgen::{
    engine::{Generator, domain_suffix},
    export::{save_all_rules_txt, save_candidates_csv},
    io::DEFAULT_MMAP_THRESHOLD_BYTES,
    mutator::Rule,
    report::render_summary,
};

#[derive(Parser, Debug)]
#[command(
    name = "namelistgen",
    version,
    about = "Generate Active Directory username lists from a file of full names"
)]
struct Args {
    /// Company name, used as the prefix of every output file
    #[arg(short = 'c', long = "company", required = true)]
    company: String,

    /// File(s) containing one full name per line
    #[arg(short = 'f', long = "file", required = true)]
    files: Vec<PathBuf>,

    /// Append a domain to each username (-n uber.com gives jschmoe@uber.com)
    #[arg(short = 'n', long = "domain", default_value = "")]
    domain: String,

    /// Output directory
    #[arg(short = 'o', long = "output", default_value = "namelistgenerator-output")]
    output: PathBuf,

    /// Only generate these conventions (repeatable). Defaults to all.
    #[arg(short = 'r', long = "rule", value_enum)]
    rules: Vec<Rule>,

    /// Also write every candidate to a timestamped CSV in the output directory
    #[arg(long = "csv")]
    csv: bool,

    /// Generate candidates on the rayon thread pool
    #[arg(long = "parallel")]
    parallel: bool,

    /// Override mmap threshold in bytes. If zero, disable mmap.
    #[arg(long = "mmap-threshold", default_value_t = DEFAULT_MMAP_THRESHOLD_BYTES)]
    mmap_threshold: u64,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress the summary and completion message
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn verify_inputs(args: &Args) -> Result<()> {
    if args.company.trim().is_empty() {
        bail!("company name must not be empty (-c/--company)");
    }
    for p in &args.files {
        if !p.is_file() {
            bail!("names file not found: {}", p.display());
        }
    }
    Ok(())
}

/// Requested rules in the order given, without repeats; all rules if none.
fn selected_rules(requested: &[Rule]) -> Vec<Rule> {
    if requested.is_empty() {
        return Rule::ALL.to_vec();
    }
    let mut rules = Vec::with_capacity(requested.len());
    for &r in requested {
        if !rules.contains(&r) {
            rules.push(r);
        }
    }
    rules
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    let threshold = if args.mmap_threshold == 0 {
        u64::MAX
    } else {
        args.mmap_threshold
    };
    let mut generator = Generator::new();
    if let Err(e) = generator.load_from_file_paths_with_threshold(&args.files, threshold) {
        error!("failed to load names: {:#}", e);
        std::process::exit(3);
    }
    info!(
        "{} names parsed, {} skipped",
        generator.names.len(),
        generator.skipped
    );

    let rules = selected_rules(&args.rules);
    let suffix = domain_suffix(&args.domain);

    if let Err(e) = fs::create_dir_all(&args.output) {
        error!(
            "failed to create output directory {}: {}",
            args.output.display(),
            e
        );
        std::process::exit(4);
    }

    match save_all_rules_txt(
        &generator,
        &rules,
        &args.company,
        &suffix,
        &args.output,
        args.parallel,
    ) {
        Ok(paths) => info!("wrote {} username files", paths.len()),
        Err(e) => {
            error!("failed to write username files: {:#}", e);
            std::process::exit(5);
        }
    }

    if args.csv {
        let ts = chrono::Local::now().format("%Y.%m.%d_%H.%M.%S");
        let csv = args
            .output
            .join(format!("{}_usernames_{}.csv", args.company, ts));
        if let Err(e) = save_candidates_csv(&generator, &rules, &suffix, &csv) {
            error!("failed to write {}: {:#}", csv.display(), e);
            std::process::exit(5);
        }
    }

    if !args.quiet {
        println!("{}", render_summary(&generator, &rules, &suffix));
        println!(
            "{} Check out your lovely new files in {}",
            "[*] All done!".bold().green(),
            args.output.display()
        );
    }
}

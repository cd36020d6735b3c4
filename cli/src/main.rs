//! folio CLI - page renumbering tool for text transcripts

mod files;
mod run;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use folio::{to_json, AlwaysContinue, Confirm, JsonFormat};

use files::OutputNaming;
use run::{CliResult, FileOutcome, RunSettings};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Re-number digit numbers located at the end of each row in a text file", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Text file, or directory of .txt files
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Directory where output files are saved (default: next to the input)
    #[arg(short = 'd', long = "dirout", value_name = "DIR")]
    dir_out: Option<PathBuf>,

    /// Prefix for the output file stem
    #[arg(short = 'p', long = "pre", default_value = "")]
    prefix: String,

    /// Suffix for the output file stem
    #[arg(short = 's', long = "suf", default_value = "_renumbered")]
    suffix: String,

    /// String joining prefix, stem and suffix (e.g. pre + sample + suf with
    /// "_" gives pre_sample_suf.txt)
    #[arg(short = 'j', long = "join", default_value = "")]
    join: String,

    /// Overwrite the input file; --dirout, --pre, --suf and --join are ignored
    #[arg(short = 'o', long)]
    overwrite: bool,

    /// Point out rows with no page number at the end of the process
    #[arg(short = 'm', long)]
    missing: bool,

    /// Add a newline at the end of the text if there is none
    #[arg(short = 'b', long)]
    blank: bool,

    /// Continue without asking when pages seem badly numbered
    #[arg(short = 'y', long)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report missing and out-of-order pages without writing anything
    Check {
        /// Text file, or directory of .txt files
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Check { path, json }) => cmd_check(path, *json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(true)
        }
        None => match &cli.path {
            Some(path) => cmd_renumber(path, &cli),
            None => {
                println!("{}", "Usage: folio <PATH> [OPTIONS]".yellow());
                println!("       folio --help for more information");
                Ok(true)
            }
        },
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Ask on stdin, defaulting to no.
fn prompt_stdin(details: &str, prompt: &str) -> bool {
    println!("{}", details.yellow());
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Renumber every input; returns whether all files went through without error.
fn cmd_renumber(path: &Path, cli: &Cli) -> CliResult<bool> {
    let inputs = run::resolve_inputs(path)?;
    let settings = RunSettings {
        naming: OutputNaming {
            dir: cli.dir_out.clone(),
            prefix: cli.prefix.clone(),
            suffix: cli.suffix.clone(),
            join: cli.join.clone(),
            overwrite: cli.overwrite,
        },
        trailing_newline: cli.blank,
    };

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    if inputs.len() < 2 {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut always = AlwaysContinue;
    let mut prompt = |details: &str, question: &str| pb.suspend(|| prompt_stdin(details, question));
    let confirm: &mut dyn Confirm = if cli.yes { &mut always } else { &mut prompt };

    let mut failures = 0;
    for input in &inputs {
        pb.set_message(input.display().to_string());
        let outcome = run::renumber_file(input, &settings, &mut *confirm);
        pb.suspend(|| report_outcome(input, outcome, cli.missing, &mut failures));
        pb.inc(1);
    }
    pb.finish_and_clear();

    if inputs.len() > 1 {
        println!(
            "\n{} {} files, {} failed",
            "Done!".green().bold(),
            inputs.len(),
            failures
        );
    }
    Ok(failures == 0)
}

fn report_outcome(
    input: &Path,
    outcome: CliResult<FileOutcome>,
    show_missing: bool,
    failures: &mut usize,
) {
    match outcome {
        Ok(FileOutcome::Written { path, missing }) => {
            println!("{} {}", "Saved to".green(), path.display());
            if show_missing && !missing.is_empty() {
                for line in &missing {
                    println!("{}", line);
                }
            }
        }
        Ok(FileOutcome::Cancelled) => {
            println!("{} {}", "No changes made:".yellow(), input.display());
        }
        Err(e) => {
            *failures += 1;
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
    }
}

fn cmd_check(path: &Path, json: bool) -> CliResult<bool> {
    let inputs = run::resolve_inputs(path)?;
    let summaries = run::analyze_files(&inputs)?;

    if json {
        println!("{}", to_json(&summaries, JsonFormat::Pretty)?);
        return Ok(true);
    }

    for (file, summary) in &summaries {
        println!("{}", file.cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Lines".bold(), summary.line_count);
        println!("{}: {}", "Arabic pages".bold(), summary.arabic_count);
        println!("{}: {}", "Roman pages".bold(), summary.roman_count);
        println!("{}: {}", "Directives".bold(), summary.directive_count);
        println!("{}: {}", "Missing".bold(), summary.missing.len());

        if summary.needs_confirmation() {
            println!("{}", "Out of order:".yellow().bold());
            for line in &summary.order_disturbing {
                println!("{:03} | {}", line.line_number, line.text);
            }
        }
        println!();
    }

    Ok(true)
}

fn cmd_version() {
    println!("{} {}", "folio".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page renumbering tool for text transcripts");
    println!();
    println!("License: MIT");
}

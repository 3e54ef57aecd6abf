//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{title_preview, SourceManifest, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use crate::error::{Result, SplitterError};
use crate::splitter::{
    split_batch_with, split_source, ReviewOutcome, SourceEvent, SourceReport, SourceStatus,
};

const EXAMPLES: &str = "\
Examples:
  review-splitter Reviews_1-30.docx
  review-splitter Reviews_1-30.docx my-output/
  review-splitter --all
  review-splitter --all custom-output/
  review-splitter --all --manifest sources.yaml
  review-splitter --quiet Reviews_1-30.docx";

/// Split documents containing many reviews into one document per review.
#[derive(Parser, Debug)]
#[command(name = "review-splitter")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Input document to split (.docx or .txt); with --all, the output directory
    pub input: Option<PathBuf>,

    /// Output directory (default: split-reviews)
    pub output_dir: Option<PathBuf>,

    /// Process every source in the source list
    #[arg(long)]
    pub all: bool,

    /// Directory containing the source documents (default: mike-paper-reviews-500/docx)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// YAML file listing the sources for --all
    #[arg(long, requires = "all")]
    pub manifest: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run the CLI with already-parsed arguments.
pub fn run_with(cli: Cli) -> Result<()> {
    let console = Console { quiet: cli.quiet };

    if cli.all {
        // With --all the only positional is the output directory
        let output_dir = cli
            .output_dir
            .or(cli.input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let manifest = match cli.manifest.as_deref() {
            Some(path) => SourceManifest::load(path)?,
            None => SourceManifest::default(),
        };
        let source_dir = cli
            .source_dir
            .or(manifest.source_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));

        let total = all_command(&console, &source_dir, &manifest.sources, &output_dir);
        console.line(format!("\nProcessing complete. {total} reviews extracted."));
        return Ok(());
    }

    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        println!();
        return Err(SplitterError::MissingArguments);
    };
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let count = split_command(&console, &input, &output_dir);
    console.line(format!("\nProcessing complete. {count} reviews extracted."));
    Ok(())
}

/// Execute a single-source split and return the number of reviews written.
fn split_command(console: &Console, input: &Path, output_dir: &Path) -> usize {
    let name = input.file_name().map_or_else(
        || input.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    console.line(section_header(&format!("Splitting: {name}")));

    let spinner = console.spinner(format!("Reading {name}..."));
    let result = split_source(input, output_dir);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match result {
        Ok(report) => {
            console.report(&report);
            report.written_count()
        }
        Err(e) => {
            console.line(format!("{} {e}", style("Error:").red().bold()));
            0
        }
    }
}

/// Execute a batch split over the source list.
fn all_command(
    console: &Console,
    source_dir: &Path,
    sources: &[String],
    output_dir: &Path,
) -> usize {
    console.line(format!("{}", style("Review Splitter - Processing All Files").bold()));
    console.line("=".repeat(50));

    let mut spinner: Option<ProgressBar> = None;
    let result = split_batch_with(source_dir, sources, output_dir, |event| match event {
        SourceEvent::Started(name) => {
            console.line(section_header(&format!("Splitting: {name}")));
            spinner = console.spinner(format!("Reading {name}..."));
        }
        SourceEvent::Finished(name, status) => {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
            match status {
                SourceStatus::Split(report) => console.report(report),
                SourceStatus::Skipped => console.line(format!(
                    "{} {name} not found, skipping...",
                    style("Warning:").yellow().bold()
                )),
                SourceStatus::Failed(message) => {
                    console.line(format!("{} {message}", style("Error:").red().bold()));
                }
            }
        }
    });

    let batch = match result {
        Ok(batch) => batch,
        Err(e) => {
            console.line(format!(
                "{} source directory '{}' not available: {e}",
                style("Error:").red().bold(),
                source_dir.display()
            ));
            return 0;
        }
    };

    for path in &batch.overwritten {
        console.line(format!(
            "{} {} was written by more than one source",
            style("Warning:").yellow().bold(),
            path.display()
        ));
    }

    let total = batch.total_written();
    console.line(format!("\n{}", style("ALL FILES PROCESSED!").green().bold()));
    console.line(format!("Total reviews extracted: {}", style(total).green()));
    total
}

/// Blank line plus `=== title ===`.
fn section_header(title: &str) -> String {
    format!(
        "\n{} {} {}",
        style("===").dim(),
        style(title).bold(),
        style("===").dim()
    )
}

/// Progress output that respects `--quiet`.
struct Console {
    quiet: bool,
}

impl Console {
    fn line(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    fn spinner(&self, message: String) -> Option<ProgressBar> {
        if self.quiet {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message(message);
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }

    fn report(&self, report: &SourceReport) {
        self.line(format!("Found {} reviews to extract", report.found()));
        if report.entries.is_empty() {
            self.line(format!("{}", style("No reviews found!").yellow()));
            return;
        }

        for entry in &report.entries {
            self.line(format!(
                "Extracting Review {}: {}",
                style(&entry.label).cyan(),
                title_preview(&entry.title)
            ));
            match &entry.outcome {
                ReviewOutcome::Written(path) => {
                    let file = path
                        .file_name()
                        .map(|n| n.to_string_lossy())
                        .unwrap_or_default();
                    self.line(format!("  {} {file}", style("Saved:").green().bold()));
                    if entry.fallback_styles > 0 {
                        self.line(format!(
                            "  {} {} paragraph(s) fell back to the default style",
                            style("Note:").dim(),
                            entry.fallback_styles
                        ));
                    }
                }
                ReviewOutcome::Failed(message) => {
                    self.line(format!("  {} {message}", style("Failed:").red().bold()));
                }
            }
        }

        self.line(section_header("Splitting Complete"));
        self.line(format!(
            "Successfully extracted: {}/{} reviews",
            style(report.written_count()).green(),
            report.found()
        ));
    }
}

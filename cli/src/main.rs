//! unresume CLI - PDF resume field extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use unresume::{
    DocumentSource, FieldExtractor, JsonFormat, PageSelection, ParseOptions, PdfSource,
    ResumeParser,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract structured fields from PDF resumes", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a resume
    Parse {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputKind,

        /// Page range (e.g., "1-2", "1,3")
        #[arg(long)]
        pages: Option<String>,

        /// Collect text and spans one after the other
        #[arg(long)]
        sequential: bool,

        /// Skip unreadable pages instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Show the sections found by layout segmentation
    Sections {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the linear text of a resume
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-2", "1,3")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Extract fields from many resumes, one JSON file each
    Batch {
        /// Input PDF files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    /// JSON with "Not found" placeholders
    Json,
    /// Human-readable report
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
            format,
            pages,
            sequential,
            lenient,
        }) => {
            let args = ParseArgs {
                compact,
                format,
                pages,
                sequential,
                lenient,
            };
            cmd_parse(&input, output.as_deref(), &args)
        }
        Some(Commands::Sections { input, json }) => cmd_sections(&input, json),
        Some(Commands::Text { input, pages }) => cmd_text(&input, pages.as_deref()),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, None, &ParseArgs::default())
            } else {
                println!("{}", "Usage: unresume <FILE>".yellow());
                println!("       unresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

struct ParseArgs {
    compact: bool,
    format: OutputKind,
    pages: Option<String>,
    sequential: bool,
    lenient: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            compact: false,
            format: OutputKind::Json,
            pages: None,
            sequential: false,
            lenient: false,
        }
    }
}

impl ParseArgs {
    fn options(&self) -> Result<ParseOptions, unresume::Error> {
        let mut options = ParseOptions::new()
            .with_pages(page_selection(self.pages.as_deref())?)
            .with_parallel(!self.sequential);
        if self.lenient {
            options = options.lenient();
        }
        Ok(options)
    }
}

fn page_selection(pages: Option<&str>) -> Result<PageSelection, unresume::Error> {
    match pages {
        Some(p) => PageSelection::parse(p),
        None => Ok(PageSelection::All),
    }
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    args: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let resume = unresume::parse_file_with_options(input, args.options()?)?;

    let rendered = match args.format {
        OutputKind::Json if args.compact => resume.to_json(JsonFormat::Compact)?,
        OutputKind::Json => resume.to_json(JsonFormat::Pretty)?,
        OutputKind::Text => resume.to_text(),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_sections(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let resume = ResumeParser::open(input)?.parse()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resume.sections)?);
        return Ok(());
    }

    if resume.sections.is_empty() {
        println!("{}", "No sections found".yellow());
        return Ok(());
    }

    for section in &resume.sections {
        println!(
            "{} {}",
            section.label.cyan().bold(),
            format!("({}pt)", section.heading_size).dimmed()
        );
        println!("{}", "─".repeat(40).dimmed());
        for span in section.body() {
            println!(
                "  {} {}",
                span.text,
                format!("[{}pt {}]", span.font_size, span.font_name).dimmed()
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_text(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().with_pages(page_selection(pages)?);
    let source = PdfSource::open_with_options(input, options)?;
    println!("{}", source.linear_text()?);
    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let extractor = FieldExtractor::new();
    let results: Vec<(&PathBuf, Result<PathBuf, String>)> = inputs
        .par_iter()
        .map(|input| {
            let outcome = parse_one(&extractor, input, &output_dir).map_err(|e| e.to_string());
            pb.inc(1);
            (input, outcome)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!();
    for (input, outcome) in &results {
        match outcome {
            Ok(path) => println!("{} {}", "Saved".green(), path.display()),
            Err(e) => {
                failed += 1;
                println!("{} {}: {}", "Failed".red(), input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} parsed, {} failed",
        "Done!".green().bold(),
        results.len() - failed,
        failed
    );

    Ok(())
}

fn parse_one(
    extractor: &FieldExtractor,
    input: &Path,
    output_dir: &Path,
) -> Result<PathBuf, unresume::Error> {
    let resume = ResumeParser::open(input)?.parse_with(extractor)?;
    let json = resume.to_json(JsonFormat::Pretty)?;

    let path = output_path_for(input, output_dir);
    fs::write(&path, json)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// `<output_dir>/<stem>.json` for an input path.
fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    output_dir.join(format!("{}.json", stem))
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF resume field extraction tool");
    println!();
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY").dimmed());
    println!("License: MIT");
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use scribe_markdown::{RenderOptions, check_syntax, convert, html_document};

#[derive(Parser)]
#[command(version, about = "Scribe - Markdown renderer and syntax checker", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown file to a standalone HTML document
    Render {
        /// Path to the Markdown file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Document title (defaults to the input file stem)
        #[arg(long)]
        title: Option<String>,

        /// Disable tables, strikethrough, and task lists
        #[arg(long)]
        no_gfm: bool,

        /// Keep single newlines as soft breaks
        #[arg(long)]
        no_breaks: bool,
    },
    /// Check a Markdown file for common syntax problems
    Check {
        /// Path to the Markdown file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_miette();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            out,
            title,
            no_gfm,
            no_breaks,
        } => render(input, out, title, no_gfm, no_breaks),
        Commands::Check { input } => check(input),
    }
}

fn render(
    input: PathBuf,
    out: Option<PathBuf>,
    title: Option<String>,
    no_gfm: bool,
    no_breaks: bool,
) -> Result<()> {
    let markdown = read_input(&input)?;
    tracing::debug!("read {} bytes from {}", markdown.len(), input.display());

    let options = RenderOptions {
        gfm: !no_gfm,
        hard_line_breaks: !no_breaks,
    };
    let result = convert(&markdown, None, &options);

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Markdown Document".to_string())
    });
    let document = html_document(&result.html, &title);

    match out {
        Some(path) => {
            std::fs::write(&path, document).into_diagnostic()?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{document}"),
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let markdown = read_input(&input)?;

    let warnings = check_syntax(&markdown);
    if warnings.is_empty() {
        println!("{}: no problems found", input.display());
        return Ok(());
    }

    for warning in &warnings {
        println!("{}: {warning}", input.display());
    }
    Err(miette::miette!(
        "{} problem(s) found in {}",
        warnings.len(),
        input.display()
    ))
}

fn read_input(input: &PathBuf) -> Result<String> {
    if !input.exists() {
        return Err(miette::miette!("Input file not found: {}", input.display()));
    }
    std::fs::read_to_string(input).into_diagnostic()
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}

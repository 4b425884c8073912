//! Trellis - run a layout document and print the computed frames.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use trellis::document::{ElementReport, LayoutMode};
use trellis::{LayoutDocument, LayoutReport, Rect};

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    about = "Lay out a stack or box document and print the resulting frames"
)]
struct Args {
    /// Path to the JSON layout document
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Single-line JSON (only with --format json)
    #[arg(long)]
    compact: bool,

    /// Offset frames by the parent frame's origin
    #[arg(long)]
    absolute: bool,

    /// Log layout passes (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let document = LayoutDocument::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let mut report = document.run().context("layout failed")?;
    if args.absolute {
        report = report.to_absolute();
    }

    tracing::info!(
        mode = ?report.mode,
        elements = report.elements.len(),
        "layout complete"
    );

    match args.format {
        Format::Json => {
            let json = if args.compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{json}");
        }
        Format::Text => print!("{}", render_text(&report)),
    }

    Ok(())
}

fn render_text(report: &LayoutReport) -> String {
    let mode = match report.mode {
        LayoutMode::Stack => "stack",
        LayoutMode::Box => "box",
    };
    let mut out = format!("{mode} {}\n", format_rect(report.frame));
    if let Some(size) = report.fitting_size {
        out.push_str(&format!("fitting {} x {}\n", size.width, size.height));
    }
    for element in &report.elements {
        out.push_str(&render_element(element));
        out.push('\n');
    }
    for (i, filler) in report.fillers.iter().enumerate() {
        out.push_str(&format!("  filler#{i:<3} {}\n", format_rect(*filler)));
    }
    out
}

fn render_element(element: &ElementReport) -> String {
    let label = match &element.name {
        Some(name) => name.clone(),
        None => format!("#{}", element.index),
    };
    let kind = serde_json::to_value(element.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    if element.hidden {
        format!("  {label:<10} {kind:<12} hidden")
    } else {
        format!("  {label:<10} {kind:<12} {}", format_rect(element.frame))
    }
}

fn format_rect(rect: Rect) -> String {
    format!("({}, {}) {} x {}", rect.x, rect.y, rect.width, rect.height)
}

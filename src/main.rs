// Chunk: docs/chunks/debug_driver - Load, colorize and print a source file
//!
//! quill: prints a source file line by line in syntax colors.
//!
//! # Usage
//!
//! ```bash
//! # Colorize a file
//! quill src/main.cpp
//!
//! # Dump each line's color segments
//! quill src/main.cpp --segments
//!
//! # Time 100 highlighting passes
//! RUST_LOG=quill=info quill src/main.cpp --passes 100 --plain
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use quill::{ansi, describe_segments, grammar_for_path, highlight_buffer, QuillError};
use quill_buffer::TextBuffer;
use quill_syntax::{CstParser, SyntaxTheme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Colorize a C++ source file line by line.
#[derive(Parser)]
#[command(name = "quill", about = "Print a source file in syntax colors")]
struct Args {
    /// File to load
    path: PathBuf,

    /// Print each line's color segments instead of colored text
    #[arg(long)]
    segments: bool,

    /// Number of highlighting passes to time
    #[arg(short, long, default_value = "1")]
    passes: u32,

    /// Print text without ANSI escape sequences
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("quill: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), QuillError> {
    let buffer = TextBuffer::open(&args.path)?;
    let grammar = grammar_for_path(&args.path)?;
    let mut parser = CstParser::new(&grammar)?;

    let passes = args.passes.max(1);
    let mut total = Duration::ZERO;
    let mut highlighted = highlight_buffer(&buffer, &grammar, &mut parser)?;
    total += highlighted.elapsed;
    for _ in 1..passes {
        highlighted = highlight_buffer(&buffer, &grammar, &mut parser)?;
        total += highlighted.elapsed;
    }

    tracing::info!(
        lines = highlighted.lines.len(),
        passes,
        average = ?(total / passes),
        "highlighted {}",
        args.path.display()
    );
    for (kind, location) in &highlighted.missing {
        tracing::warn!(%location, "parser inserted missing `{kind}`");
    }

    let theme = SyntaxTheme::catppuccin_mocha();
    for line in &highlighted.lines {
        if args.segments {
            println!("{}", describe_segments(line));
        } else if args.plain {
            println!("{line}");
        } else {
            println!("{}", ansi::render_line(&theme.styled_line(line)));
        }
    }
    Ok(())
}

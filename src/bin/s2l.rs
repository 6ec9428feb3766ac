//! s2l - shorthand math notation to LaTeX

use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};

use shortex::utils::logging::init_logging;
use shortex::{
    convert_with_trace, format_syntax_reference, ConversionReport, ShortexError, ShortexResult,
};

#[derive(Parser)]
#[command(name = "s2l")]
#[command(version)]
#[command(about = "Shortex - shorthand math notation to LaTeX", long_about = None)]
struct Cli {
    /// Shorthand to convert, joined with spaces (reads from stdin if not provided)
    input: Vec<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Treat all of stdin as one expression instead of one per line
    #[arg(long)]
    whole: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Print the passes that fired for each input to stderr
    #[arg(long)]
    explain: bool,

    /// Print the notation reference and exit
    #[arg(long)]
    syntax: bool,

    /// Log at debug level unless RUST_LOG or SHORTEX_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One wrapped LaTeX string per input
    Plain,
    /// JSON array of conversion reports
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "warn" });

    if let Err(err) = run(cli) {
        eprintln!("✗ {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ShortexResult<()> {
    if cli.syntax {
        print!("{}", format_syntax_reference());
        return Ok(());
    }

    let inputs = if cli.input.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        split_inputs(&buffer, cli.whole)
    } else {
        vec![cli.input.join(" ")]
    };
    tracing::debug!(count = inputs.len(), "read shorthand inputs");

    let reports: Vec<ConversionReport> = inputs.iter().map(|i| convert_with_trace(i)).collect();

    if cli.explain {
        for report in &reports {
            eprintln!("{}", report.render_trace());
        }
    }

    let rendered = match cli.format {
        Format::Plain => reports
            .iter()
            .map(|r| r.output.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        Format::Json => serde_json::to_string_pretty(&reports)?,
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path).map_err(|e| ShortexError::io_at(e, &path))?;
            writeln!(file, "{}", rendered).map_err(|e| ShortexError::io_at(e, &path))?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

/// Split stdin into expressions: one per line, or the whole buffer.
fn split_inputs(buffer: &str, whole: bool) -> Vec<String> {
    if whole {
        vec![buffer
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
            .to_string()]
    } else {
        buffer.lines().map(str::to_string).collect()
    }
}

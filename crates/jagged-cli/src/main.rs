//! Jagged CLI - render delimited files as box-drawn tables

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use jagged::prelude::*;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jagged")]
#[command(author, version, about = "Render ragged delimited files as box-drawn tables")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a delimited file as a box-drawn table
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the shape of a delimited file
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Re-write a delimited file with a different delimiter
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Output file
        output: PathBuf,

        /// Output field delimiter
        #[arg(long, default_value = ",")]
        to: char,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Trim whitespace around fields
    #[arg(long)]
    trim: bool,

    /// Treat empty fields as absent cells
    #[arg(long)]
    empty_as_absent: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match cli.command {
        Commands::Render { input, output } => render_table(&input, output.as_deref()),
        Commands::Info { input } => show_info(&input),
        Commands::Convert { input, output, to } => convert(&input, &output, to),
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(delimiter as u8)
}

fn load_grid(args: &InputArgs) -> Result<Grid<String>> {
    let options = CsvReadOptions {
        delimiter: delimiter_byte(args.delimiter)?,
        trim: args.trim,
        empty_as_absent: args.empty_as_absent,
        ..Default::default()
    };

    let grid = if args.input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        CsvReader::read_str(&text, &options).context("Failed to parse stdin")?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open '{}'", args.input.display()))?;
        CsvReader::read(file, &options)
            .with_context(|| format!("Failed to parse '{}'", args.input.display()))?
    };

    if grid.is_empty() {
        warn!("Input appears to be empty");
    }
    Ok(grid)
}

fn render_table(input: &InputArgs, output: Option<&Path>) -> Result<()> {
    let grid = load_grid(input)?;
    let mut text = render(&grid);
    text.push('\n');

    if let Some(output_path) = output {
        std::fs::write(output_path, &text)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        info!(
            "Wrote {} rows to '{}'",
            grid.row_count(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn show_info(input: &InputArgs) -> Result<()> {
    let grid = load_grid(input)?;

    println!("File: {}", input.input.display());
    println!("Rows: {}", grid.row_count());
    println!("Max row length: {}", grid.max_row_length());
    println!("Max column height: {}", grid.max_column_height());
    println!("Rectangular: {}", if grid.is_rectangular() { "yes" } else { "no" });

    for (index, row) in grid.iter_rows().enumerate() {
        let absent = row.iter().filter(|cell| cell.is_none()).count();
        println!("  Row {index}: {} cells ({absent} absent)", row.len());
    }

    Ok(())
}

fn convert(input: &InputArgs, output: &Path, to: char) -> Result<()> {
    let grid = load_grid(input)?;
    let options = CsvWriteOptions {
        delimiter: delimiter_byte(to)?,
        ..Default::default()
    };

    CsvWriter::write_file(&grid, output, &options)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    info!("Wrote {} rows to '{}'", grid.row_count(), output.display());

    Ok(())
}

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
use cef::{sort_by_row_attribute, sort_numerical, CefError, CefFile, DecodeOptions, FormatKind};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "CEF CLI - Inspect, convert and sort annotated matrix files (.cef / .ceb)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show dimensions, headers and attribute names
    Info {
        /// Input file in either layout
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a file in the other layout
    Convert {
        input: PathBuf,
        output: PathBuf,

        /// Target layout
        #[arg(long, value_enum, default_value = "binary")]
        to: Layout,

        /// Exchange rows and columns while loading
        #[arg(long)]
        transpose: bool,
    },
    /// Reorder rows by a row attribute or a matrix column (`#N`)
    Sort {
        input: PathBuf,
        output: PathBuf,

        /// Row attribute name, or `#N` for the N-th matrix column
        #[arg(long)]
        by: String,

        /// Sort in descending order
        #[arg(long)]
        reverse: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Binary,
    Text,
}

#[cfg(feature = "cli")]
impl From<Layout> for FormatKind {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Binary => FormatKind::Binary,
            Layout::Text => FormatKind::Text,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(serde::Serialize)]
struct Summary {
    format: String,
    major_version: i32,
    minor_version: i32,
    rows: usize,
    columns: usize,
    transposed: bool,
    headers: Vec<(String, String)>,
    row_attributes: Vec<String>,
    column_attributes: Vec<String>,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("cef=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match cli.command {
        Commands::Info { input, json } => handle_info(&input, json)?,
        Commands::Convert {
            input,
            output,
            to,
            transpose,
        } => handle_convert(&input, &output, to.into(), transpose)?,
        Commands::Sort {
            input,
            output,
            by,
            reverse,
        } => handle_sort(&input, &output, &by, reverse)?,
    }

    tracing::info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example cef_cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn handle_info(input: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let file = CefFile::open(input)?;
    let doc = file.read(DecodeOptions::default().with_skip_matrix(true))?;

    let summary = Summary {
        format: file.format.to_string(),
        major_version: doc.major_version,
        minor_version: doc.minor_version,
        rows: doc.num_rows,
        columns: doc.num_columns,
        transposed: doc.is_transposed(),
        headers: doc
            .headers
            .iter()
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect(),
        row_attributes: doc.row_attributes.iter().map(|a| a.name.clone()).collect(),
        column_attributes: doc
            .column_attributes
            .iter()
            .map(|a| a.name.clone())
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("File: {}", input.display());
    println!("   Format: {} v{}.{}", summary.format, summary.major_version, summary.minor_version);
    println!("   Dimensions: {} x {}", summary.rows, summary.columns);
    println!("   Transposed: {}", summary.transposed);
    println!("   Headers ({}):", summary.headers.len());
    for (name, value) in &summary.headers {
        println!("      {name} = {value}");
    }
    println!("   Row attributes: {}", summary.row_attributes.join(", "));
    println!("   Column attributes: {}", summary.column_attributes.join(", "));
    Ok(())
}

#[cfg(feature = "cli")]
fn handle_convert(
    input: &PathBuf,
    output: &PathBuf,
    to: FormatKind,
    transpose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = CefFile::open(input)?;
    let doc = file.read(DecodeOptions::default().with_transpose(transpose))?;
    CefFile::save(&doc, output, to)?;

    tracing::info!(
        from = %file.format,
        %to,
        rows = doc.num_rows,
        columns = doc.num_columns,
        "converted {} -> {}",
        input.display(),
        output.display()
    );
    Ok(())
}

#[cfg(feature = "cli")]
fn handle_sort(
    input: &PathBuf,
    output: &PathBuf,
    by: &str,
    reverse: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = CefFile::open(input)?;
    let doc = file.read(DecodeOptions::default())?;

    // Non-numeric attributes fall back to string ordering
    let sorted = match sort_numerical(&doc, by, reverse) {
        Err(CefError::NotNumeric) => {
            tracing::info!(attribute = by, "attribute is not numeric, sorting as strings");
            sort_by_row_attribute(&doc, by, reverse)?
        }
        other => other?,
    };

    CefFile::save(&sorted, output, file.format)?;
    tracing::info!(by, reverse, rows = sorted.num_rows, "sorted {}", input.display());
    Ok(())
}

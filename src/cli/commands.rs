use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use crate::cache::{DEFAULT_MAX_AGE, load_cached_rows, save_cached_rows};
use crate::filters::filter_rows;
use crate::launcher::{DEFAULT_PREVIEW_LEN, Feedback, write_preview_files};
use crate::linearizer::{build_rows, linearize_conversation};
use crate::models::SearchRow;
use crate::parsers::{parse_export_file, parse_records_file, write_records_file};
use crate::utils::{get_default_export_path, get_default_records_path};

#[derive(Parser)]
#[command(name = "chatgpt-history-search")]
#[command(version = "0.1.0")]
#[command(about = "Search exported ChatGPT conversations from a launcher quick-search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an exported conversations.json into flat linear records
    Convert {
        /// Input conversations.json (defaults to the data directory)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output linear records file (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Filter converted records and print launcher feedback JSON
    Query {
        /// Raw query string; `|` separates AND-ed subqueries, `key=value`
        /// scopes a clause to one field
        query: Option<String>,
        /// Linear records file to search
        #[arg(long)]
        records: Option<PathBuf>,
        /// Preview length in characters
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
        preview_len: usize,
        /// Bypass the row cache and recompute from the records file
        #[arg(long)]
        no_cache: bool,
    },
    /// Write quick-look markdown previews, one file per conversation
    Previews {
        /// Linear records file to render
        #[arg(long)]
        records: Option<PathBuf>,
        /// Directory receiving the generated .md files
        #[arg(short, long)]
        output_dir: PathBuf,
    },
    /// Show statistics about the converted history
    Stats {
        /// Linear records file to inspect
        #[arg(long)]
        records: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { input, output }) => {
            let input = match input {
                Some(path) => path,
                None => get_default_export_path()?,
            };
            let output = match output {
                Some(path) => path,
                None => get_default_records_path()?,
            };
            convert(&input, &output)
        }
        Some(Commands::Query { query, records, preview_len, no_cache }) => {
            let records = resolve_records_path(records)?;
            query_records(query.as_deref(), &records, preview_len, !no_cache)
        }
        Some(Commands::Previews { records, output_dir }) => {
            let records = resolve_records_path(records)?;
            let parsed = parse_records_file(&records)?;
            let count = write_preview_files(&parsed, &output_dir)?;
            println!("Wrote {} preview files to {}", count, output_dir.display());
            Ok(())
        }
        Some(Commands::Stats { records }) => {
            let records = resolve_records_path(records)?;
            show_stats(&records)
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn resolve_records_path(records: Option<PathBuf>) -> Result<PathBuf> {
    match records {
        Some(path) => Ok(path),
        None => get_default_records_path(),
    }
}

/// Linearize every conversation in the export, skipping (with a warning) the
/// ones that fail validation; a majority of failures aborts the run.
fn convert(input: &Path, output: &Path) -> Result<()> {
    let conversations = parse_export_file(input)?;
    let total = conversations.len();

    let results: Vec<_> = conversations.par_iter().map(linearize_conversation).collect();

    let mut records = Vec::with_capacity(total);
    let mut failed = 0;
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("Warning: skipping conversation: {:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 && failed * 2 > total {
        bail!("Too many conversion failures: {} of {} conversations failed", failed, total);
    }

    write_records_file(output, &records)?;
    println!(
        "Converted {} conversations to {} ({} skipped)",
        records.len(),
        output.display(),
        failed
    );
    Ok(())
}

/// Filter the row set and print launcher feedback JSON to stdout.
///
/// Empty states stay distinct on purpose: an empty data set means the user
/// has nothing converted yet, while an empty filter result means the query
/// was too narrow.
fn query_records(
    query: Option<&str>,
    records_path: &Path,
    preview_len: usize,
    use_cache: bool,
) -> Result<()> {
    let rows = load_rows(records_path, use_cache)?;

    if rows.is_empty() {
        println!("{}", Feedback::message("No results found").to_json()?);
        return Ok(());
    }

    let filtered = match query {
        Some(q) if !q.is_empty() => filter_rows(rows, q),
        _ => rows,
    };

    if filtered.is_empty() {
        println!("{}", Feedback::message("No matching results found").to_json()?);
        return Ok(());
    }

    println!("{}", Feedback::from_rows(query, &filtered, preview_len).to_json()?);
    Ok(())
}

/// Load precomputed rows, via the cache when permitted. A missing records
/// file is an empty data set, not an error.
fn load_rows(records_path: &Path, use_cache: bool) -> Result<Vec<SearchRow>> {
    if !records_path.exists() {
        return Ok(Vec::new());
    }

    if use_cache {
        if let Some(rows) = load_cached_rows(records_path, DEFAULT_MAX_AGE)? {
            return Ok(rows);
        }
    }

    let records = parse_records_file(records_path)?;
    let rows = build_rows(&records)?;

    if use_cache {
        if let Err(e) = save_cached_rows(records_path, &rows) {
            eprintln!("Warning: failed to write row cache: {:#}", e);
        }
    }

    Ok(rows)
}

fn show_stats(records_path: &Path) -> Result<()> {
    let records = parse_records_file(records_path)?;

    let total_messages: usize = records.iter().map(|r| r.linear_messages.len()).sum();
    let plugin_count = records.iter().filter(|r| r.plugin_enabled).count();

    println!("ChatGPT History Statistics");
    println!("==========================");
    println!("Total conversations: {}", records.len());
    println!("Total messages: {}", total_messages);
    println!("Plugin-enabled conversations: {}", plugin_count);

    // ISO-8601 strings sort chronologically
    if let Some(oldest) = records.iter().map(|r| r.update_time.as_str()).min() {
        println!("Oldest update: {}", oldest);
    }
    if let Some(newest) = records.iter().map(|r| r.update_time.as_str()).max() {
        println!("Newest update: {}", newest);
    }

    Ok(())
}

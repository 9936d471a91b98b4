use anyhow::Result;
use clap::{Parser, Subcommand};
use engine::corpus::{self, BuildStats};
use engine::{NoiseWords, SearchEngine};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "keyrank")]
#[command(about = "Keyword index with frequency-ranked top-5 OR search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a corpus and run a two-keyword search
    Search {
        /// Document list file, or a directory indexed in sorted order
        #[arg(long)]
        docs: PathBuf,
        /// Noise-word file (whitespace-separated); built-in list if omitted
        #[arg(long)]
        noise_words: Option<PathBuf>,
        /// Print the response as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// First keyword
        keyword1: String,
        /// Second keyword
        keyword2: String,
    },
    /// Index a corpus and print the keyword to postings mapping as JSON
    Dump {
        /// Document list file, or a directory indexed in sorted order
        #[arg(long)]
        docs: PathBuf,
        /// Noise-word file (whitespace-separated); built-in list if omitted
        #[arg(long)]
        noise_words: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SearchOutput {
    keyword1: String,
    keyword2: String,
    took_s: f64,
    results: Option<Vec<String>>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            docs,
            noise_words,
            json,
            keyword1,
            keyword2,
        } => {
            let (engine, _) = build(&docs, noise_words.as_deref())?;
            run_search(&engine, &keyword1, &keyword2, json)
        }
        Commands::Dump { docs, noise_words } => {
            let (engine, _) = build(&docs, noise_words.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
    }
}

fn build(docs: &Path, noise_words: Option<&Path>) -> Result<(SearchEngine, BuildStats)> {
    if !docs.is_dir() {
        return corpus::build_from_files(docs, noise_words);
    }
    let noise = match noise_words {
        Some(path) => corpus::load_noise_words(path)?,
        None => NoiseWords::builtin(),
    };
    let engine = SearchEngine::new(noise);
    let documents = collect_documents(docs)?;
    let stats = corpus::index_documents(&engine, &documents)?;
    tracing::info!(
        documents = stats.documents,
        keywords = stats.keywords,
        "index build complete"
    );
    Ok((engine, stats))
}

/// Every regular file under `dir`, in sorted path order.
fn collect_documents(dir: &Path) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            documents.push(entry.path().display().to_string());
        }
    }
    Ok(documents)
}

fn run_search(engine: &SearchEngine, keyword1: &str, keyword2: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let results = engine.top5(keyword1, keyword2);
    let took_s = start.elapsed().as_secs_f64();
    tracing::info!(
        keyword1,
        keyword2,
        hits = results.as_ref().map_or(0, Vec::len),
        took_s,
        "query complete"
    );

    if json {
        let output = SearchOutput {
            keyword1: keyword1.to_string(),
            keyword2: keyword2.to_string(),
            took_s,
            results,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    match results {
        Some(documents) if !documents.is_empty() => {
            for document in documents {
                println!("{document}");
            }
        }
        _ => println!("no matching documents"),
    }
    Ok(())
}

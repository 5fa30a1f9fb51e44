//! Generate a deterministic card-feed JSON fixture.
//!
//! Materializes the same batches the feed serves at runtime, for demo
//! datasets and benchmark fixtures. Re-running with the same count and
//! query reproduces the file byte-for-byte apart from `generated_at`.
//!
//! Usage:
//!     cargo run --release -p cardfeed-data-gen -- --count 10000 --query react

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use indicatif::ProgressBar;
use serde::Serialize;

use cardfeed::generator::{generate_items, server_filter};
use cardfeed::text::normalize;
use cardfeed::Item;

#[derive(Parser)]
#[command(about = "Generate a deterministic card-feed JSON fixture")]
struct Args {
    /// Number of items to generate
    #[arg(long, default_value_t = 10_000)]
    count: usize,

    /// Query seed; empty seeds the fixed fallback stream
    #[arg(long, default_value = "")]
    query: String,

    /// Apply the server-side substring filter before writing
    #[arg(long)]
    filtered: bool,

    /// Output path
    #[arg(long, default_value = "cardfeed_fixture.json")]
    output: PathBuf,
}

#[derive(Serialize)]
struct Fixture {
    generated_at: DateTime<Utc>,
    query: String,
    requested_count: usize,
    item_count: usize,
    items: Vec<Item>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("generating {} items", args.count));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut items = generate_items(args.count, &args.query);
    if args.filtered {
        items = server_filter(items, &normalize(&args.query));
    }
    spinner.finish_with_message(format!("generated {} items", items.len()));

    let total_blob_bytes: usize = items.iter().map(|item| item.blob.len()).sum();

    let fixture = Fixture {
        generated_at: Utc::now(),
        query: args.query,
        requested_count: args.count,
        item_count: items.len(),
        items,
    };

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &fixture)
        .context("serializing fixture")?;

    println!("Wrote {} items to {}", fixture.item_count, args.output.display());
    println!(
        "  Total blob size: {:.2} MB",
        total_blob_bytes as f64 / 1024.0 / 1024.0
    );
    if fixture.item_count > 0 {
        println!(
            "  Average blob size: {:.1} KB",
            (total_blob_bytes / fixture.item_count) as f64 / 1024.0
        );
    }

    Ok(())
}

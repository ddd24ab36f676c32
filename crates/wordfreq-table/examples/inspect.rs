use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordfreq_table::{FrequencyTable, ReadOptions};
use wordfreq_types::FreqColumn;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .context("usage: cargo run -p wordfreq-table --example inspect -- <table> [skip-rows]")?;
    let skip_rows = match args.next() {
        Some(raw) => raw.parse().context("skip-rows must be a non-negative integer")?,
        None => ReadOptions::default().skip_rows,
    };

    let options = ReadOptions {
        skip_rows,
        ..ReadOptions::default()
    };
    let table = FrequencyTable::load(&path, &options)
        .with_context(|| format!("loading frequency table from {}", path.display()))?;

    let plan = table.plan();
    println!("Table    : {}", path.display());
    println!("Headers  : {:?}", table.headers());
    println!("Rows     : {}", table.len());
    println!(
        "Word col : {:?} ({})",
        table.headers()[plan.word],
        plan.word_source
    );
    match plan.freq {
        FreqColumn::Column { index, source } => {
            println!("Freq col : {:?} ({})", table.headers()[index], source)
        }
        FreqColumn::PresenceOnly => println!("Freq col : none (presence only)"),
    }

    let zero = table.records().filter(|r| r.freq == 0).count();
    let blank = table.records().filter(|r| r.word.is_empty()).count();
    println!("Zero-frequency rows: {}", zero);
    println!("Blank-word rows    : {}", blank);

    for record in table.records().take(10) {
        println!("  {}\t{}", record.word, record.freq);
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordfreq_table::{DEFAULT_SKIP_ROWS, ReadOptions};

use char_index::{Config, DEFAULT_OUTPUT, DEFAULT_TOP_N, run};

#[derive(Parser, Debug)]
#[command(name = "char-index", version)]
#[command(
    about = "Build a minified character -> top-N example words JSON index from a SUBTLEX-style word-frequency table"
)]
struct Cli {
    /// Target characters, one per line (UTF-8).
    #[arg(short = 'c', long = "chars")]
    chars: PathBuf,

    /// Word-frequency table (.xlsx, .xls, .ods, .csv, .tsv or .txt).
    #[arg(short = 's', long = "subtlex")]
    subtlex: PathBuf,

    /// Output JSON file.
    #[arg(short = 'o', long = "out", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Example words kept per character.
    #[arg(
        short = 'n',
        long = "topn",
        default_value_t = DEFAULT_TOP_N,
        value_parser = parse_top_n
    )]
    topn: usize,

    /// Convert corpus words from traditional to simplified before indexing.
    #[arg(long)]
    convert: bool,

    /// Word column header, when the built-in guesses don't match.
    #[arg(long = "wordcol")]
    word_col: Option<String>,

    /// Frequency column header, when the built-in guesses don't match.
    #[arg(long = "freqcol")]
    freq_col: Option<String>,

    /// Metadata rows above the header row.
    #[arg(long, default_value_t = DEFAULT_SKIP_ROWS)]
    skip_rows: usize,

    /// Worksheet to read; defaults to the first one.
    #[arg(long)]
    sheet: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            chars_path: self.chars,
            corpus_path: self.subtlex,
            output_path: self.out,
            top_n: self.topn,
            convert_to_simplified: self.convert,
            table: ReadOptions {
                skip_rows: self.skip_rows,
                word_column: self.word_col,
                freq_column: self.freq_col,
                sheet: self.sheet,
            },
        }
    }
}

fn parse_top_n(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Cli::parse().into_config();
    info!("using chars at {}", config.chars_path.display());

    let summary = run(&config).with_context(|| {
        format!(
            "failed to build {} from {}",
            config.output_path.display(),
            config.corpus_path.display()
        )
    })?;

    info!(
        "wrote {} ({} characters, {} with no example words; those have empty lists)",
        summary.output_path.display(),
        summary.chars_indexed,
        summary.chars_without_words
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

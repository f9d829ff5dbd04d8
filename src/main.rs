use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use huffman_coder::{CoderConfig, HuffmanCoder, DEFAULT_INPUT_SYMBOL_BITS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "huffman", about = "Huffman coding of text against a seed alphabet")]
struct Cli {
    /// Sample text the alphabet and frequencies are counted from.
    #[arg(long, global = true, conflicts_with = "seed_file")]
    seed: Option<String>,
    /// Read the sample text from a file instead.
    #[arg(long, global = true)]
    seed_file: Option<PathBuf>,
    /// Fixed width charged per input symbol in the compression ratio.
    #[arg(long, global = true, default_value_t = DEFAULT_INPUT_SYMBOL_BITS)]
    symbol_bits: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every symbol's code.
    Codes,
    /// Encode text to a string of 0/1.
    Compress { text: String },
    /// Decode a string of 0/1 back to text.
    Decompress { bits: String },
    /// Print expected code length, entropy and the tree.
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = match (cli.seed, cli.seed_file) {
        (Some(seed), _) => seed,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read seed from {}", path.display()))?,
        (None, None) => bail!("one of --seed or --seed-file is required"),
    };
    let config = CoderConfig::default().with_input_symbol_bits(cli.symbol_bits);
    let mut coder =
        HuffmanCoder::from_seed_with_config(&seed, config).context("failed to build coder")?;

    match cli.command {
        Commands::Codes => {
            for (symbol, code) in coder.code_table() {
                println!("{:?}\t{}", symbol, code);
            }
        }
        Commands::Compress { text } => {
            let bits = coder.compress(&text).context("compression failed")?;
            println!("{}", bits);
            eprintln!("ratio: {:.4}", coder.compression_ratio()?);
        }
        Commands::Decompress { bits } => {
            let text = coder.decompress(&bits).context("decompression failed")?;
            println!("{}", text);
        }
        Commands::Stats => {
            println!("alphabet size: {}", coder.alphabet_size());
            println!("total weight: {}", coder.total_weight());
            println!("expected code length: {:.4}", coder.expected_encoding_length());
            println!("entropy: {:.4}", coder.entropy());
            print!("{}", coder.tree().render());
        }
    }

    Ok(())
}

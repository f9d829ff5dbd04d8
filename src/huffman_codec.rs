use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::trace;

use crate::error::{InvalidInput, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};
use crate::metrics::{self, CompressionStats};

/// Width, in bits, each input symbol is charged at when computing the
/// observed compression ratio.
pub const DEFAULT_INPUT_SYMBOL_BITS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoderConfig {
    pub input_symbol_bits: u32,
}

impl CoderConfig {
    pub fn with_input_symbol_bits(mut self, bits: u32) -> Self {
        self.input_symbol_bits = bits;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.input_symbol_bits == 0 {
            return Err(InvalidInput::ZeroSymbolWidth.into());
        }
        Ok(())
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        CoderConfig {
            input_symbol_bits: DEFAULT_INPUT_SYMBOL_BITS,
        }
    }
}

/// Huffman encoder/decoder over a fixed alphabet.
///
/// The tree, code table and frequencies are built once and never change.
/// Only the compression statistics are updated, by [`HuffmanCoder::compress_symbols`].
#[derive(Debug, Clone)]
pub struct HuffmanCoder<S = char> {
    tree: HuffmanTree<S>,
    frequencies: FrequencyTable<S>,
    encode_table: HashMap<S, String>, // symbol -> code bits
    config: CoderConfig,
    stats: CompressionStats,
}

impl<S: Ord + Hash + Clone> HuffmanCoder<S> {
    pub fn new(frequencies: FrequencyTable<S>) -> Result<Self> {
        Self::with_config(frequencies, CoderConfig::default())
    }

    pub fn with_config(frequencies: FrequencyTable<S>, config: CoderConfig) -> Result<Self> {
        config.validate()?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let encode_table = tree.generate_table();
        Ok(HuffmanCoder {
            tree,
            frequencies,
            encode_table,
            config,
            stats: CompressionStats::default(),
        })
    }

    /// Builds the alphabet and weights by counting a sample sequence.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(FrequencyTable::from_symbols(symbols)?)
    }

    pub fn from_frequencies<I>(frequencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        Self::new(FrequencyTable::from_weights(frequencies)?)
    }

    /// Concatenates the code of every input symbol.
    ///
    /// Every successful call, empty input included, counts as compressing for
    /// [`HuffmanCoder::compression_ratio`]. Fails without touching the
    /// statistics if any symbol is outside the alphabet.
    pub fn compress_symbols<I, B>(&mut self, input: I) -> Result<String>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        let mut out = String::new();
        let mut pending = CompressionStats::default();

        for (position, symbol) in input.into_iter().enumerate() {
            let code = self
                .encode_table
                .get(symbol.borrow())
                .ok_or(InvalidInput::UnknownSymbol { position })?;
            out.push_str(code);
            pending.record(self.config.input_symbol_bits, code.len());
        }

        trace!(symbols = pending.symbols, bits = out.len(), "compressed");
        self.stats.absorb(pending);
        Ok(out)
    }

    /// Walks the tree from the root, one bit at a time, emitting a symbol at
    /// every leaf and restarting at the root.
    pub fn decompress_symbols(&self, code: &str) -> Result<Vec<S>> {
        let root = &self.tree.root;
        let mut node = root;
        let mut mid_path = false;
        let mut consumed = 0;
        let mut out = Vec::new();

        for (position, digit) in code.chars().enumerate() {
            let go_right = match digit {
                '0' => false,
                '1' => true,
                _ => return Err(InvalidInput::NonBinaryDigit { digit, position }.into()),
            };
            consumed = position + 1;

            if let HuffNode::Internal { left, right, .. } = node {
                node = if go_right { &**right } else { &**left };
            }
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    out.push(symbol.clone());
                    node = root;
                    mid_path = false;
                }
                HuffNode::Internal { .. } => mid_path = true,
            }
        }

        if mid_path {
            return Err(InvalidInput::TruncatedCode { consumed }.into());
        }
        trace!(bits = consumed, symbols = out.len(), "decompressed");
        Ok(out)
    }

    pub fn code_for(&self, symbol: &S) -> Option<&str> {
        self.encode_table.get(symbol).map(String::as_str)
    }

    /// Every symbol's code, sorted by symbol.
    pub fn code_table(&self) -> BTreeMap<&S, &str> {
        self.encode_table
            .iter()
            .map(|(symbol, code)| (symbol, code.as_str()))
            .collect()
    }

    /// Frequency-weighted mean code length in bits per symbol.
    pub fn expected_encoding_length(&self) -> f64 {
        let total = self.frequencies.total() as f64;
        self.frequencies
            .iter()
            .map(|(symbol, &weight)| {
                let len = self.encode_table.get(symbol).map_or(0, String::len);
                weight as f64 / total * len as f64
            })
            .sum()
    }
}

impl<S> HuffmanCoder<S> {
    /// Output bits over fixed-width input bits, across every compress call so far.
    pub fn compression_ratio(&self) -> Result<f64> {
        self.stats.ratio()
    }

    pub fn statistics(&self) -> CompressionStats {
        self.stats
    }

    pub fn reset_statistics(&mut self) {
        self.stats = CompressionStats::default();
    }

    /// Shannon entropy of the frequency distribution; no prefix code can
    /// average fewer bits per symbol.
    pub fn entropy(&self) -> f64 {
        metrics::entropy(
            self.frequencies.iter().map(|(_, &w)| w),
            self.frequencies.total(),
        )
    }

    pub fn alphabet_size(&self) -> usize {
        self.encode_table.len()
    }

    pub fn total_weight(&self) -> u64 {
        self.frequencies.total()
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn config(&self) -> CoderConfig {
        self.config
    }
}

impl HuffmanCoder<char> {
    /// Derives the alphabet and weights from the characters of `seed`.
    pub fn from_seed(seed: &str) -> Result<Self> {
        Self::from_seed_with_config(seed, CoderConfig::default())
    }

    pub fn from_seed_with_config(seed: &str, config: CoderConfig) -> Result<Self> {
        Self::with_config(FrequencyTable::from_symbols(seed.chars())?, config)
    }

    /// Encodes `text` as a string of '0' and '1'.
    pub fn compress(&mut self, text: &str) -> Result<String> {
        self.compress_symbols(text.chars())
    }

    pub fn decompress(&self, code: &str) -> Result<String> {
        self.decompress_symbols(code)
            .map(|symbols| symbols.into_iter().collect())
    }
}

//! # huffman_coder
//!
//! Greedy Huffman coding over a finite alphabet. A coder is built once from
//! sample text or an explicit frequency table, then encodes symbol sequences
//! to strings of '0'/'1' and decodes them back.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_coder::HuffmanCoder;
//!
//! let mut coder = HuffmanCoder::from_seed("aaabbc")?;
//! let bits = coder.compress("abc")?;
//! assert_eq!(coder.decompress(&bits)?, "abc");
//!
//! // 'a' is the most frequent symbol and gets a single bit
//! assert_eq!(coder.code_for(&'a').map(str::len), Some(1));
//! assert!(coder.compression_ratio()? < 1.0);
//! # Ok::<(), huffman_coder::HuffmanError>(())
//! ```

pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod metrics;

// Internal modules - not part of public API
mod min_heap;

// Re-export main types for convenience
pub use error::{HuffmanError, InvalidInput, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{CoderConfig, HuffmanCoder, DEFAULT_INPUT_SYMBOL_BITS};
pub use hufftree::{HuffNode, HuffmanTree};
pub use metrics::CompressionStats;

use thiserror::Error;

use crate::min_heap::HeapErr;

pub type Result<T, E = HuffmanError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("compression ratio requested before anything was compressed")]
    NotYetCompressed,

    #[error("priority queue error: {0}")]
    Heap(#[from] HeapErr),
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("seed text is empty")]
    EmptySeed,

    #[error("alphabet needs at least 2 distinct symbols, found {found}")]
    TooFewSymbols { found: usize },

    #[error("frequency weight must be positive, got {weight}")]
    NonPositiveWeight { weight: i64 },

    #[error("frequency weights sum past u64::MAX")]
    WeightOverflow,

    #[error("symbol listed more than once in frequency table")]
    DuplicateSymbol,

    #[error("fixed input symbol width must be non-zero")]
    ZeroSymbolWidth,

    #[error("symbol at position {position} is not in the alphabet")]
    UnknownSymbol { position: usize },

    #[error("'{digit}' at position {position} is not a binary digit")]
    NonBinaryDigit { digit: char, position: usize },

    #[error("code ends mid-symbol after {consumed} bits")]
    TruncatedCode { consumed: usize },
}

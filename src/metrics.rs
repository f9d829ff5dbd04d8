use crate::error::{HuffmanError, Result};

/// Running totals accumulated by every successful compress call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Bits the input would take at the fixed per-symbol width.
    pub input_bits: u64,
    /// Bits actually emitted.
    pub output_bits: u64,
    /// Symbols encoded.
    pub symbols: u64,
    /// Set once any compress call has succeeded, even on empty input.
    pub compressed: bool,
}

impl CompressionStats {
    pub fn record(&mut self, symbol_bits: u32, code_len: usize) {
        self.input_bits += u64::from(symbol_bits);
        self.output_bits += code_len as u64;
        self.symbols += 1;
    }

    /// Folds the totals of one successful compress call into the running
    /// totals and marks the stats as compressed.
    pub fn absorb(&mut self, other: CompressionStats) {
        self.input_bits += other.input_bits;
        self.output_bits += other.output_bits;
        self.symbols += other.symbols;
        self.compressed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.symbols == 0
    }

    /// Output bits over input bits. Compressing only empty input gives 0.0.
    pub fn ratio(&self) -> Result<f64> {
        if !self.compressed {
            return Err(HuffmanError::NotYetCompressed);
        }
        if self.input_bits == 0 {
            return Ok(0.0);
        }
        Ok(self.output_bits as f64 / self.input_bits as f64)
    }
}

/// Shannon entropy in bits of a distribution given by raw weights.
pub fn entropy<I>(weights: I, total: u64) -> f64
where
    I: IntoIterator<Item = u64>,
{
    let total = total as f64;
    weights
        .into_iter()
        .map(|w| {
            let p = w as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ratio_needs_a_compress_call() {
        let stats = CompressionStats::default();
        assert_eq!(stats.ratio(), Err(HuffmanError::NotYetCompressed));

        // recording alone does not mark a finished call
        let mut pending = CompressionStats::default();
        pending.record(16, 2);
        assert_eq!(pending.ratio(), Err(HuffmanError::NotYetCompressed));
    }

    #[test]
    fn empty_call_gives_zero_ratio() {
        let mut stats = CompressionStats::default();
        stats.absorb(CompressionStats::default());
        assert!(stats.compressed);
        assert!(stats.is_empty());
        assert_eq!(stats.ratio(), Ok(0.0));
    }

    #[test]
    fn ratio_divides_output_by_input() {
        let mut pending = CompressionStats::default();
        pending.record(16, 1);
        pending.record(16, 3);
        let mut stats = CompressionStats::default();
        stats.absorb(pending);
        assert_eq!(stats.input_bits, 32);
        assert_eq!(stats.output_bits, 4);
        assert_eq!(stats.symbols, 2);
        assert_eq!(stats.ratio().unwrap(), 0.125);
    }

    #[test]
    fn entropy_of_fair_coin_is_one_bit() {
        assert!((entropy([5, 5], 10) - 1.0).abs() < 1e-12);
        assert!((entropy([1, 1, 1, 1], 4) - 2.0).abs() < 1e-12);
    }
}

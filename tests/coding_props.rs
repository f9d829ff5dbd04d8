use proptest::prelude::*;
use huffman_coder::HuffmanCoder;

fn alphabet_weights() -> impl Strategy<Value = Vec<(char, i64)>> {
    proptest::collection::btree_map(proptest::char::range('a', 'z'), 1i64..500, 2..20)
        .prop_map(|weights| weights.into_iter().collect())
}

fn is_prefix_free(codes: &[&str]) -> bool {
    codes.iter().enumerate().all(|(i, a)| {
        codes
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !b.starts_with(a))
    })
}

proptest! {
    #[test]
    fn decompress_inverts_compress(
        weights in alphabet_weights(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..200),
    ) {
        let mut coder = HuffmanCoder::from_frequencies(weights.clone()).expect("coder builds");
        let text: String = picks.iter().map(|idx| weights[idx.index(weights.len())].0).collect();

        let bits = coder.compress(&text).expect("text is within the alphabet");
        prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
        prop_assert_eq!(coder.decompress(&bits).expect("bits decode"), text);
    }

    #[test]
    fn seeded_coder_round_trips_its_seed(seed in "[a-f ]{2,120}") {
        prop_assume!(seed.chars().collect::<std::collections::HashSet<_>>().len() >= 2);
        let mut coder = HuffmanCoder::from_seed(&seed).expect("coder builds");
        let bits = coder.compress(&seed).expect("seed is within its own alphabet");
        prop_assert_eq!(coder.decompress(&bits).expect("bits decode"), seed);
    }

    #[test]
    fn codes_are_prefix_free(weights in alphabet_weights()) {
        let coder = HuffmanCoder::from_frequencies(weights.clone()).expect("coder builds");
        let table = coder.code_table();
        prop_assert_eq!(table.len(), weights.len());

        let codes: Vec<&str> = table.values().copied().collect();
        prop_assert!(codes.iter().all(|code| !code.is_empty()));
        prop_assert!(is_prefix_free(&codes), "codes {:?} are not prefix free", codes);
    }

    #[test]
    fn same_table_gives_same_codes(weights in alphabet_weights()) {
        let first = HuffmanCoder::from_frequencies(weights.clone()).expect("coder builds");
        let mut reversed = weights.clone();
        reversed.reverse();
        let second = HuffmanCoder::from_frequencies(reversed).expect("coder builds");

        prop_assert_eq!(first.code_table(), second.code_table());
    }

    #[test]
    fn expected_length_sits_between_entropy_and_entropy_plus_one(weights in alphabet_weights()) {
        let coder = HuffmanCoder::from_frequencies(weights).expect("coder builds");
        let expected = coder.expected_encoding_length();
        let entropy = coder.entropy();

        prop_assert!(expected + 1e-9 >= entropy, "{} < {}", expected, entropy);
        prop_assert!(expected < entropy + 1.0, "{} >= {} + 1", expected, entropy);
    }

    #[test]
    fn heavier_symbols_never_get_longer_codes(weights in alphabet_weights()) {
        let coder = HuffmanCoder::from_frequencies(weights.clone()).expect("coder builds");
        for (a, wa) in &weights {
            for (b, wb) in &weights {
                if wa > wb {
                    let la = coder.code_for(a).map(str::len).unwrap_or_default();
                    let lb = coder.code_for(b).map(str::len).unwrap_or_default();
                    prop_assert!(la <= lb, "{:?}({}) -> {} bits, {:?}({}) -> {} bits", a, wa, la, b, wb, lb);
                }
            }
        }
    }
}

use std::collections::HashMap;
use std::fmt::{Debug, Write};
use std::hash::Hash;

use tracing::debug;

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    pub root: HuffNode<S>,
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Greedy Huffman construction: one leaf per symbol, then repeatedly merge
    /// the two lightest fragments until a single root remains.
    ///
    /// Leaves enter the queue in ascending symbol order and equal weights
    /// leave it first-in first-out, so a given table always yields the same tree.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let mut heap = MinHeap::with_capacity(frequencies.len());
        for (symbol, &weight) in frequencies {
            heap.insert(weight, HuffNode::new(symbol.clone(), weight));
        }
        let tree = HuffmanTree::build_from_heap(heap)?;

        debug!(
            alphabet = frequencies.len(),
            total_weight = frequencies.total(),
            max_code_len = tree.depth(),
            "built huffman tree"
        );
        Ok(tree)
    }

    fn build_from_heap(mut heap: MinHeap<u64, HuffNode<S>>) -> Result<Self> {
        while heap.heap_size() > 1 {
            let (wx, x) = heap.extract_min()?;
            let (wy, y) = heap.extract_min()?;

            // the table total fits in u64, so no partial sum can overflow
            let z = HuffNode::merge(x, y);
            heap.insert(wx + wy, z);
        }
        let (_, root) = heap.extract_min()?;

        Ok(HuffmanTree { root })
    }
}

impl<S> HuffmanTree<S> {
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path, i.e. the longest code.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        deepest
    }

    /// Number of leaves, one per alphabet symbol.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => count += 1,
                HuffNode::Internal { left, right, .. } => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
            }
        }
        count
    }
}

impl<S: Eq + Hash + Clone> HuffmanTree<S> {
    /// Assigns each leaf the path leading to it: left appends '0', right '1'.
    ///
    /// The walk keeps its own stack so very skewed trees cannot exhaust the
    /// call stack.
    pub fn generate_table(&self) -> HashMap<S, String> {
        let mut table = HashMap::new();
        let mut stack = vec![(&self.root, String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    table.insert(symbol.clone(), path);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((&**right, right_path));
                    stack.push((&**left, left_path));
                }
            }
        }
        table
    }
}

impl<S: Debug> HuffmanTree<S> {
    /// Indented dump of the tree, one node per line, left before right.
    pub fn render(&self) -> String {
        let mut out = String::from("Huffman Tree Structure:\n");
        let mut stack = vec![(&self.root, 0usize, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            // writing into a String cannot fail
            let _ = match node {
                HuffNode::Leaf { symbol, weight } => writeln!(
                    out,
                    "{}{}-> Leaf: {:?} [weight: {}]",
                    indent, label, symbol, weight
                ),
                HuffNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    stack.push((&**right, depth + 1, "R"));
                    stack.push((&**left, depth + 1, "L"));
                    writeln!(out, "{}{}-> Internal [weight: {}]", indent, label, weight)
                }
            };
        }
        out
    }
}

/// A tree vertex. Only leaves carry symbols; only internal nodes have children.
#[derive(Debug, Clone)]
pub enum HuffNode<S> {
    Leaf {
        weight: u64,
        symbol: S,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn new(symbol: S, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Self {
        // a is the lighter node and goes left
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tree_for(seed: &str) -> HuffmanTree<char> {
        let table = FrequencyTable::from_symbols(seed.chars()).unwrap();
        HuffmanTree::from_frequencies(&table).unwrap()
    }

    #[test]
    fn merges_lightest_pair_first() {
        let tree = tree_for("aaabbc");
        assert_eq!(tree.weight(), 6);

        let HuffNode::Internal { left, right, .. } = &tree.root else {
            panic!("root must be internal");
        };
        assert!(matches!(**left, HuffNode::Leaf { symbol: 'a', weight: 3 }));
        let HuffNode::Internal { weight, left, right } = &**right else {
            panic!("right child must be internal");
        };
        assert_eq!(*weight, 3);
        assert!(matches!(**left, HuffNode::Leaf { symbol: 'c', weight: 1 }));
        assert!(matches!(**right, HuffNode::Leaf { symbol: 'b', weight: 2 }));
    }

    #[test]
    fn table_follows_tree_paths() {
        let table = tree_for("aaabbc").generate_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table[&'a'], "0");
        assert_eq!(table[&'c'], "10");
        assert_eq!(table[&'b'], "11");
    }

    #[test]
    fn two_symbols_give_depth_one() {
        let tree = tree_for("xyyy");
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
        let table = tree.generate_table();
        assert_eq!(table[&'x'], "0");
        assert_eq!(table[&'y'], "1");
    }

    #[test]
    fn skewed_weights_build_a_deep_tree() {
        // doubling weights force a chain: every merge absorbs the previous root
        let weights: Vec<(u32, i64)> = (0..40).map(|i| (i, 1i64 << i)).collect();
        let table = FrequencyTable::from_weights(weights).unwrap();
        let tree = HuffmanTree::from_frequencies(&table).unwrap();

        assert_eq!(tree.depth(), 39);
        assert_eq!(tree.leaf_count(), 40);
        let codes = tree.generate_table();
        assert_eq!(codes[&39].len(), 1);
        assert_eq!(codes[&0].len(), 39);
        assert_eq!(codes[&1].len(), 39);
    }

    #[test]
    fn render_lists_every_node() {
        let dump = tree_for("aaabbc").render();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "Huffman Tree Structure:");
        assert_eq!(lines[1], "root-> Internal [weight: 6]");
        assert_eq!(lines[2], "  L-> Leaf: 'a' [weight: 3]");
        assert_eq!(lines[3], "  R-> Internal [weight: 3]");
        assert_eq!(lines[4], "    L-> Leaf: 'c' [weight: 1]");
        assert_eq!(lines[5], "    R-> Leaf: 'b' [weight: 2]");
    }
}

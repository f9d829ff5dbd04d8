use thiserror::Error;

/// Entry stored in the heap: the ordering key, the insertion sequence used to
/// break ties, and the payload.
#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    seq: u64,
    value: V,
}

impl<K: Ord, V> Slot<K, V> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.key, self.seq) < (&other.key, other.seq)
    }
}

/// Binary min-heap keyed by `K`.
///
/// Entries with equal keys come out in insertion order, so the same sequence
/// of inserts always yields the same sequence of extractions.
#[derive(Debug, Clone)]
pub struct MinHeap<K, V> {
    elements: Vec<Slot<K, V>>,
    next_seq: u64,
}

impl<K, V> MinHeap<K, V> {
    pub fn new() -> Self {
        MinHeap {
            elements: vec![],
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapErr {
    #[error("extract from empty heap")]
    HeapUnderflow,
}

impl<K: Ord, V> MinHeap<K, V> {
    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size())
            .all(|i| !self.elements[i].precedes(&self.elements[Self::parent(i)]))
    }

    fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l].precedes(&self.elements[smallest]) {
                smallest = l;
            }
            if r < n && self.elements[r].precedes(&self.elements[smallest]) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if !self.elements[i].precedes(&self.elements[p]) {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    /// Inserts `value` under `key` in O(log n).
    pub fn insert(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.elements.push(Slot { key, seq, value });
        let last = self.heap_size() - 1;
        self.sift_up(last);
        debug_assert!(self.valid_min_heap());
    }

    /// Removes the entry with the smallest key in O(log n). Among equal keys
    /// the earliest inserted wins.
    pub fn extract_min(&mut self) -> Result<(K, V), HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let slot = self.elements.swap_remove(0);
        if !self.is_empty() {
            self.min_heapify(0);
        }
        Ok((slot.key, slot.value))
    }
}

impl<K, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

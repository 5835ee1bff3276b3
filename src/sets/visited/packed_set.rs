use crate::sets::visited::VisitorSet;

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-capacity set of node indices packed into 64-bit words.
///
/// Keeps a running count of its members so that `len` is O(1).
///
/// # Examples
///
/// ```
/// use graph_irv::sets::visited::{PackedSet, VisitorSet};
///
/// let mut set = PackedSet::new(10);
/// assert!(!set.get(3));
///
/// assert!(set.set(3));
/// assert!(!set.set(3));
/// assert!(set.get(3));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PackedSet {
    /*private*/ words: Box<[u64]>,
    /*private*/ capacity: usize,
    /*private*/ members: usize,
}

impl PackedSet {
    /// Constructs an empty set able to hold the indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        PackedSet {
            words: vec![0u64; capacity.div_ceil(WORD_BITS)].into_boxed_slice(),
            capacity,
            members: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members currently in the set.
    pub fn len(&self) -> usize {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    pub fn is_full(&self) -> bool {
        self.members == self.capacity
    }

    /// Adds every index whose bit is set in `words`, a row laid out like this
    /// set's own storage. Returns how many indices were newly added.
    pub fn union_words(&mut self, words: &[u64]) -> usize {
        assert_eq!(words.len(), self.words.len());

        let mut added = 0;
        for (mine, &theirs) in self.words.iter_mut().zip(words) {
            let fresh = theirs & !*mine;
            added += fresh.count_ones() as usize;
            *mine |= fresh;
        }
        self.members += added;
        added
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        iter_word_ones(&self.words)
    }

    /// Returns the `rank`-th smallest member, if the set has that many.
    pub fn nth_member(&self, mut rank: usize) -> Option<usize> {
        for (word_index, &word) in self.words.iter().enumerate() {
            let ones = word.count_ones() as usize;
            if rank < ones {
                let mut remaining = word;
                for _ in 0..rank {
                    remaining &= remaining - 1;
                }
                return Some(word_index * WORD_BITS + remaining.trailing_zeros() as usize);
            }
            rank -= ones;
        }
        None
    }
}

impl VisitorSet for PackedSet {
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn set(&mut self, index: usize) -> bool {
        assert!(index < self.capacity);

        let word = &mut self.words[index / WORD_BITS];
        let mask = 1u64 << (index % WORD_BITS);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.members += 1;
        true
    }

    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn get(&self, index: usize) -> bool {
        assert!(index < self.capacity);

        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }
}

impl std::fmt::Debug for PackedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterates over the positions of the set bits of `words`, lowest first.
pub(crate) fn iter_word_ones(words: &[u64]) -> impl Iterator<Item = usize> + '_ {
    words
        .iter()
        .enumerate()
        .flat_map(|(word_index, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    None
                } else {
                    let bit = remaining.trailing_zeros() as usize;
                    remaining &= remaining - 1;
                    Some(word_index * WORD_BITS + bit)
                }
            })
        })
}

/// Number of 64-bit words needed to hold `bits` bits.
pub(crate) fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

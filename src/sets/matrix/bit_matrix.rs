use crate::{
    error::{Error, Result},
    sets::visited::{iter_word_ones, words_for},
};

/// A dense boolean matrix stored row-major, one packed bit per cell.
///
/// Every row occupies the same number of 64-bit words, so rows can be copied
/// onto or OR-ed into each other without touching the rest of the matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    words_per_row: usize,
    words: Box<[u64]>,
}

impl BitMatrix {
    /// Allocates a `rows x cols` matrix of cleared bits.
    ///
    /// Fails with [`Error::CapacityOverflow`] or [`Error::Allocation`] instead
    /// of aborting when the storage cannot be reserved.
    pub fn try_new(rows: usize, cols: usize, what: &'static str) -> Result<Self> {
        let words_per_row = words_for(cols);
        let total = rows
            .checked_mul(words_per_row)
            .ok_or(Error::CapacityOverflow { what })?;

        let mut words = Vec::new();
        words
            .try_reserve_exact(total)
            .map_err(|source| Error::Allocation { what, source })?;
        words.resize(total, 0u64);

        Ok(BitMatrix {
            rows,
            cols,
            words_per_row,
            words: words.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        assert!(row < self.rows && col < self.cols);
        (
            row * self.words_per_row + col / u64::BITS as usize,
            1u64 << (col % u64::BITS as usize),
        )
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.locate(row, col);
        self.words[word] & mask != 0
    }

    /// Sets a cell, returning `true` if it was previously cleared.
    pub fn set(&mut self, row: usize, col: usize) -> bool {
        let (word, mask) = self.locate(row, col);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// The packed words backing `row`.
    pub fn row_words(&self, row: usize) -> &[u64] {
        assert!(row < self.rows);
        let start = row * self.words_per_row;
        &self.words[start..start + self.words_per_row]
    }

    /// Overwrites row `dst` with a copy of row `src`.
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        assert!(src < self.rows && dst < self.rows);
        let width = self.words_per_row;
        self.words
            .copy_within(src * width..(src + 1) * width, dst * width);
    }

    /// ORs row `src` into row `dst`.
    pub fn union_row(&mut self, src: usize, dst: usize) {
        assert!(src < self.rows && dst < self.rows);
        let width = self.words_per_row;
        for offset in 0..width {
            let incoming = self.words[src * width + offset];
            self.words[dst * width + offset] |= incoming;
        }
    }

    /// Number of set cells in `row`.
    pub fn row_count(&self, row: usize) -> usize {
        self.row_words(row)
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Columns set in `row`, ascending.
    pub fn row_ones(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        iter_word_ones(self.row_words(row))
    }
}

impl std::fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for row in 0..self.rows {
            map.entry(&row, &self.row_ones(row).collect::<Vec<_>>());
        }
        map.finish()
    }
}

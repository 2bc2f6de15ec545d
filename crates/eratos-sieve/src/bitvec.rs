//! Packed bit vectors.
//!
//! Flags are packed 64 to a `u64` word, least significant bit first:
//! flag `i` lives in bit `i % 64` of word `i / 64`. Bits past `len` in
//! the last word are always zero so that word-wise population counts
//! never see them.

/// A fixed-length vector of bits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

const WORD_BITS: usize = 64;

#[inline]
const fn word_index(index: usize) -> usize {
    index / WORD_BITS
}

#[inline]
const fn bit_mask(index: usize) -> u64 {
    1u64 << (index % WORD_BITS)
}

impl BitVec {
    /// Creates a vector of `len` cleared bits.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates a vector of `len` bits where every word starts as `pattern`.
    #[must_use]
    pub fn from_word_pattern(len: usize, pattern: u64) -> Self {
        let mut bits = Self {
            words: vec![pattern; len.div_ceil(WORD_BITS)],
            len,
        };
        bits.clear_tail();
        bits
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vector holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads bit `index`. Out-of-range indices read as false.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        index < self.len && self.words[word_index(index)] & bit_mask(index) != 0
    }

    /// Sets bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[word_index(index)] |= bit_mask(index);
    }

    /// Clears bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[word_index(index)] &= !bit_mask(index);
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of set bits with index below `end`.
    #[must_use]
    pub fn count_ones_before(&self, end: usize) -> usize {
        let end = end.min(self.len);
        let full = word_index(end);
        let mut count: usize = self.words[..full]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        let rest = end % WORD_BITS;
        if rest != 0 {
            count += (self.words[full] & ((1u64 << rest) - 1)).count_ones() as usize;
        }
        count
    }

    /// Indices of the set bits, ascending.
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// The packed words.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }
}

/// Iterator over the set bits of a [`BitVec`].
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    words: &'a [u64],
    word: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word += 1;
            self.current = *self.words.get(self.word)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        // Drop the lowest set bit.
        self.current &= self.current - 1;
        Some(self.word * WORD_BITS + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bits = BitVec::zeros(130);
        assert_eq!(bits.len(), 130);
        assert_eq!(bits.as_words().len(), 3);

        bits.set(0);
        bits.set(64);
        bits.set(129);
        assert!(bits.get(0) && bits.get(64) && bits.get(129));
        assert!(!bits.get(1));
        assert!(!bits.get(500));

        bits.clear(64);
        assert!(!bits.get(64));
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn test_pattern_masks_tail() {
        let bits = BitVec::from_word_pattern(70, u64::MAX);
        assert_eq!(bits.count_ones(), 70);
        assert_eq!(bits.as_words()[1], (1 << 6) - 1);
    }

    #[test]
    fn test_count_before_and_ones() {
        let bits = BitVec::from_word_pattern(200, 0xAAAA_AAAA_AAAA_AAAA);
        assert_eq!(bits.count_ones(), 100);
        assert_eq!(bits.count_ones_before(0), 0);
        assert_eq!(bits.count_ones_before(10), 5);
        assert_eq!(bits.count_ones_before(65), 32);
        assert_eq!(bits.count_ones_before(1_000), 100);

        let ones: Vec<usize> = bits.ones().take(4).collect();
        assert_eq!(ones, vec![1, 3, 5, 7]);
        assert_eq!(bits.ones().count(), 100);
        assert_eq!(bits.ones().last(), Some(199));
    }

    #[test]
    fn test_empty() {
        let bits = BitVec::zeros(0);
        assert!(bits.is_empty());
        assert_eq!(bits.ones().next(), None);
        assert_eq!(bits.count_ones_before(5), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range() {
        BitVec::zeros(8).set(8);
    }
}

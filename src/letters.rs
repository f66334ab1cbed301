//! Letter bookkeeping for the solver. A [`LetterPool`] tracks how many of
//! each letter remain to be consumed while a decomposition is searched.

/// Remaining count of each letter `a..=z`, with a running total so "how many
/// letters are left" is a field read rather than a sum over the array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: [u16; 26],
    total: u32,
}

impl LetterPool {
    /// Builds a pool from a phrase. Only ASCII alphabetic characters count;
    /// case, spaces, digits and punctuation are ignored.
    pub fn from_phrase(phrase: &str) -> Self {
        let mut pool = Self::default();
        for c in phrase.chars().filter(char::is_ascii_alphabetic) {
            pool.counts[index(c)] += 1;
            pool.total += 1;
        }
        pool
    }

    /// True once every letter has been consumed.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of letters left in the pool.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Remaining count for one letter. Anything outside `a..=z` (either
    /// case) counts as zero.
    pub fn count(&self, letter: char) -> u16 {
        if letter.is_ascii_alphabetic() {
            self.counts[index(letter)]
        } else {
            0
        }
    }

    /// Whether `other` can be deducted without any count going negative.
    pub fn covers(&self, other: &Self) -> bool {
        if other.total > self.total {
            return false;
        }
        self.counts
            .iter()
            .zip(&other.counts)
            .all(|(have, need)| have >= need)
    }

    /// Removes `other`'s letters from the pool. Caller must have checked
    /// [`covers`](Self::covers) first.
    pub fn deduct(&mut self, other: &Self) {
        debug_assert!(self.covers(other));
        for (have, need) in self.counts.iter_mut().zip(&other.counts) {
            *have -= need;
        }
        self.total -= other.total;
    }

    /// Puts `other`'s letters back, undoing a [`deduct`](Self::deduct).
    pub fn restore(&mut self, other: &Self) {
        for (have, need) in self.counts.iter_mut().zip(&other.counts) {
            *have += need;
        }
        self.total += other.total;
    }
}

fn index(c: char) -> usize {
    (c.to_ascii_lowercase() as u8 - b'a') as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Case, spaces and punctuation must not contribute letters
    fn test_from_phrase_strips_noise() {
        let pool = LetterPool::from_phrase("Once in a BLUE moon!");
        assert!(pool.total() == 15, "expected 15 letters, got {}", pool.total());
        assert!(pool.count('o') == 3);
        assert!(pool.count('O') == 3);
        assert!(pool.count('z') == 0);
        assert!(pool.count('!') == 0);
    }

    #[test]
    fn test_empty_phrase_is_empty_pool() {
        assert!(LetterPool::from_phrase("123 ... !?").is_empty());
    }

    #[test]
    /// A pool covers a sub-multiset but not an overdraw of any one letter
    fn test_covers_rejects_overdraw() {
        let pool = LetterPool::from_phrase("cat");
        assert!(pool.covers(&LetterPool::from_phrase("act")));
        assert!(pool.covers(&LetterPool::from_phrase("at")));
        assert!(!pool.covers(&LetterPool::from_phrase("catt")));
        assert!(!pool.covers(&LetterPool::from_phrase("cab")));
    }

    #[test]
    /// Deducting and restoring the same word must give back the exact pool
    fn test_deduct_restore_round_trip() {
        let original = LetterPool::from_phrase("anteater");
        let word = LetterPool::from_phrase("eat");

        let mut pool = original;
        pool.deduct(&word);
        assert!(pool.total() == original.total() - word.total());
        assert!(pool.count('a') == original.count('a') - 1);

        pool.restore(&word);
        assert!(pool == original, "restore did not undo deduct");
    }

    #[test]
    fn test_deduct_to_empty() {
        let mut pool = LetterPool::from_phrase("CAT");
        pool.deduct(&LetterPool::from_phrase("tac"));
        assert!(pool.is_empty());
    }
}

//! The fixed word list a puzzle accepts. Loaded once before any solving
//! starts and read-only afterwards.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use itertools::Itertools;

use crate::MIN_WORD_LEN;
use crate::letters::LetterPool;

/// One usable word with its letter counts precomputed, so admissibility
/// checks during the search are count comparisons instead of rescans of the
/// word itself.
#[derive(Debug, Clone)]
pub struct Entry {
    word: String,
    letters: LetterPool,
}

impl Entry {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> &LetterPool {
        &self.letters
    }
}

/// An immutable, lexicographically sorted set of lowercase words.
///
/// Sorting fixes the candidate order the solver iterates in, which makes
/// solve results reproducible across runs. The puzzle archive is generated
/// once and checked in, so two runs over the same inputs must agree.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Builds a dictionary from raw word-list entries. Words are lowercased;
    /// anything shorter than [`MIN_WORD_LEN`] or containing a non-ASCII or
    /// non-alphabetic character is silently dropped, as are duplicates.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_lowercase())
            .filter(|word| word.len() >= MIN_WORD_LEN)
            .filter(|word| word.bytes().all(|b| b.is_ascii_alphabetic()))
            .sorted()
            .dedup()
            .map(|word| Entry {
                letters: LetterPool::from_phrase(&word),
                word,
            })
            .collect();
        Self { entries }
    }

    /// Reads a newline-delimited word list, one word per line.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        Ok(Self::from_words(
            reader.lines().collect::<io::Result<Vec<_>>>()?,
        ))
    }

    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Membership test over the filtered, lowercased word set.
    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .is_ok()
    }
}

//! Weighted keyword lexicon and the lexicon matching stage.
//!
//! Matching is raw, case-sensitive substring containment on the answer text.
//! Nothing is tokenized or normalized, so a fragment also fires when it sits
//! inside a longer word.

use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use serde::Serialize;
use tracing::trace;

use super::lexicon_data;
use super::scores::ScoreBoard;
use super::types::Dimension;
use super::types::Trait;
use crate::MbtiError;
use crate::Result;

lazy_static! {
    /// Embedded lexicon, built once and shared read-only
    static ref BUILTIN_LEXICON: Lexicon = Lexicon::from_static(&[
        (Trait::E, lexicon_data::EXTRAVERSION),
        (Trait::I, lexicon_data::INTROVERSION),
        (Trait::S, lexicon_data::SENSING),
        (Trait::N, lexicon_data::INTUITION),
        (Trait::T, lexicon_data::THINKING),
        (Trait::F, lexicon_data::FEELING),
        (Trait::J, lexicon_data::JUDGING),
        (Trait::P, lexicon_data::PERCEIVING),
    ]);
}

/// A keyword fragment and the weight it adds to its trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub weight: u32,
}

/// One record of a lexicon TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconRecord {
    #[serde(rename = "trait")]
    pub side: Trait,
    pub word: String,
    pub weight: u32,
}

/// On-disk lexicon layout: a flat list of `[[entries]]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub entries: Vec<LexiconRecord>,
}

/// Mapping trait -> weighted keyword fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: [Vec<LexiconEntry>; 8],
}

impl Lexicon {
    /// An empty lexicon; every answer misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded Korean lexicon
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }

    fn from_static(table: &[(Trait, &[(&str, u32)])]) -> Self {
        let mut lexicon = Self::default();
        for (side, words) in table {
            lexicon.entries[side.index()].extend(words.iter().map(|(word, weight)| {
                LexiconEntry {
                    word: (*word).to_string(),
                    weight: *weight,
                }
            }));
        }
        lexicon
    }

    /// Parse a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content)?;
        Self::from_records(file.entries)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = LexiconRecord>,
    {
        let mut lexicon = Self::default();
        for record in records {
            lexicon.insert(record.side, record.word, record.weight)?;
        }
        Ok(lexicon)
    }

    /// Add one entry, rejecting empty words and zero weights
    pub fn insert(&mut self, side: Trait, word: impl Into<String>, weight: u32) -> Result<()> {
        let word = word.into();
        if word.is_empty() {
            return Err(MbtiError::InvalidLexicon(format!(
                "empty word for trait {side}"
            )));
        }
        if weight == 0 {
            return Err(MbtiError::InvalidLexicon(format!(
                "zero weight for \"{word}\" ({side})"
            )));
        }
        self.entries[side.index()].push(LexiconEntry { word, weight });
        Ok(())
    }

    /// Entries belonging to one trait
    pub fn entries(&self, side: Trait) -> &[LexiconEntry] {
        &self.entries[side.index()]
    }

    /// Total number of entries across all traits
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Flatten back into serializable records
    pub fn to_records(&self) -> Vec<LexiconRecord> {
        Trait::ALL
            .into_iter()
            .flat_map(|side| {
                self.entries(side).iter().map(move |e| LexiconRecord {
                    side,
                    word: e.word.clone(),
                    weight: e.weight,
                })
            })
            .collect()
    }

    /// Add the weight of every fragment of `dimension` found in `answer`.
    ///
    /// Both traits are scanned; an answer may score on each side. Returns
    /// whether any fragment matched.
    pub fn apply(&self, answer: &str, dimension: Dimension, board: &mut ScoreBoard) -> bool {
        let (first, second) = dimension.traits();
        let mut matched = false;
        for side in [first, second] {
            for entry in self.entries(side) {
                if answer.contains(entry.word.as_str()) {
                    trace!(word = %entry.word, weight = entry.weight, %side, "lexicon hit");
                    board.add(side, entry.weight);
                    matched = true;
                }
            }
        }
        matched
    }
}

//! Per-answer and per-session scoring pipelines.
//!
//! Each answer runs lexicon matching, then the dimension's heuristics, then
//! style correction. Style correction only runs for SN/TF/JP when the first
//! two stages found nothing; EI always gets it.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::heuristics;
use super::lexicon::Lexicon;
use super::scores::DimensionVerdict;
use super::scores::ScoreBoard;
use super::style;
use super::types::Dimension;
use super::types::TieBreak;
use super::types::Trait;
use super::types::PLACEHOLDER;
use super::types::QUESTION_COUNT;

/// Which stages added to an answer's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageHits {
    pub lexicon: bool,
    pub heuristic: bool,
    pub style: bool,
}

impl StageHits {
    fn matched(self) -> bool {
        self.lexicon || self.heuristic
    }
}

/// Score of a single answer against one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerScore {
    pub dimension: Dimension,
    /// Totals of the dimension's two traits only
    pub scores: BTreeMap<Trait, u32>,
    pub side: Trait,
    pub score: u32,
    pub stages: StageHits,
}

/// How a session is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Test in progress: dimensions stay `X` until their questions are answered
    Partial,
    /// All dimensions resolved, with confidence
    #[default]
    Final,
}

/// Result of scoring a whole session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionScore {
    pub mode: ScoringMode,
    /// Four characters in EI/SN/TF/JP order; `X` marks a locked dimension
    pub label: String,
    pub scores: ScoreBoard,
    /// Verdicts of the resolved dimensions
    pub verdicts: Vec<DimensionVerdict>,
    /// Confidence per dimension, final mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<BTreeMap<Dimension, f64>>,
    /// Answer positions consumed, including empty ones
    pub answered: usize,
}

impl SessionScore {
    /// Whether every letter of the label is resolved
    pub fn is_complete(&self) -> bool {
        !self.label.contains(PLACEHOLDER)
    }
}

/// Stateless scorer over a shared lexicon
#[derive(Debug, Clone, Copy)]
pub struct TraitScorer<'a> {
    lexicon: &'a Lexicon,
    tie_break: TieBreak,
}

impl Default for TraitScorer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), TieBreak::default())
    }
}

impl<'a> TraitScorer<'a> {
    pub const fn new(lexicon: &'a Lexicon, tie_break: TieBreak) -> Self {
        Self { lexicon, tie_break }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Run all three stages for one answer into `board`
    fn accumulate(&self, answer: &str, dimension: Dimension, board: &mut ScoreBoard) -> StageHits {
        let mut hits = StageHits {
            lexicon: self.lexicon.apply(answer, dimension, board),
            heuristic: heuristics::augment(answer, dimension, board),
            style: false,
        };
        if dimension == Dimension::Ei || !hits.matched() {
            let before = *board;
            style::correct(answer, dimension, board);
            hits.style = *board != before;
        }
        hits
    }

    /// Score one answer in isolation
    pub fn score_answer(&self, answer: &str, dimension: Dimension) -> AnswerScore {
        let mut board = ScoreBoard::new();
        let stages = self.accumulate(answer, dimension, &mut board);
        let side = board.winner(dimension, self.tie_break);

        debug!(%dimension, %side, ?stages, "scored answer");

        AnswerScore {
            dimension,
            scores: board.dimension_scores(dimension),
            side,
            score: board.get(side),
            stages,
        }
    }

    /// Score a session of answers ordered by question index.
    ///
    /// `None` entries contribute nothing but still occupy their position.
    /// Positions past the last question are ignored.
    pub fn score_session<S: AsRef<str>>(&self, answers: &[Option<S>], mode: ScoringMode) -> SessionScore {
        let mut board = ScoreBoard::new();

        for (index, answer) in answers.iter().enumerate() {
            let Some(dimension) = Dimension::for_question(index) else {
                debug!(index, "answer beyond the last question ignored");
                continue;
            };
            if let Some(text) = answer {
                let stages = self.accumulate(text.as_ref(), dimension, &mut board);
                debug!(index, %dimension, ?stages, "accumulated answer");
            }
        }

        let answered = answers.len().min(QUESTION_COUNT);
        let resolved: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| mode == ScoringMode::Final || answered >= d.unlock_threshold())
            .collect();

        let verdicts: Vec<DimensionVerdict> = resolved
            .iter()
            .map(|&d| board.verdict(d, self.tie_break))
            .collect();

        let label = Dimension::ALL
            .iter()
            .map(|d| {
                verdicts
                    .iter()
                    .find(|v| v.dimension == *d)
                    .map_or(PLACEHOLDER, |v| v.winner.as_char())
            })
            .collect();

        let confidence = (mode == ScoringMode::Final)
            .then(|| verdicts.iter().map(|v| (v.dimension, v.confidence)).collect());

        SessionScore {
            mode,
            label,
            scores: board,
            verdicts,
            confidence,
            answered,
        }
    }
}

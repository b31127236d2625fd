//! MBTI scoring from free-text answers
//!
//! A test is twelve open-ended questions, three per dimension, asked in
//! EI, SN, TF, JP order. Each answer is scored against its question's
//! dimension in three stages:
//!
//! 1. weighted lexicon matching ([`lexicon`])
//! 2. phrase heuristics for SN/TF/JP ([`heuristics`])
//! 3. style correction from surface statistics ([`style`])
//!
//! Per-trait totals accumulate over the session and each dimension goes to
//! the trait with the higher total. Ties are settled by [`TieBreak`].

pub mod descriptions;
pub mod heuristics;
pub mod lexicon;
mod lexicon_data;
pub mod scorer;
pub mod scores;
pub mod session;
pub mod style;
pub mod types;

pub use descriptions::describe;
pub use descriptions::TypeDescription;
pub use lexicon::Lexicon;
pub use lexicon::LexiconEntry;
pub use scorer::AnswerScore;
pub use scorer::ScoringMode;
pub use scorer::SessionScore;
pub use scorer::StageHits;
pub use scorer::TraitScorer;
pub use scores::confidence;
pub use scores::DimensionVerdict;
pub use scores::ScoreBoard;
pub use session::MbtiReport;
pub use session::TestSession;
pub use types::Dimension;
pub use types::TieBreak;
pub use types::Trait;
pub use types::PLACEHOLDER;
pub use types::QUESTION_COUNT;
pub use types::QUESTIONS_PER_DIMENSION;

/// Dimension measured by question `index` (0-based), `None` past the last
pub fn dimension_for_question(index: usize) -> Option<Dimension> {
    Dimension::for_question(index)
}

/// Score one answer with the built-in lexicon and default tie-break
pub fn score_single_answer(answer: &str, dimension: Dimension) -> AnswerScore {
    TraitScorer::default().score_answer(answer, dimension)
}

/// Score a session with the built-in lexicon and default tie-break
pub fn score_session<S: AsRef<str>>(answers: &[Option<S>], mode: ScoringMode) -> SessionScore {
    TraitScorer::default().score_session(answers, mode)
}

//! In-memory test session: answers keyed by question index, progress
//! snapshots while the test runs, and the final report.

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use uuid::Uuid;

use super::descriptions::describe;
use super::descriptions::TypeDescription;
use super::scorer::AnswerScore;
use super::scorer::ScoringMode;
use super::scorer::SessionScore;
use super::scorer::TraitScorer;
use super::scores::ScoreBoard;
use super::types::Dimension;
use super::types::QUESTION_COUNT;
use crate::MbtiError;
use crate::Result;

/// Serializable outcome handed to persistence and HTTP layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MbtiReport {
    pub session_id: Uuid,
    pub mbti: String,
    pub dimension_scores: ScoreBoard,
    pub confidence: BTreeMap<Dimension, f64>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static TypeDescription>,
}

/// One user's run through the twelve questions
#[derive(Debug, Clone)]
pub struct TestSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    answers: [Option<String>; QUESTION_COUNT],
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            answers: Default::default(),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Store (or replace) the answer to question `index`
    pub fn record_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<()> {
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(MbtiError::QuestionOutOfRange {
                index,
                limit: QUESTION_COUNT,
            })?;
        *slot = Some(answer.into());
        debug!(session = %self.id, index, "answer recorded");
        Ok(())
    }

    /// Record an answer and score it on its own, for immediate feedback
    pub fn submit(
        &mut self,
        scorer: &TraitScorer<'_>,
        index: usize,
        answer: impl Into<String>,
    ) -> Result<AnswerScore> {
        let answer = answer.into();
        let dimension = Dimension::for_question(index).ok_or(MbtiError::QuestionOutOfRange {
            index,
            limit: QUESTION_COUNT,
        })?;
        let score = scorer.score_answer(&answer, dimension);
        self.record_answer(index, answer)?;
        Ok(score)
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index)?.as_deref()
    }

    /// Number of recorded answers
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// First question still unanswered, if any
    pub fn current_question(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    /// Answer slots up to the last recorded one
    fn answered_prefix(&self) -> &[Option<String>] {
        let end = self
            .answers
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |i| i + 1);
        &self.answers[..end]
    }

    /// Partial result for a test in progress
    ///
    /// Scores every slot up to the last recorded answer; unanswered slots
    /// before it count as missing answers.
    pub fn progress(&self, scorer: &TraitScorer<'_>) -> SessionScore {
        scorer.score_session(self.answered_prefix(), ScoringMode::Partial)
    }

    /// Final result; every question must be answered
    pub fn finalize(&self, scorer: &TraitScorer<'_>) -> Result<MbtiReport> {
        let answered = self.answered();
        if answered < QUESTION_COUNT {
            return Err(MbtiError::SessionNotCompleted {
                answered,
                required: QUESTION_COUNT,
            });
        }

        let score = scorer.score_session(&self.answers, ScoringMode::Final);
        info!(session = %self.id, mbti = %score.label, "session finalized");

        Ok(MbtiReport {
            session_id: self.id,
            description: describe(&score.label),
            mbti: score.label,
            dimension_scores: score.scores,
            confidence: score.confidence.unwrap_or_default(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::types::Trait;

    const NEUTRAL: &str = "the weather report mentions light clouds";

    #[test]
    fn test_new_session_is_empty() {
        let session = TestSession::new();
        assert_eq!(session.answered(), 0);
        assert_eq!(session.current_question(), Some(0));
        assert!(!session.is_complete());
        assert_eq!(session.progress(&TraitScorer::default()).label, "XXXX");
    }

    #[test]
    fn test_record_answer_out_of_range() {
        let mut session = TestSession::new();
        let err = session.record_answer(12, "late").unwrap_err();
        assert!(matches!(
            err,
            MbtiError::QuestionOutOfRange {
                index: 12,
                limit: 12
            }
        ));
    }

    #[test]
    fn test_record_answer_overwrites() {
        let mut session = TestSession::new();
        session.record_answer(0, "first").unwrap();
        session.record_answer(0, "second").unwrap();
        assert_eq!(session.answer(0), Some("second"));
        assert_eq!(session.answered(), 1);
        assert_eq!(session.current_question(), Some(1));
    }

    #[test]
    fn test_submit_scores_against_question_dimension() {
        let mut session = TestSession::new();
        let scorer = TraitScorer::default();
        let score = session.submit(&scorer, 4, "실제로 해봤어").unwrap();
        assert_eq!(score.dimension, Dimension::Sn);
        assert_eq!(score.side, Trait::S);
        assert_eq!(session.answer(4), Some("실제로 해봤어"));
    }

    #[test]
    fn test_progress_uses_answered_prefix() {
        let mut session = TestSession::new();
        for i in 0..3 {
            session.record_answer(i, "혼자 집에 있을래").unwrap();
        }
        let progress = session.progress(&TraitScorer::default());
        assert_eq!(progress.label, "IXXX");
        assert_eq!(progress.answered, 3);
    }

    #[test]
    fn test_progress_counts_gaps_before_last_answer() {
        let mut session = TestSession::new();
        session.record_answer(0, "혼자 집에 있을래").unwrap();
        session.record_answer(3, "실제로 해봤어").unwrap();
        let progress = session.progress(&TraitScorer::default());
        assert_eq!(session.answered(), 2);
        assert_eq!(progress.answered, 4);
        assert_eq!(progress.label, "IXXX");
        assert!(progress.scores.get(Trait::S) > 0);
    }

    #[test]
    fn test_finalize_requires_all_answers() {
        let mut session = TestSession::new();
        for i in 0..11 {
            session.record_answer(i, NEUTRAL).unwrap();
        }
        let err = session.finalize(&TraitScorer::default()).unwrap_err();
        assert!(matches!(
            err,
            MbtiError::SessionNotCompleted {
                answered: 11,
                required: 12
            }
        ));
    }

    #[test]
    fn test_finalize_report() {
        let id = Uuid::new_v4();
        let mut session = TestSession::with_id(id);
        for i in 0..QUESTION_COUNT {
            session.record_answer(i, NEUTRAL).unwrap();
        }
        let report = session.finalize(&TraitScorer::default()).unwrap();
        assert_eq!(report.session_id, id);
        assert_eq!(report.mbti, "INFP");
        assert!(report.dimension_scores.is_zero());
        assert_eq!(report.confidence.len(), 4);
        assert!(report.confidence.values().all(|&c| c == 0.0));
        assert_eq!(report.description.map(|d| d.label), Some("INFP"));
    }

    #[test]
    fn test_report_serializes_for_http() {
        let mut session = TestSession::new();
        for i in 0..QUESTION_COUNT {
            session.record_answer(i, NEUTRAL).unwrap();
        }
        let report = session.finalize(&TraitScorer::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mbti"], "INFP");
        assert_eq!(json["dimension_scores"]["E"], 0);
        assert_eq!(json["confidence"]["EI"], 0.0);
        assert!(json["timestamp"].is_string());
        assert_eq!(json["description"]["label"], "INFP");
    }
}

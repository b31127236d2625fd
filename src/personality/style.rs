//! Surface-statistics fallback scoring.
//!
//! Used when an answer says nothing the lexicon or the heuristics recognise
//! (and always for EI). Each rule adds a small fixed amount to one trait and
//! rules are evaluated independently.

use tracing::trace;

use super::scores::ScoreBoard;
use super::types::Dimension;
use super::types::Trait;

/// Answers longer than this lean E
const LONG_ANSWER_CHARS: usize = 50;
/// Answers shorter than this lean I
const SHORT_ANSWER_CHARS: usize = 20;

/// Vague "thing / something / feeling / like / seems" markers
const ABSTRACT_MARKERS: &[&str] = &["것", "거", "뭔가", "느낌", "같은", "듯"];
/// Counters for times, items, people, hours, minutes, occurrences
const CONCRETE_MARKERS: &[&str] = &["번", "개", "명", "시", "분", "회"];
const MARKER_THRESHOLD: usize = 2;

/// "?", "how", "why"
const QUESTION_MARKERS: &[&str] = &["?", "어떻게", "왜"];
const QUESTION_THRESHOLD: usize = 2;

const EMOTIVE_MARKERS: &[&str] = &[
    "!", "ㅠ", "ㅜ", "ㅎ", "ㅋ", "♥", "❤", "😢", "😭", "💕",
];
const EMOTIVE_STRONG_THRESHOLD: usize = 3;

const DECISIVE_PHRASES: &[&str] = &["해야", "할 거야", "할게", "예정", "반드시", "꼭"];
const HEDGING_PHRASES: &[&str] = &["아마", "글쎄", "모르겠", "될 듯", "일단", "어쩌면"];

/// Number of distinct markers present in the text
fn distinct_present(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text.contains(*m)).count()
}

/// Total non-overlapping occurrences of all markers
fn occurrences(text: &str, markers: &[&str]) -> usize {
    markers.iter().map(|m| text.matches(*m).count()).sum()
}

/// Apply the style rules of `dimension` to the board
pub fn correct(answer: &str, dimension: Dimension, board: &mut ScoreBoard) {
    match dimension {
        Dimension::Ei => {
            let length = answer.chars().count();
            if length > LONG_ANSWER_CHARS {
                board.add(Trait::E, 1);
            } else if length < SHORT_ANSWER_CHARS {
                board.add(Trait::I, 1);
            }
            trace!(length, "style: answer length");
        }
        Dimension::Sn => {
            let abstract_count = distinct_present(answer, ABSTRACT_MARKERS);
            if abstract_count >= MARKER_THRESHOLD {
                board.add(Trait::N, 1);
            }
            let concrete_count = distinct_present(answer, CONCRETE_MARKERS);
            if concrete_count >= MARKER_THRESHOLD {
                board.add(Trait::S, 1);
            }
            trace!(abstract_count, concrete_count, "style: marker words");
        }
        Dimension::Tf => {
            let questions = occurrences(answer, QUESTION_MARKERS);
            if questions >= QUESTION_THRESHOLD {
                board.add(Trait::T, 1);
            }
            let emotive = occurrences(answer, EMOTIVE_MARKERS);
            if emotive >= EMOTIVE_STRONG_THRESHOLD {
                board.add(Trait::F, 2);
            } else if emotive >= 1 {
                board.add(Trait::F, 1);
            }
            trace!(questions, emotive, "style: punctuation");
        }
        Dimension::Jp => {
            if distinct_present(answer, DECISIVE_PHRASES) > 0 {
                board.add(Trait::J, 1);
            }
            if distinct_present(answer, HEDGING_PHRASES) > 0 {
                board.add(Trait::P, 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrected(answer: &str, dimension: Dimension) -> (u32, u32) {
        let mut board = ScoreBoard::new();
        correct(answer, dimension, &mut board);
        board.pair(dimension)
    }

    #[test]
    fn test_ei_length_bands() {
        assert_eq!(corrected("", Dimension::Ei), (0, 1));
        assert_eq!(corrected(&"a".repeat(19), Dimension::Ei), (0, 1));
        assert_eq!(corrected(&"a".repeat(20), Dimension::Ei), (0, 0));
        assert_eq!(corrected(&"a".repeat(50), Dimension::Ei), (0, 0));
        assert_eq!(corrected(&"a".repeat(51), Dimension::Ei), (1, 0));
    }

    #[test]
    fn test_ei_length_counts_characters_not_bytes() {
        // 19 Hangul syllables are 57 bytes but still a short answer
        let answer = "가".repeat(19);
        assert_eq!(answer.len(), 57);
        assert_eq!(corrected(&answer, Dimension::Ei), (0, 1));
    }

    #[test]
    fn test_sn_abstract_markers() {
        // 것 + 듯
        assert_eq!(corrected("그런 것 듯", Dimension::Sn), (0, 1));
        // a single marker repeated is still one distinct marker
        assert_eq!(corrected("것 것 것", Dimension::Sn), (0, 0));
    }

    #[test]
    fn test_sn_concrete_markers() {
        // 번 + 개
        assert_eq!(corrected("세 번 두 개", Dimension::Sn), (1, 0));
    }

    #[test]
    fn test_sn_both_thresholds() {
        assert_eq!(corrected("그런 것 같은 세 번 두 개", Dimension::Sn), (1, 1));
    }

    #[test]
    fn test_tf_question_indicators() {
        assert_eq!(corrected("어떻게 된 거야?", Dimension::Tf), (1, 0));
        assert_eq!(corrected("그래?", Dimension::Tf), (0, 0));
        assert_eq!(corrected("??", Dimension::Tf), (1, 0));
    }

    #[test]
    fn test_tf_emotive_tiers() {
        assert_eq!(corrected("좋다!", Dimension::Tf), (0, 1));
        assert_eq!(corrected("좋다!!", Dimension::Tf), (0, 1));
        assert_eq!(corrected("ㅠㅠ 좋다!", Dimension::Tf), (0, 2));
        assert_eq!(corrected("😭😭😭😭", Dimension::Tf), (0, 2));
    }

    #[test]
    fn test_jp_phrases_fire_independently() {
        assert_eq!(corrected("꼭 갈게", Dimension::Jp), (1, 0));
        assert_eq!(corrected("글쎄", Dimension::Jp), (0, 1));
        assert_eq!(corrected("아마 반드시", Dimension::Jp), (1, 1));
        assert_eq!(corrected("", Dimension::Jp), (0, 0));
    }
}

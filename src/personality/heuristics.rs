//! Phrase-level cues the lexicon misses.
//!
//! SN, TF and JP each carry one pattern per trait; a pattern that matches
//! anywhere in the answer adds a fixed bonus to its trait. EI has no
//! heuristic stage.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::scores::ScoreBoard;
use super::types::Dimension;
use super::types::Trait;

/// A compiled cue and the bonus it grants
pub struct Heuristic {
    pub side: Trait,
    pub bonus: u32,
    pub pattern: Regex,
}

impl Heuristic {
    fn new(side: Trait, bonus: u32, pattern: &str) -> Self {
        Self {
            side,
            bonus,
            pattern: Regex::new(pattern).expect("heuristic patterns are valid literals"),
        }
    }
}

lazy_static! {
    // Hypothetical / future framing vs first-hand experience
    static ref SENSING_INTUITION: [Heuristic; 2] = [
        Heuristic::new(Trait::N, 3, r"만약에|~라면|어쩌면|언젠가|미래에|가능성|상상"),
        Heuristic::new(Trait::S, 3, r"실제로|경험상|직접|해봤|본 적|현실적으로"),
    ];

    // Asking for causes vs acknowledging feelings
    static ref THINKING_FEELING: [Heuristic; 2] = [
        Heuristic::new(Trait::T, 4, r"왜 그런지|이유가 뭐야|논리적|합리적|따져보면"),
        Heuristic::new(Trait::F, 4, r"기분이|마음이|감정적|공감|위로|속상|서운"),
    ];

    // Planning vs deciding on the spot
    static ref JUDGING_PERCEIVING: [Heuristic; 2] = [
        Heuristic::new(Trait::J, 3, r"계획|미리|스케줄|예약|정해|체크리스트"),
        Heuristic::new(Trait::P, 3, r"즉흥|일단|상황 봐서|그때 가서|나중에|대충"),
    ];
}

/// Heuristics defined for a dimension (empty for EI)
pub fn heuristics_for(dimension: Dimension) -> &'static [Heuristic] {
    match dimension {
        Dimension::Ei => &[],
        Dimension::Sn => SENSING_INTUITION.as_slice(),
        Dimension::Tf => THINKING_FEELING.as_slice(),
        Dimension::Jp => JUDGING_PERCEIVING.as_slice(),
    }
}

/// Apply the dimension's heuristics; returns whether any fired
pub fn augment(answer: &str, dimension: Dimension, board: &mut ScoreBoard) -> bool {
    let mut fired = false;
    for heuristic in heuristics_for(dimension) {
        if heuristic.pattern.is_match(answer) {
            trace!(side = %heuristic.side, bonus = heuristic.bonus, "heuristic fired");
            board.add(heuristic.side, heuristic.bonus);
            fired = true;
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for dimension in Dimension::ALL {
            for heuristic in heuristics_for(dimension) {
                assert_eq!(heuristic.side.dimension(), dimension);
            }
        }
    }

    #[test]
    fn test_ei_has_no_heuristics() {
        let mut board = ScoreBoard::new();
        assert!(heuristics_for(Dimension::Ei).is_empty());
        assert!(!augment("만약에 계획 공감", Dimension::Ei, &mut board));
        assert!(board.is_zero());
    }

    #[test]
    fn test_sn_bonuses() {
        let mut board = ScoreBoard::new();
        assert!(augment("만약에 그렇다면", Dimension::Sn, &mut board));
        assert_eq!(board.pair(Dimension::Sn), (0, 3));

        let mut board = ScoreBoard::new();
        assert!(augment("그런 걸 본 적 있어", Dimension::Sn, &mut board));
        assert_eq!(board.pair(Dimension::Sn), (3, 0));
    }

    #[test]
    fn test_tf_bonuses() {
        let mut board = ScoreBoard::new();
        assert!(augment("따져보면 손해야", Dimension::Tf, &mut board));
        assert_eq!(board.pair(Dimension::Tf), (4, 0));

        let mut board = ScoreBoard::new();
        assert!(augment("마음이 아프다", Dimension::Tf, &mut board));
        assert_eq!(board.pair(Dimension::Tf), (0, 4));
    }

    #[test]
    fn test_jp_both_sides_can_fire() {
        let mut board = ScoreBoard::new();
        assert!(augment("미리 정했는데 일단 가보자", Dimension::Jp, &mut board));
        assert_eq!(board.pair(Dimension::Jp), (3, 3));
    }

    #[test]
    fn test_pattern_fires_once_regardless_of_repeats() {
        let mut board = ScoreBoard::new();
        augment("계획 계획 계획", Dimension::Jp, &mut board);
        assert_eq!(board.get(Trait::J), 3);
    }

    #[test]
    fn test_no_match_leaves_board_untouched() {
        let mut board = ScoreBoard::new();
        assert!(!augment("plain text only", Dimension::Tf, &mut board));
        assert!(board.is_zero());
    }
}

//! Score accumulator, per-dimension verdicts and the confidence metric.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

use super::types::Dimension;
use super::types::TieBreak;
use super::types::Trait;

/// Offset added to the confidence denominator so two zero totals give 0
const CONFIDENCE_EPSILON: f64 = 0.1;

/// Running totals for all eight traits within one scoring run
///
/// Totals only ever grow: every stage adds non-negative weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u32; 8],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, side: Trait, weight: u32) {
        let slot = &mut self.totals[side.index()];
        *slot = slot.saturating_add(weight);
    }

    pub fn get(&self, side: Trait) -> u32 {
        self.totals[side.index()]
    }

    /// Totals of the first and second trait of `dimension`
    pub fn pair(&self, dimension: Dimension) -> (u32, u32) {
        let (first, second) = dimension.traits();
        (self.get(first), self.get(second))
    }

    pub fn is_zero(&self) -> bool {
        self.totals.iter().all(|&t| t == 0)
    }

    /// Resolve the winning trait of one dimension
    pub fn winner(&self, dimension: Dimension, tie_break: TieBreak) -> Trait {
        let (first, second) = self.pair(dimension);
        tie_break.resolve(dimension, first, second)
    }

    /// Full verdict for one dimension, including confidence
    pub fn verdict(&self, dimension: Dimension, tie_break: TieBreak) -> DimensionVerdict {
        let winner = self.winner(dimension, tie_break);
        let winner_score = self.get(winner);
        let loser_score = self.get(winner.opposite());
        DimensionVerdict {
            dimension,
            winner,
            winner_score,
            loser_score,
            confidence: confidence(winner_score, loser_score),
        }
    }

    /// Totals restricted to the two traits of `dimension`
    pub fn dimension_scores(&self, dimension: Dimension) -> BTreeMap<Trait, u32> {
        let (first, second) = dimension.traits();
        BTreeMap::from([(first, self.get(first)), (second, self.get(second))])
    }

    /// All eight totals keyed by trait, in `EISNTFJP` order
    pub fn to_map(&self) -> BTreeMap<Trait, u32> {
        Trait::ALL.into_iter().map(|t| (t, self.get(t))).collect()
    }
}

impl Serialize for ScoreBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Trait::ALL.len()))?;
        for t in Trait::ALL {
            map.serialize_entry(&t, &self.get(t))?;
        }
        map.end()
    }
}

/// Resolved outcome of one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionVerdict {
    pub dimension: Dimension,
    pub winner: Trait,
    pub winner_score: u32,
    pub loser_score: u32,
    /// Percentage in [0, 100], one decimal place
    pub confidence: f64,
}

/// Relative gap between two trait totals as a percentage.
///
/// `round(|a - b| / (a + b + 0.1) * 100, 1)`. Symmetric in its arguments and
/// zero exactly when the totals are equal.
pub fn confidence(a: u32, b: u32) -> f64 {
    let a = f64::from(a);
    let b = f64::from(b);
    round_to_tenth((a - b).abs() / (a + b + CONFIDENCE_EPSILON) * 100.0)
}

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

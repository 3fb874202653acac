//! Arm selection: best-scoring pick and virgin-arm exploration

use crate::random::SeededRng;
use crate::scoring::expected_score;
use crate::stats::ArmTable;
use tracing::trace;

/// Pick the best-scoring arm, visiting arms in shuffled order
///
/// The running best starts at score 0 on arm 0, so only strictly positive
/// scores can win and arm 0 is the fallback when every arm is underwater.
/// Ties resolve to whichever tied arm the shuffle visits first, so they
/// land on different arms across calls.
pub fn select_best(table: &ArmTable, exclude: Option<usize>, rng: &mut SeededRng) -> usize {
    let mut best_arm = 0;
    let mut best_score = 0.0;

    for arm in rng.shuffled_indices(table.len()) {
        if exclude == Some(arm) {
            continue;
        }
        let score = expected_score(&table[arm]);
        if score > best_score {
            best_score = score;
            best_arm = arm;
        }
    }

    trace!(best_arm, best_score, "select_best");
    best_arm
}

/// True iff some arm is still untouched by both players
pub fn any_virgin(table: &ArmTable) -> bool {
    table.iter().any(|arm| arm.is_virgin())
}

/// A random virgin arm, or `None` once both players have touched everything
pub fn find_virgin(table: &ArmTable, rng: &mut SeededRng) -> Option<usize> {
    rng.shuffled_indices(table.len())
        .into_iter()
        .find(|&arm| table[arm].is_virgin())
}

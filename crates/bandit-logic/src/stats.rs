//! Per-arm pull statistics

use std::ops::Index;

/// Counters accumulated for one arm over a game
///
/// `wins` starts at 1 rather than 0: the optimistic prior keeps untouched
/// arms attractive to the scoring function until real evidence arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmStats {
    /// Self-pulls that paid out (optimistic prior of 1)
    pub wins: u32,
    /// Self-pulls that paid nothing
    pub losses: u32,
    /// Opponent pulls observed on this arm
    pub opponent_pulls: u32,
    /// Consecutive self-pulls ending on this arm
    pub self_streak: u32,
    /// Consecutive opponent pulls ending on this arm
    pub opponent_streak: u32,
}

impl Default for ArmStats {
    fn default() -> Self {
        Self {
            wins: 1,
            losses: 0,
            opponent_pulls: 0,
            self_streak: 0,
            opponent_streak: 0,
        }
    }
}

impl ArmStats {
    /// True when neither player has meaningfully touched this arm
    pub fn is_virgin(&self) -> bool {
        self.wins == 1 && self.losses == 0 && self.opponent_pulls == 0
    }
}

/// Statistics for every arm of the current game
#[derive(Clone, Debug, Default)]
pub struct ArmTable {
    arms: Vec<ArmStats>,
}

impl ArmTable {
    /// Create a table of `bandit_count` virgin arms
    pub fn new(bandit_count: usize) -> Self {
        Self {
            arms: vec![ArmStats::default(); bandit_count],
        }
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArmStats> {
        self.arms.iter()
    }

    /// Fold one completed round into the counters
    ///
    /// `last_reward` is the payout of the agent's previous pull. `previous`
    /// carries the round-before-last actions `(self, opponent)` and is
    /// `None` until two completed rounds exist; streaks only move once it
    /// is supplied.
    pub fn update(
        &mut self,
        self_action: usize,
        opponent_action: usize,
        last_reward: f64,
        previous: Option<(usize, usize)>,
    ) {
        if last_reward > 0.0 {
            self.arms[self_action].wins += 1;
        } else {
            self.arms[self_action].losses += 1;
        }
        self.arms[opponent_action].opponent_pulls += 1;

        if let Some((prev_self, prev_opponent)) = previous {
            if self_action == prev_self {
                self.arms[self_action].self_streak += 1;
            } else {
                self.arms[self_action].self_streak = 0;
            }
            if opponent_action == prev_opponent {
                self.arms[opponent_action].opponent_streak += 1;
            } else {
                self.arms[opponent_action].opponent_streak = 0;
            }
        }
    }
}

impl Index<usize> for ArmTable {
    type Output = ArmStats;

    fn index(&self, arm: usize) -> &ArmStats {
        &self.arms[arm]
    }
}

//! Per-round decision policy

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::random::SeededRng;
use crate::select::{find_virgin, select_best};
use crate::stats::ArmTable;

/// Fixed game parameters delivered by the environment
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Number of arms, fixed for the whole game
    pub bandit_count: u32,
}

/// What the environment reveals each round
///
/// Rewards are private: the agent sees its own cumulative reward and both
/// players' previous actions, never the opponent's payouts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Round index, 0 at game start
    pub step: u32,
    /// Cumulative reward for this agent so far
    pub reward: f64,
    /// Which of the two seats this agent occupies
    pub agent_index: usize,
    /// Both players' previous-round actions, empty at step 0
    #[serde(default)]
    pub last_actions: Vec<usize>,
}

/// Steps 1-3 always burn a forced-exploration pull
const FORCED_EXPLORE_STEPS: u32 = 4;
/// Virgin-gated exploration stays open until this round
const EXPLORE_WINDOW: u32 = 100;
/// Self-streak length that triggers the stay-or-move coin flip
const STREAK_LEN: usize = 3;

/// Heuristic agent for the decaying two-player bandit duel
///
/// Holds all per-game state; the environment drives it by calling
/// [`Agent::act`] once per round. Step 0 resets everything, so one value can
/// be reused across games.
#[derive(Clone, Debug)]
pub struct Agent {
    rng: SeededRng,
    arms: ArmTable,
    /// (self, opponent) actions per completed round; only the last three
    /// entries are ever read back
    history: Vec<(usize, usize)>,
    total_reward: f64,
}

impl Agent {
    /// Create an agent with a deterministic random stream
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SeededRng::new(seed))
    }

    /// Create an agent from an already-derived RNG stream
    pub fn with_rng(rng: SeededRng) -> Self {
        Self {
            rng,
            arms: ArmTable::default(),
            history: Vec::new(),
            total_reward: 0.0,
        }
    }

    /// Read access to the per-arm counters (mainly for inspection and tests)
    pub fn arms(&self) -> &ArmTable {
        &self.arms
    }

    /// Choose the arm to pull this round
    ///
    /// Never panics and always returns an index in `[0, bandit_count)`;
    /// malformed observations are the environment's bug, not ours, per the
    /// trusted-driver contract.
    pub fn act(&mut self, observation: &Observation, configuration: &Configuration) -> usize {
        let bandit_count = configuration.bandit_count as usize;

        if observation.step == 0 {
            self.arms = ArmTable::new(bandit_count);
            self.history.clear();
            self.total_reward = 0.0;

            // The very first pull is pure chance, untouched by scoring
            let arm = self.rng.next_range(bandit_count);
            trace!(step = 0, arm, "opening pull");
            return arm;
        }

        let last_reward = observation.reward - self.total_reward;
        self.total_reward = observation.reward;

        let my_last = observation.last_actions[observation.agent_index];
        let opponent_last = observation.last_actions[1 - observation.agent_index];

        // Streaks need two completed rounds behind the one being folded in
        let previous = if observation.step >= 3 {
            self.history.last().copied()
        } else {
            None
        };
        self.arms.update(my_last, opponent_last, last_reward, previous);
        self.history.push((my_last, opponent_last));

        // 1. Opening rounds: burn pulls on untouched arms, nothing else
        if observation.step < FORCED_EXPLORE_STEPS {
            let arm = find_virgin(&self.arms, &mut self.rng)
                .unwrap_or_else(|| self.rng.next_range(bandit_count));
            trace!(step = observation.step, arm, "forced exploration");
            return arm;
        }

        // Both players have at least four recorded rounds from here on
        let opponent_previous = self.history[self.history.len() - 2].1;

        // 2. Early game: whenever the opponent moves off an arm, spend the
        //    round on a still-untouched one while any remain
        if observation.step < EXPLORE_WINDOW && opponent_last != opponent_previous {
            if let Some(arm) = find_virgin(&self.arms, &mut self.rng) {
                trace!(step = observation.step, arm, "gated exploration");
                return arm;
            }
        }

        // 3. Opponent camped on one arm two rounds running
        if opponent_last == opponent_previous {
            if my_last != opponent_last {
                // Mirror: join them on the arm they keep feeding
                trace!(step = observation.step, arm = opponent_last, "mirror opponent");
                return opponent_last;
            }
            if last_reward > 0.0 {
                // Contested arm still paying: hold it
                trace!(step = observation.step, arm = my_last, "hold contested win");
                return my_last;
            }
            let arm = select_best(&self.arms, None, &mut self.rng);
            trace!(step = observation.step, arm, "leave contested arm");
            return arm;
        }

        // 4. Won while the opponent moved away: diversify regardless
        if last_reward > 0.0 {
            let arm = select_best(&self.arms, Some(my_last), &mut self.rng);
            trace!(step = observation.step, arm, "rotate after win");
            return arm;
        }

        // 5. Lost while the opponent moved away
        let n = self.history.len();
        let on_streak = n >= STREAK_LEN
            && self.history[n - 2].0 == my_last
            && self.history[n - 3].0 == my_last;
        if on_streak && self.rng.coin_flip() {
            // Three pulls deep on this arm: a coin decides whether one bad
            // round is enough to walk away
            trace!(step = observation.step, arm = my_last, "stay on streak");
            return my_last;
        }

        let arm = select_best(&self.arms, None, &mut self.rng);
        trace!(step = observation.step, arm, "exploit");
        arm
    }
}

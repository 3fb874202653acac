//! Match simulation against the decaying bandit environment
//!
//! Reproduces the environment the agent competes in: each arm starts with a
//! hidden payout probability drawn uniformly, pays 1 or 0 per pull, and loses
//! 3% of its probability every time either player pulls it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{Agent, Configuration, Observation};
use crate::random::SeededRng;
use crate::scoring::PULL_DECAY;

/// Simulation setup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("a duel needs at least 2 arms, got {0}")]
    TooFewArms(u32),
    #[error("a match needs at least 1 round")]
    NoRounds,
}

/// Parameters for one simulated match
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    pub bandit_count: u32,
    pub rounds: u32,
    pub seed: u64,
}

impl MatchConfig {
    fn validate(&self) -> Result<(), SimError> {
        if self.bandit_count < 2 {
            return Err(SimError::TooFewArms(self.bandit_count));
        }
        if self.rounds == 0 {
            return Err(SimError::NoRounds);
        }
        Ok(())
    }
}

/// One completed round of a simulated match
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub round: u32,
    pub action_a: usize,
    pub action_b: usize,
    pub reward_a: f64,
    pub reward_b: f64,
    pub cumulative_a: f64,
    pub cumulative_b: f64,
}

/// Full trace of a simulated match
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub rounds: Vec<RoundRecord>,
    pub total_a: f64,
    pub total_b: f64,
}

/// The hidden machines: payout probabilities eroded by every pull
struct DecayingBandits {
    probabilities: Vec<f64>,
    rng: SeededRng,
}

impl DecayingBandits {
    fn new(bandit_count: u32, mut rng: SeededRng) -> Self {
        let probabilities = (0..bandit_count).map(|_| rng.next_f64()).collect();
        Self { probabilities, rng }
    }

    /// Reveal one pull's payout, then erode the arm
    fn pull(&mut self, arm: usize) -> f64 {
        let paid = self.rng.next_f64() < self.probabilities[arm];
        self.probabilities[arm] *= PULL_DECAY;
        if paid {
            1.0
        } else {
            0.0
        }
    }
}

/// Run a full match between two independently-seeded agents
///
/// Deterministic: the config seed fixes the machines and both agents'
/// random streams, so the same config always yields the same outcome.
pub fn run_match(config: &MatchConfig) -> Result<MatchOutcome, SimError> {
    config.validate()?;

    let root = SeededRng::new(config.seed);
    let mut bandits = DecayingBandits::new(config.bandit_count, root.split(0));
    let mut agent_a = Agent::with_rng(root.split(1));
    let mut agent_b = Agent::with_rng(root.split(2));

    let configuration = Configuration {
        bandit_count: config.bandit_count,
    };

    let mut rounds = Vec::with_capacity(config.rounds as usize);
    let mut total_a = 0.0;
    let mut total_b = 0.0;
    let mut last_actions: Vec<usize> = Vec::new();

    for round in 0..config.rounds {
        let obs_a = Observation {
            step: round,
            reward: total_a,
            agent_index: 0,
            last_actions: last_actions.clone(),
        };
        let obs_b = Observation {
            step: round,
            reward: total_b,
            agent_index: 1,
            last_actions: last_actions.clone(),
        };

        // Both players commit before either pull resolves
        let action_a = agent_a.act(&obs_a, &configuration);
        let action_b = agent_b.act(&obs_b, &configuration);

        let reward_a = bandits.pull(action_a);
        let reward_b = bandits.pull(action_b);
        total_a += reward_a;
        total_b += reward_b;

        rounds.push(RoundRecord {
            round,
            action_a,
            action_b,
            reward_a,
            reward_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        last_actions = vec![action_a, action_b];
    }

    Ok(MatchOutcome {
        rounds,
        total_a,
        total_b,
    })
}

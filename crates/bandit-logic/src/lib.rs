//! Decision logic for a two-player decaying multi-armed bandit duel
//!
//! Two players repeatedly pick one of N slot machines. Each pull pays 0 or 1,
//! and every pull by either player erodes that machine's hidden payout
//! probability by 3%. A player sees its own rewards and both players' past
//! actions, never the opponent's rewards.
//!
//! The [`Agent`] turns per-arm counters into one pull per round: forced
//! exploration of untouched arms early, mirroring an opponent that camps on
//! one machine, rotating off freshly-won arms, and a coin flip before
//! abandoning a three-pull streak. [`run_match`] replays two agents against
//! the environment for testing and evaluation.

mod agent;
mod random;
mod scoring;
mod select;
mod sim;
mod stats;

pub use agent::{Agent, Configuration, Observation};
pub use random::SeededRng;
pub use scoring::{expected_score, PULL_DECAY};
pub use select::{any_virgin, find_virgin, select_best};
pub use sim::{run_match, MatchConfig, MatchOutcome, RoundRecord, SimError};
pub use stats::{ArmStats, ArmTable};

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive an agent through a scripted opening exactly as the environment
    /// would: JSON observations in, arm indices out.
    #[test]
    fn test_agent_plays_a_scripted_opening() {
        let config: Configuration = serde_json::from_str(r#"{"banditCount":5}"#).unwrap();
        let mut agent = Agent::new(42);

        let first: Observation =
            serde_json::from_str(r#"{"step":0,"reward":0.0,"agentIndex":0}"#).unwrap();
        let opening = agent.act(&first, &config);
        assert!(opening < 5);

        let second: Observation = serde_json::from_str(
            r#"{"step":1,"reward":1.0,"agentIndex":0,"lastActions":[0,3]}"#,
        )
        .unwrap();
        let pick = agent.act(&second, &config);
        assert!(pick < 5);
        assert!(agent.arms()[pick].is_virgin());
        assert_eq!(agent.arms()[0].wins, 2);
        assert_eq!(agent.arms()[3].opponent_pulls, 1);
    }
}

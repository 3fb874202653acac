//! Arm expectation scoring

use crate::stats::ArmStats;

/// Per-pull erosion of an arm's payout probability
///
/// Every pull by either player multiplies the arm's true win probability by
/// this factor, so the score of a heavily worked arm decays the same way.
pub const PULL_DECAY: f64 = 0.97;

/// Expectation score used to rank arms
///
/// Reads as a win/loss ratio with three corrections:
/// - one consolation point once the arm has lost at all,
/// - a 1.5-point toll once the opponent has pulled it (net negative:
///   contested arms are avoided),
/// - plus the opponent's current streak on it (an opponent that keeps
///   coming back probably knows something, so the toll is walked back).
///
/// The whole ratio is then decayed by the total observed pulls, steering
/// the policy toward underused arms as the game wears on.
pub fn expected_score(arm: &ArmStats) -> f64 {
    let wins = f64::from(arm.wins);
    let losses = f64::from(arm.losses);
    let opponent_pulls = f64::from(arm.opponent_pulls);

    let numerator = wins - losses
        + if arm.losses > 0 { 1.0 } else { 0.0 }
        + opponent_pulls
        - if arm.opponent_pulls > 0 { 1.5 } else { 0.0 }
        + f64::from(arm.opponent_streak);
    let denominator = wins + losses + opponent_pulls;

    let total = arm.wins + arm.losses + arm.opponent_pulls;
    (numerator / denominator) * PULL_DECAY.powi(total as i32)
}

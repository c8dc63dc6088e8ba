use super::validator::Outcome;

/// Points for an accepted word
pub const ACCEPTED_POINTS: i32 = 1;
/// Points lost for any rejected submission, whatever the reason
pub const REJECTION_PENALTY: i32 = 1;

pub struct Scorer;

impl Scorer {
    /// Score change caused by a submission outcome.
    ///
    /// Scoring rules:
    /// - An accepted word earns a flat point, regardless of length
    /// - Every rejection costs a flat point, and the score may go negative
    pub fn delta(outcome: &Outcome) -> i32 {
        match outcome {
            Outcome::Accepted => ACCEPTED_POINTS,
            Outcome::Rejected(_) => -REJECTION_PENALTY,
        }
    }

    /// Apply an outcome to a running score, pinned to the `i32` range
    pub fn apply(score: i32, outcome: &Outcome) -> i32 {
        score.saturating_add(Self::delta(outcome))
    }
}

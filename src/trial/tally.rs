use crate::Probability;
use crate::play::Outcome;

/// Win and lose counts for one strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
}

impl Tally {
    pub fn add(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self {
                wins: self.wins + 1,
                ..self
            },
            Outcome::Lose => Self {
                losses: self.losses + 1,
                ..self
            },
        }
    }
    pub fn n(&self) -> usize {
        self.wins + self.losses
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
        }
    }
    /// Share of rounds ending in `outcome`. Zero for an empty tally.
    pub fn proportion(&self, outcome: Outcome) -> Probability {
        match self.n() {
            0 => 0.,
            n => self.count(outcome) as Probability / n as Probability,
        }
    }
}

use super::*;
use crate::DISPLAY_PRECISION;
use crate::Probability;
use crate::play::*;

/// Outcome proportions grouped by strategy.
///
/// Pure function of a record set. Printing lives in the `Display` impl,
/// which renders the strategy × outcome table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Summary {
    pub stay: Tally,
    pub switch: Tally,
}

impl Summary {
    pub fn tally(&self, strategy: Strategy) -> &Tally {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        self.tally(strategy).proportion(outcome)
    }
    pub fn win_rate(&self, strategy: Strategy) -> Probability {
        self.proportion(strategy, Outcome::Win)
    }
    pub fn lose_rate(&self, strategy: Strategy) -> Probability {
        self.proportion(strategy, Outcome::Lose)
    }
    /// How much more often switching wins than staying.
    pub fn advantage(&self) -> Probability {
        self.win_rate(Strategy::Switch) - self.win_rate(Strategy::Stay)
    }
    fn absorb(mut self, record: &Record) -> Self {
        match record.strategy {
            Strategy::Stay => self.stay = self.stay.add(record.outcome),
            Strategy::Switch => self.switch = self.switch.add(record.outcome),
        }
        self
    }
}

impl From<&[Record]> for Summary {
    fn from(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), Self::absorb)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<10}{:<10}{:>10}{:>12}", "strategy", "outcome", "rounds", "proportion")?;
        for &strategy in Strategy::all() {
            for &outcome in Outcome::all() {
                writeln!(
                    f,
                    "{:<10}{}{:>10}{:>12.*}",
                    strategy.to_string(),
                    outcome.colored(10),
                    self.tally(strategy).count(outcome),
                    DISPLAY_PRECISION,
                    self.proportion(strategy, outcome),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        [
            (Strategy::Stay, Outcome::Lose),
            (Strategy::Switch, Outcome::Win),
            (Strategy::Stay, Outcome::Win),
            (Strategy::Switch, Outcome::Lose),
            (Strategy::Stay, Outcome::Lose),
            (Strategy::Switch, Outcome::Win),
        ]
        .into_iter()
        .map(Record::from)
        .collect()
    }

    #[test]
    fn groups_by_strategy() {
        let summary = Summary::from(records().as_slice());
        assert_eq!(summary.stay, Tally { wins: 1, losses: 2 });
        assert_eq!(summary.switch, Tally { wins: 2, losses: 1 });
        assert!((summary.win_rate(Strategy::Switch) - 2. / 3.).abs() < 1e-6);
        assert!((summary.lose_rate(Strategy::Stay) - 2. / 3.).abs() < 1e-6);
        assert!((summary.advantage() - 1. / 3.).abs() < 1e-6);
    }

    #[test]
    fn table_rounds_proportions() {
        colored::control::set_override(false);
        let table = Summary::from(records().as_slice()).to_string();
        assert_eq!(table.lines().count(), 5);
        assert!(table.contains("0.67"));
        assert!(table.contains("0.33"));
        assert!(!table.contains("0.667"));
    }
}

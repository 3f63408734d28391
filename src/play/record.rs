use super::*;

/// One strategy's result in one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Record {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl From<(Strategy, Outcome)> for Record {
    fn from((strategy, outcome): (Strategy, Outcome)) -> Self {
        Self { strategy, outcome }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}{}", self.strategy.to_string(), self.outcome)
    }
}

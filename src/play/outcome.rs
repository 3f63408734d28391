use crate::doors::Prize;
use colored::*;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub const fn all() -> &'static [Self] {
        &[Self::Win, Self::Lose]
    }
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
        }
    }
    /// Label padded to `width` before coloring, so tables stay aligned.
    pub fn colored(&self, width: usize) -> ColoredString {
        let label = format!("{:<width$}", self.label(), width = width);
        match self {
            Self::Win => label.green(),
            Self::Lose => label.red(),
        }
    }
}

/// the car wins, a goat loses
impl From<Prize> for Outcome {
    fn from(prize: Prize) -> Self {
        match prize {
            Prize::Car => Self::Win,
            Prize::Goat => Self::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.colored(0))
    }
}

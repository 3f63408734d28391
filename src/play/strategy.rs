use crate::doors::Door;

/// What the contestant does once the host has opened a goat door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const fn all() -> &'static [Self] {
        &[Self::Stay, Self::Switch]
    }
    /// Final pick under this strategy. Staying keeps `pick`; switching
    /// takes the only door that is neither `pick` nor `opened`.
    /// The host never opens the contestant's pick, so the two must differ.
    pub fn change_door(&self, opened: Door, pick: Door) -> anyhow::Result<Door> {
        anyhow::ensure!(
            opened != pick,
            "host opened door {} which is the contestant's pick",
            opened
        );
        match self {
            Self::Stay => Ok(pick),
            Self::Switch => Ok(pick.third(opened).expect("distinct doors leave one")),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(Self::Stay),
            "switch" => Ok(Self::Switch),
            _ => Err(anyhow::anyhow!("unknown strategy {:?}", s)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Switch => write!(f, "switch"),
        }
    }
}

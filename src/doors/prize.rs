/// What stands behind a door.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    #[default]
    Goat,
    Car,
}

impl Prize {
    pub const fn is_car(&self) -> bool {
        matches!(self, Self::Car)
    }
    pub const fn is_goat(&self) -> bool {
        matches!(self, Self::Goat)
    }
}

impl TryFrom<char> for Prize {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'g' => Ok(Self::Goat),
            'c' => Ok(Self::Car),
            _ => Err(anyhow::anyhow!("unknown prize symbol {:?}", c)),
        }
    }
}

impl TryFrom<&str> for Prize {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goat" | "g" => Ok(Self::Goat),
            "car" | "c" => Ok(Self::Car),
            _ => Err(anyhow::anyhow!("unknown prize {:?}", s)),
        }
    }
}

impl std::fmt::Display for Prize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Goat => write!(f, "goat"),
            Self::Car => write!(f, "car"),
        }
    }
}

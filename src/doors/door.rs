use crate::Arbitrary;
use rand::Rng;

/// One of the three doors on stage, numbered 1 through 3.
///
/// Doors carry identity only. Their numbering is what the contestant
/// sees, and the discriminant doubles as a zero-based index into an
/// [`Arrangement`](super::Arrangement).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Door {
    One = 0isize,
    Two = 1isize,
    Three = 2isize,
}

impl Door {
    pub const fn all() -> &'static [Self] {
        &[Self::One, Self::Two, Self::Three]
    }
    /// Zero-based position of this door in an arrangement.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Number painted on the door.
    pub const fn number(&self) -> u8 {
        *self as u8 + 1
    }
    /// The two doors other than this one, in ascending order.
    pub fn others(&self) -> [Self; 2] {
        match self {
            Self::One => [Self::Two, Self::Three],
            Self::Two => [Self::One, Self::Three],
            Self::Three => [Self::One, Self::Two],
        }
    }
    /// The single door that is neither `self` nor `other`.
    /// None if the two doors coincide.
    pub fn third(&self, other: Self) -> Option<Self> {
        match (self, other) {
            (a, b) if *a == b => None,
            (Self::One, Self::Two) | (Self::Two, Self::One) => Some(Self::Three),
            (Self::One, Self::Three) | (Self::Three, Self::One) => Some(Self::Two),
            (Self::Two, Self::Three) | (Self::Three, Self::Two) => Some(Self::One),
            _ => unreachable!(),
        }
    }
    /// The contestant's initial pick: uniform over all doors and
    /// independent of whatever stands behind them.
    pub fn select_door<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        Self::from_index(rng.random_range(0..Self::all().len()))
    }
    fn from_index(i: usize) -> Self {
        Self::all()
            .get(i)
            .copied()
            .expect("index drawn from door range")
    }
}

/// door numbers as shown to the contestant
impl TryFrom<u8> for Door {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(anyhow::anyhow!("door {} outside 1..=3", n)),
        }
    }
}

impl TryFrom<&str> for Door {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let n = s
            .trim()
            .parse::<u8>()
            .map_err(|e| anyhow::anyhow!("door {:?}: {}", s, e))?;
        Self::try_from(n)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.number()
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Arbitrary for Door {
    fn random() -> Self {
        Self::select_door(&mut rand::rng())
    }
}

use super::*;
use crate::Arbitrary;
use crate::N_DOORS;
use crate::play::Outcome;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Prizes behind doors 1, 2 and 3 for a single round.
///
/// Holds exactly one car and two goats. No constructor can break this,
/// so the host and the judge below never see a malformed stage.
/// Arrangements are immutable once built.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Arrangement([Prize; N_DOORS]);

impl Arrangement {
    /// Uniformly random permutation of {goat, goat, car}.
    /// Each of the three distinct stages is equally likely.
    pub fn create_game<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut prizes = [Prize::Goat, Prize::Goat, Prize::Car];
        prizes.shuffle(rng);
        Self(prizes)
    }

    /// Stage with the car behind the given door.
    pub fn with_car(door: Door) -> Self {
        let mut prizes = [Prize::Goat; N_DOORS];
        prizes[door.index()] = Prize::Car;
        Self(prizes)
    }

    pub fn get(&self, door: Door) -> Prize {
        self.0[door.index()]
    }

    pub fn prizes(&self) -> &[Prize; N_DOORS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Door, Prize)> + '_ {
        Door::all().iter().map(|&door| (door, self.get(door)))
    }

    /// Door hiding the car.
    pub fn car(&self) -> Door {
        self.iter()
            .find(|(_, prize)| prize.is_car())
            .map(|(door, _)| door)
            .expect("arrangement holds exactly one car")
    }

    /// The host opens a door that is neither the contestant's pick nor
    /// the car. If the pick already hides the car both remaining doors
    /// are goats and the host flips a fair coin between them; otherwise
    /// exactly one door qualifies and the host has no choice.
    pub fn open_goat_door<R>(&self, pick: Door, rng: &mut R) -> Door
    where
        R: Rng,
    {
        let car = self.car();
        let goats = pick.others();
        let opened = match pick.third(car) {
            Some(goat) => goat,
            None => *goats.choose(rng).expect("two doors besides the pick"),
        };
        debug_assert!(opened != pick);
        debug_assert!(self.get(opened).is_goat());
        opened
    }

    /// WIN iff the final pick hides the car.
    pub fn determine_winner(&self, pick: Door) -> Outcome {
        Outcome::from(self.get(pick))
    }
}

/// checks the one-car invariant
impl TryFrom<[Prize; N_DOORS]> for Arrangement {
    type Error = anyhow::Error;
    fn try_from(prizes: [Prize; N_DOORS]) -> Result<Self, Self::Error> {
        match prizes.iter().filter(|p| p.is_car()).count() {
            1 => Ok(Self(prizes)),
            n => Err(anyhow::anyhow!(
                "arrangement needs exactly one car, found {}",
                n
            )),
        }
    }
}

/// accepts compact `gcg` or spelled-out `goat,car,goat`
impl TryFrom<&str> for Arrangement {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().trim_start_matches('[').trim_end_matches(']');
        let prizes = if s.contains(',') {
            s.split(',').map(Prize::try_from).collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars().map(Prize::try_from).collect::<Result<Vec<_>, _>>()?
        };
        let prizes: [Prize; N_DOORS] = prizes.try_into().map_err(|v: Vec<Prize>| {
            anyhow::anyhow!("expected {} doors, found {}", N_DOORS, v.len())
        })?;
        Self::try_from(prizes)
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}

impl Arbitrary for Arrangement {
    fn random() -> Self {
        Self::create_game(&mut rand::rng())
    }
}

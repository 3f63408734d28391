use super::*;
use crate::doors::*;
use rand::Rng;

/// A single play-through of the game.
///
/// Both strategies are judged against the same arrangement, initial pick
/// and opened door, so the strategy is the only thing that varies between
/// the two records a round produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Round {
    arrangement: Arrangement,
    pick: Door,
    opened: Door,
    stay: Outcome,
    switch: Outcome,
}

impl Round {
    /// set the stage, pick, reveal, then judge both strategies
    pub fn play_game<R>(rng: &mut R) -> anyhow::Result<Self>
    where
        R: Rng,
    {
        let arrangement = Arrangement::create_game(rng);
        let pick = Door::select_door(rng);
        Self::replay(arrangement, pick, rng)
    }

    /// Plays out a round from a fixed stage and initial pick.
    /// Only the host's coin flip, if any, draws from `rng`.
    pub fn replay<R>(arrangement: Arrangement, pick: Door, rng: &mut R) -> anyhow::Result<Self>
    where
        R: Rng,
    {
        let opened = arrangement.open_goat_door(pick, rng);
        let stay = Strategy::Stay.change_door(opened, pick)?;
        let switch = Strategy::Switch.change_door(opened, pick)?;
        let round = Self {
            arrangement,
            pick,
            opened,
            stay: arrangement.determine_winner(stay),
            switch: arrangement.determine_winner(switch),
        };
        log::trace!("{}", round);
        Ok(round)
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }
    pub fn pick(&self) -> Door {
        self.pick
    }
    pub fn opened(&self) -> Door {
        self.opened
    }
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }
    /// Door the contestant ends on under the given strategy.
    pub fn last(&self, strategy: Strategy) -> Door {
        match strategy {
            Strategy::Stay => self.pick,
            Strategy::Switch => self.pick.third(self.opened).expect("host never opens the pick"),
        }
    }
    /// Stay first, then switch.
    pub fn records(&self) -> [Record; 2] {
        [
            Record::from((Strategy::Stay, self.stay)),
            Record::from((Strategy::Switch, self.switch)),
        ]
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pick {} open {} | stay {} {} | switch {} {}",
            self.arrangement,
            self.pick,
            self.opened,
            self.last(Strategy::Stay),
            self.stay,
            self.last(Strategy::Switch),
            self.switch,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn strategies_share_the_stage() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..1000 {
            let round = Round::play_game(rng).unwrap();
            let car = round.arrangement().car();
            assert!(round.opened() != round.pick());
            assert!(round.opened() != car);
            assert_eq!(round.outcome(Strategy::Stay).is_win(), round.pick() == car);
            assert_eq!(round.outcome(Strategy::Switch).is_win(), round.pick() != car);
        }
    }

    #[test]
    fn exactly_one_strategy_wins() {
        let ref mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..1000 {
            let [stay, switch] = Round::play_game(rng).unwrap().records();
            assert_eq!(stay.strategy, Strategy::Stay);
            assert_eq!(switch.strategy, Strategy::Switch);
            assert!(stay.outcome.is_win() ^ switch.outcome.is_win());
        }
    }

    #[test]
    fn replay_from_goat_pick_is_forced() {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let stage = Arrangement::try_from("cgg").unwrap();
        let round = Round::replay(stage, Door::Two, rng).unwrap();
        assert_eq!(round.opened(), Door::Three);
        assert_eq!(round.last(Strategy::Switch), Door::One);
        assert_eq!(round.outcome(Strategy::Stay), Outcome::Lose);
        assert_eq!(round.outcome(Strategy::Switch), Outcome::Win);
    }

    #[test]
    fn replay_from_car_pick_stays_ahead() {
        let ref mut rng = SmallRng::seed_from_u64(14);
        let stage = Arrangement::try_from("cgg").unwrap();
        let round = Round::replay(stage, Door::One, rng).unwrap();
        assert!(matches!(round.opened(), Door::Two | Door::Three));
        assert_eq!(round.outcome(Strategy::Stay), Outcome::Win);
        assert_eq!(round.outcome(Strategy::Switch), Outcome::Lose);
    }

    #[test]
    fn serializes_doors_as_numbers() {
        let stage = Arrangement::try_from("cgg").unwrap();
        let round = Round::replay(stage, Door::Two, &mut SmallRng::seed_from_u64(16)).unwrap();
        let json = serde_json::to_value(round).unwrap();
        assert_eq!(json["pick"], 2);
        assert_eq!(json["opened"], 3);
        assert_eq!(json["stay"], "LOSE");
        assert_eq!(json["switch"], "WIN");
    }

    #[test]
    fn same_seed_same_round() {
        let a = Round::play_game(&mut SmallRng::seed_from_u64(15)).unwrap();
        let b = Round::play_game(&mut SmallRng::seed_from_u64(15)).unwrap();
        assert_eq!(a, b);
    }
}

use super::*;
use crate::Seed;
use crate::play::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Records from n independent rounds, two per round in generation order.
///
/// Each round draws from its own `SmallRng` seeded by hashing the trial
/// seed with the round index. Rounds never contend for a random source,
/// and a seed reproduces the same records whether or not the rounds
/// ran in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    seed: Seed,
    records: Vec<Record>,
}

impl Trial {
    /// Runs `n >= 1` rounds.
    pub fn play_n_games(n: usize, seed: Seed) -> anyhow::Result<Self> {
        anyhow::ensure!(n >= 1, "a trial needs at least one game, got {}", n);
        log::info!("playing {} games with seed {:#018x}", n, seed);
        let start = std::time::Instant::now();
        let records = Self::rounds(n, seed)?
            .iter()
            .flat_map(Round::records)
            .collect::<Vec<Record>>();
        let trial = Self { seed, records };
        log::info!("played {} games in {:?}", n, start.elapsed());
        log::debug!("{:?}", trial.summary());
        Ok(trial)
    }

    /// The random source for round `i`.
    pub fn rng(seed: Seed, i: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::default();
        seed.hash(hasher);
        i.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    #[cfg(feature = "parallel")]
    fn rounds(n: usize, seed: Seed) -> anyhow::Result<Vec<Round>> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        (0..n)
            .into_par_iter()
            .map(|i| Round::play_game(&mut Self::rng(seed, i)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn rounds(n: usize, seed: Seed) -> anyhow::Result<Vec<Round>> {
        (0..n)
            .map(|i| Round::play_game(&mut Self::rng(seed, i)))
            .collect()
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    /// Number of records, twice the number of rounds.
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn games(&self) -> usize {
        self.records.len() / 2
    }
    pub fn summary(&self) -> Summary {
        Summary::from(self.records())
    }
}

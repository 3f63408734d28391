//! Paired simulation of the three-door Monty Hall game.
//!
//! One [`play::Round`] hides a car behind one of three doors, lets the
//! contestant pick, has the host open a goat door, and then judges both the
//! stay and the switch strategy against the very same arrangement and pick.
//! A [`trial::Trial`] repeats rounds and summarizes win rates per strategy.
pub mod doors;
pub mod play;
pub mod trial;

#[cfg(feature = "cli")]
pub mod cli;

pub use doors::*;
pub use play::*;
pub use trial::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win and lose proportions over a set of rounds.
pub type Probability = f32;
/// Seed from which every per-round random source of a trial is derived.
pub type Seed = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Doors on stage. Exactly one hides the car.
pub const N_DOORS: usize = 3;
/// Rounds played when the caller does not ask for a specific count.
pub const DEFAULT_GAMES: usize = 100;
/// Decimal digits shown for proportions in the summary table.
pub const DISPLAY_PRECISION: usize = 2;
/// Long-run win rate of always staying.
pub const STAY_EXPECTATION: Probability = 1. / 3.;
/// Long-run win rate of always switching.
pub const SWITCH_EXPECTATION: Probability = 2. / 3.;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to stderr
/// so stdout carries only program output.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

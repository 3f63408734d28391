pub mod outcome;
pub use outcome::*;

pub mod record;
pub use record::*;

pub mod round;
pub use round::*;

pub mod strategy;
pub use strategy::*;

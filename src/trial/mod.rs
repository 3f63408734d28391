pub mod summary;
pub use summary::*;

pub mod tally;
pub use tally::*;

#[allow(clippy::module_inception)]
pub mod trial;
pub use trial::*;

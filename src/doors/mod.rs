pub mod arrangement;
pub use arrangement::*;

pub mod door;
pub use door::*;

pub mod prize;
pub use prize::*;

//! Compiled-in descriptors, one per floating-point format.

mod double;
mod extended;
mod single;

pub use double::DOUBLE;
pub use extended::EXTENDED;
pub use single::SINGLE;

//! Domain models for the garden value calculator

mod calculation;
mod options;
mod plant;

pub use calculation::*;
pub use options::*;
pub use plant::*;

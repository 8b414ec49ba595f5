//! Domain models for crop economics

mod environment;
mod farm;
mod plant;

pub use environment::*;
pub use farm::*;
pub use plant::*;

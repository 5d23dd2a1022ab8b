//! Core library for Life-like cellular automata on a toroidal board.

pub mod engine;
pub mod error;
pub mod grid;
pub mod rle;
pub mod rule;

pub use engine::{Automaton, GridWindow, StartMode};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use rle::PatternDescriptor;
pub use rule::RuleSet;

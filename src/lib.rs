#![warn(clippy::all)]

mod cache;
mod counts;
mod error;
mod grid;
mod gui;
mod identity;
mod rules;
mod simulator;
mod staticity;

pub use cache::NeighborCache;
pub use counts::IdentityCounts;
pub use error::GridError;
pub use grid::Grid;
pub use gui::{App, Config};
pub use identity::Identity;
pub use rules::{Rule, RuleInput, RuleSet};
pub use simulator::{CellView, Simulator};
pub use staticity::StaticityClassifier;

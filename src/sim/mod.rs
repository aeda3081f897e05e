//! Level model
//!
//! Everything here is pure data and parsing:
//! - No rendering or platform dependencies
//! - Randomness only through a caller-supplied RNG
//! - Actors kept in plan scan order

pub mod actor;
pub mod level;
pub mod state;
pub mod vector;

pub use actor::{Actor, ActorFactory, ActorKind, Coin, Lava, Player};
pub use level::{Legend, LegendEntry, Level, LevelError, PlanDefect, Tile};
pub use state::{GameState, Status};
pub use vector::Vector;

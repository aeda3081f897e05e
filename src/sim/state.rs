//! Per-run game state
//!
//! A `Level` never changes after parsing. A run works on its own copy of
//! the starting actors plus a status flag.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, Player};
use super::level::Level;

/// Outcome of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub level: Level,
    pub actors: Vec<Actor>,
    pub status: Status,
}

impl GameState {
    /// Begin a run on `level`
    pub fn start(level: &Level) -> Self {
        Self {
            level: level.clone(),
            actors: level.start_actors().to_vec(),
            status: Status::Playing,
        }
    }

    /// The first player actor, if the plan had one
    pub fn player(&self) -> Option<&Player> {
        self.actors.iter().find_map(|a| match a {
            Actor::Player(p) => Some(p),
            _ => None,
        })
    }
}

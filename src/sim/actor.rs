//! Movable actors: the player, coins and moving lava
//!
//! Actors live alongside the background grid rather than in it. Each kind
//! has a fixed size and a construction rule that turns a grid cell into a
//! starting position.

use std::f32::consts::TAU;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::level::LevelError;
use super::vector::Vector;
use crate::consts::*;

/// Actor type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Coin,
    Lava,
}

impl ActorKind {
    /// Name used for CSS classes and log output
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Coin => "coin",
            ActorKind::Lava => "lava",
        }
    }

    /// Fixed size of every actor of this kind
    pub fn size(&self) -> Vector {
        match self {
            ActorKind::Player => PLAYER_SIZE,
            ActorKind::Coin => COIN_SIZE,
            ActorKind::Lava => LAVA_SIZE,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vector,
    pub speed: Vector,
}

impl Player {
    /// Spawn at a grid cell. The player is taller than one tile, so it is
    /// lifted half a unit to keep its feet on the cell's baseline.
    pub fn create(cell: Vector) -> Self {
        Self {
            pos: cell + PLAYER_SPAWN_OFFSET,
            speed: Vector::ZERO,
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vector,
    /// Resting position the wobble oscillates around
    pub base_pos: Vector,
    /// Wobble phase in [0, 2π)
    pub wobble: f32,
}

impl Coin {
    /// Spawn centered in a grid cell with a random wobble phase
    pub fn create<R: Rng + ?Sized>(cell: Vector, rng: &mut R) -> Self {
        let base_pos = cell + COIN_SPAWN_OFFSET;
        Self {
            pos: base_pos,
            base_pos,
            wobble: rng.random_range(0.0..TAU),
        }
    }
}

/// A moving lava block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lava {
    pub pos: Vector,
    pub speed: Vector,
    /// Where dripping lava jumps back to; `None` for bouncing lava
    pub reset: Option<Vector>,
}

impl Lava {
    /// Build the lava variant selected by its plan character
    pub fn create(cell: Vector, ch: char) -> Result<Self, LevelError> {
        let (speed, reset) = match ch {
            '=' => (LAVA_HORIZONTAL_SPEED, None),
            '|' => (LAVA_VERTICAL_SPEED, None),
            'v' => (LAVA_DRIP_SPEED, Some(cell)),
            _ => {
                return Err(LevelError::InvalidActorVariant {
                    kind: ActorKind::Lava,
                    ch,
                });
            }
        };
        Ok(Self {
            pos: cell,
            speed,
            reset,
        })
    }
}

/// Any actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Actor {
    Player(Player),
    Coin(Coin),
    Lava(Lava),
}

impl Actor {
    pub fn kind(&self) -> ActorKind {
        match self {
            Actor::Player(_) => ActorKind::Player,
            Actor::Coin(_) => ActorKind::Coin,
            Actor::Lava(_) => ActorKind::Lava,
        }
    }

    pub fn pos(&self) -> Vector {
        match self {
            Actor::Player(p) => p.pos,
            Actor::Coin(c) => c.pos,
            Actor::Lava(l) => l.pos,
        }
    }

    pub fn size(&self) -> Vector {
        self.kind().size()
    }
}

/// Constructor stored in a level legend: grid cell, source character and
/// random source in, actor out
pub type ActorFactory = fn(Vector, char, &mut dyn RngCore) -> Result<Actor, LevelError>;

pub fn spawn_player(cell: Vector, _ch: char, _rng: &mut dyn RngCore) -> Result<Actor, LevelError> {
    Ok(Actor::Player(Player::create(cell)))
}

pub fn spawn_coin(cell: Vector, _ch: char, rng: &mut dyn RngCore) -> Result<Actor, LevelError> {
    Ok(Actor::Coin(Coin::create(cell, rng)))
}

pub fn spawn_lava(cell: Vector, ch: char, _rng: &mut dyn RngCore) -> Result<Actor, LevelError> {
    Lava::create(cell, ch).map(Actor::Lava)
}

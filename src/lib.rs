//! Dark Blue - a browser platform game prototype
//!
//! Core modules:
//! - `sim`: Level model (vectors, tiles, actors, plan parsing, run state)
//! - `levels`: Built-in level plans
//! - `renderer`: DOM layout and drawing
//! - `settings`: Persisted preferences

pub mod levels;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use sim::Vector;

/// Game configuration constants
pub mod consts {
    use super::Vector;

    /// Pixels per grid unit
    pub const SCALE: f32 = 20.0;

    /// Actor sizes in grid units
    pub const PLAYER_SIZE: Vector = Vector::new(0.8, 1.5);
    pub const COIN_SIZE: Vector = Vector::new(0.6, 0.6);
    pub const LAVA_SIZE: Vector = Vector::new(1.0, 1.0);

    /// Player stands on the bottom of its cell (1.5 tall, lifted half a unit)
    pub const PLAYER_SPAWN_OFFSET: Vector = Vector::new(0.0, -0.5);
    /// Coin sits roughly centered in its cell
    pub const COIN_SPAWN_OFFSET: Vector = Vector::new(0.2, 0.1);

    /// Lava velocities in grid units per second
    pub const LAVA_HORIZONTAL_SPEED: Vector = Vector::new(2.0, 0.0);
    pub const LAVA_VERTICAL_SPEED: Vector = Vector::new(0.0, 2.0);
    pub const LAVA_DRIP_SPEED: Vector = Vector::new(0.0, 3.0);
}

/// Seed for a run: the configured one, or the current time
pub fn run_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(now_seed)
}

#[cfg(target_arch = "wasm32")]
fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

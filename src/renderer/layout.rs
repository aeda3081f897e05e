//! Pixel layout for the DOM renderer

use glam::Vec2;

use crate::sim::{Actor, GameState, Level};

/// Background table geometry and cell classes
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayout {
    pub width_px: f32,
    pub row_height_px: f32,
    /// Class name per cell, `rows[y][x]`
    pub rows: Vec<Vec<&'static str>>,
}

impl BackgroundLayout {
    pub fn new(level: &Level, scale: f32) -> Self {
        Self {
            width_px: level.width as f32 * scale,
            row_height_px: scale,
            rows: level
                .rows()
                .iter()
                .map(|row| row.iter().map(|t| t.as_str()).collect())
                .collect(),
        }
    }
}

/// One actor element: class list plus pixel rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSprite {
    pub class: String,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl ActorSprite {
    pub fn new(actor: &Actor, scale: f32) -> Self {
        Self {
            class: format!("actor {}", actor.kind().as_str()),
            pos: Vec2::from(actor.pos()) * scale,
            size: Vec2::from(actor.size()) * scale,
        }
    }

    /// Inline CSS for the element
    pub fn style(&self) -> String {
        format!(
            "width: {}; height: {}; left: {}; top: {}",
            px(self.size.x),
            px(self.size.y),
            px(self.pos.x),
            px(self.pos.y)
        )
    }
}

pub fn actor_sprites(actors: &[Actor], scale: f32) -> Vec<ActorSprite> {
    actors.iter().map(|a| ActorSprite::new(a, scale)).collect()
}

/// Class list for the wrapper element
pub fn game_class(state: &GameState) -> String {
    format!("game {}", state.status.as_str())
}

pub fn px(value: f32) -> String {
    format!("{}px", value)
}

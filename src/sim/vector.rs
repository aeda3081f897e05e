//! 2-D coordinate/size value
//!
//! Positions, velocities and sizes are all measured in grid units, with
//! x growing to the right and y growing downward.

use std::ops::{Add, Mul};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable 2-D vector in grid units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    /// Scale both components by `factor`
    #[inline]
    pub fn times(self, factor: f32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        self.plus(other)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, factor: f32) -> Vector {
        self.times(factor)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

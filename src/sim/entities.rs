//! Destructible level pieces: blocks and pigs
//!
//! Health only ever changes through `damage`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::BLOCK_CRACK_HEALTH;

/// A rectangular structure block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub health: f32,
}

impl Block {
    pub fn new(x: f32, y: f32, w: f32, h: f32, health: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            health,
        }
    }

    /// Apply a hit. Returns true when the block is destroyed.
    pub fn damage(&mut self, power: f32) -> bool {
        self.health -= power;
        self.is_destroyed()
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    /// Visual lean (radians) that grows as the block wears down
    pub fn tilt(&self) -> f32 {
        ((90.0 - self.health) * 0.05).sin() * std::f32::consts::PI / 180.0
    }

    /// Damaged enough to draw with the cracked palette
    pub fn is_cracked(&self) -> bool {
        self.health <= BLOCK_CRACK_HEALTH
    }
}

/// A target pig (circle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pig {
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
}

impl Pig {
    pub fn new(pos: Vec2, radius: f32, health: f32) -> Self {
        Self {
            pos,
            radius,
            health,
        }
    }

    /// Apply a hit. Returns true when the pig is destroyed.
    pub fn damage(&mut self, power: f32) -> bool {
        self.health -= power;
        self.is_destroyed()
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

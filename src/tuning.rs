//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. Missing keys in a
//! JSON override fall back to the compile-time defaults, so a file can tweak
//! just the values it cares about.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime-tunable physics and gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub play_width: f32,
    pub play_height: f32,
    pub ground_margin: f32,
    pub sling_x: f32,
    pub sling_height: f32,

    // === Projectile ===
    pub gravity: f32,
    pub ground_bounce: f32,
    pub ground_friction: f32,
    pub max_dt: f32,
    pub bird_radius: f32,
    pub trail_length: usize,
    pub rest_speed: f32,
    pub rest_threshold: f32,
    pub auto_reset_delay: f32,

    // === Launch ===
    pub max_launch: f32,
    pub launch_power: f32,
    pub grab_slack: f32,

    // === Collision & damage ===
    pub contact_restitution: f32,
    pub block_health: f32,
    pub block_damage_scale: f32,
    pub block_score: u64,
    pub pig_radius: f32,
    pub pig_health: f32,
    pub pig_damage_scale: f32,
    pub pig_score: u64,
    pub base_damage: f32,
    pub victory_score: u64,

    // === Out of bounds ===
    pub out_of_bounds_margin: f32,
    pub out_of_bounds_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            ground_margin: GROUND_MARGIN,
            sling_x: SLING_X,
            sling_height: SLING_HEIGHT,

            gravity: GRAVITY,
            ground_bounce: GROUND_BOUNCE,
            ground_friction: GROUND_FRICTION,
            max_dt: MAX_DT,
            bird_radius: BIRD_RADIUS,
            trail_length: TRAIL_LENGTH,
            rest_speed: REST_SPEED,
            rest_threshold: REST_THRESHOLD,
            auto_reset_delay: AUTO_RESET_DELAY,

            max_launch: MAX_LAUNCH,
            launch_power: LAUNCH_POWER,
            grab_slack: GRAB_SLACK,

            contact_restitution: CONTACT_RESTITUTION,
            block_health: BLOCK_HEALTH,
            block_damage_scale: BLOCK_DAMAGE_SCALE,
            block_score: BLOCK_SCORE,
            pig_radius: PIG_RADIUS,
            pig_health: PIG_HEALTH,
            pig_damage_scale: PIG_DAMAGE_SCALE,
            pig_score: PIG_SCORE,
            base_damage: BASE_DAMAGE,
            victory_score: VICTORY_SCORE,

            out_of_bounds_margin: OUT_OF_BOUNDS_MARGIN,
            out_of_bounds_speed: OUT_OF_BOUNDS_SPEED,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load overrides from a file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.max_dt.is_nan() || self.max_dt <= 0.0 {
            self.max_dt = defaults.max_dt;
        }
        self.bird_radius = self.bird_radius.max(1.0);
        self.pig_radius = self.pig_radius.max(1.0);
        self.max_launch = self.max_launch.max(0.0);
        self.grab_slack = self.grab_slack.max(0.0);
        self.trail_length = self.trail_length.max(1);
        self.play_width = self.play_width.max(1.0);
        self.play_height = self.play_height.max(self.ground_margin + 1.0);
        self
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.play_height - self.ground_margin
    }

    /// Rest position of the bird in the sling
    #[inline]
    pub fn sling_anchor(&self) -> Vec2 {
        Vec2::new(self.sling_x, self.ground_y() - self.sling_height)
    }
}

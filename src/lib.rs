//! Sling Siege - A single-screen sling and structures physics game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile physics, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `hud`: Read-only snapshots for HUD and render sinks

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::{FrameSnapshot, HudSnapshot};
pub use tuning::Tuning;

/// Game configuration constants
///
/// These are the compile-time defaults. [`Tuning`] mirrors each of them and
/// can override any subset at runtime.
pub mod consts {
    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 960.0;
    pub const PLAY_HEIGHT: f32 = 540.0;
    /// Ground line sits this far above the bottom edge
    pub const GROUND_MARGIN: f32 = 60.0;
    /// Sling anchor offset from the left edge and above the ground
    pub const SLING_X: f32 = 150.0;
    pub const SLING_HEIGHT: f32 = 110.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1600.0;
    /// Vertical velocity factor on ground bounce (sign flips)
    pub const GROUND_BOUNCE: f32 = 0.35;
    /// Horizontal velocity factor on ground bounce
    pub const GROUND_FRICTION: f32 = 0.9;

    /// Frame delta cap, prevents tunneling when the frame clock stalls
    pub const MAX_DT: f32 = 0.05;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// Bird defaults
    pub const BIRD_RADIUS: f32 = 16.0;
    pub const TRAIL_LENGTH: usize = 40;
    /// Below this speed a grounded bird counts as resting
    pub const REST_SPEED: f32 = 20.0;
    /// Seconds of rest before the auto-reset countdown starts
    pub const REST_THRESHOLD: f32 = 1.5;
    /// Countdown after the rest threshold before the level rebuilds
    pub const AUTO_RESET_DELAY: f32 = 1.0;

    /// Launch control
    pub const MAX_LAUNCH: f32 = 160.0;
    pub const LAUNCH_POWER: f32 = 3.0;
    /// Extra grab distance around the bird for drag start
    pub const GRAB_SLACK: f32 = 10.0;

    /// Velocity removed along the contact normal on block hits (1.0 = stop, 2.0 = elastic)
    pub const CONTACT_RESTITUTION: f32 = 1.4;

    /// Block defaults
    pub const BLOCK_HEALTH: f32 = 45.0;
    pub const BLOCK_DAMAGE_SCALE: f32 = 0.08;
    pub const BLOCK_SCORE: u64 = 50;
    /// Blocks render as cracked at or below this health
    pub const BLOCK_CRACK_HEALTH: f32 = 20.0;

    /// Pig defaults
    pub const PIG_RADIUS: f32 = 14.0;
    pub const PIG_HEALTH: f32 = 20.0;
    pub const PIG_DAMAGE_SCALE: f32 = 0.1;
    pub const PIG_SCORE: u64 = 150;

    /// Flat damage added to every hit
    pub const BASE_DAMAGE: f32 = 5.0;
    /// Bonus for clearing all pigs
    pub const VICTORY_SCORE: u64 = 500;

    /// Out-of-bounds reset: distance past the right edge
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 120.0;
    /// Out-of-bounds reset: per-axis speed the bird must drop under
    pub const OUT_OF_BOUNDS_SPEED: f32 = 10.0;

    /// Aim guide sampling
    pub const PREVIEW_SAMPLES: usize = 18;
    pub const PREVIEW_STEP: f32 = 0.08;
    /// Trail fade per rendered frame
    pub const TRAIL_FADE: f32 = 0.02;
}

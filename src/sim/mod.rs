//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta clamped, no wall-clock reads
//! - Stable iteration order (arena slot order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod bird;
pub mod collision;
pub mod entities;
pub mod geometry;
pub mod launch;
pub mod state;
pub mod tick;

pub use arena::{Arena, Handle};
pub use bird::{Bird, TrailPoint};
pub use collision::{
    CollisionResult, ContactReport, circle_circle_collision, circle_rect_collision,
    circle_rect_contact, resolve_contacts,
};
pub use entities::{Block, Pig};
pub use geometry::Rect;
pub use launch::{aim_preview, clamp_pull, launch_velocity};
pub use state::{GameEvent, GamePhase, GameState, ResetCause, Sling, Status};
pub use tick::{TickInput, clamp_dt, tick};

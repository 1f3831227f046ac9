//! Launch control: sling pull and aim guide
//!
//! Pulling back from the anchor launches the opposite way. Pull distance is
//! capped at `max_launch`, and velocity is proportional to the capped pull.

use glam::Vec2;

use crate::tuning::Tuning;

/// Clamp the pointer so it sits at most `max_launch` from the anchor
///
/// Direction is preserved, only the magnitude is capped.
pub fn clamp_pull(anchor: Vec2, pointer: Vec2, max_launch: f32) -> Vec2 {
    let pull = pointer - anchor;
    let len = pull.length();
    if len > max_launch {
        anchor + pull * (max_launch / len)
    } else {
        pointer
    }
}

/// Launch velocity for a (clamped) pointer position
#[inline]
pub fn launch_velocity(anchor: Vec2, pointer: Vec2, power: f32) -> Vec2 {
    (anchor - pointer) * power
}

/// Sample the predicted flight path for the aim guide
///
/// Coarse gravity-only integration, ignoring obstacles. Stops at the first
/// sample that would fall below the ground.
pub fn aim_preview(start: Vec2, launch_vel: Vec2, tuning: &Tuning) -> Vec<Vec2> {
    use crate::consts::{PREVIEW_SAMPLES, PREVIEW_STEP};

    let ground_y = tuning.ground_y();
    let mut pos = start;
    let mut vel = launch_vel;
    let mut points = Vec::with_capacity(PREVIEW_SAMPLES);

    for _ in 0..PREVIEW_SAMPLES {
        vel.y += tuning.gravity * PREVIEW_STEP;
        pos += vel * PREVIEW_STEP;
        if pos.y > ground_y {
            break;
        }
        points.push(pos);
    }
    points
}

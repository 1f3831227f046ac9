//! Per-frame simulation step
//!
//! Order within a frame: input edges, bird integration, contact pass,
//! rest-based auto reset, out-of-bounds reset, victory, phase refresh.

use glam::Vec2;

use super::collision::resolve_contacts;
use super::geometry::clamp;
use super::state::{GameEvent, GameState, ResetCause, Status};

/// Input edges for a single frame, in play-area coordinates
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer pressed (drag start attempt)
    pub pointer_down: Option<Vec2>,
    /// Pointer moved while held
    pub pointer_move: Option<Vec2>,
    /// Pointer released or left the play area
    pub pointer_up: bool,
    /// Manual reset (button or key)
    pub reset: bool,
}

/// Clamp a raw frame delta into `[0, max_dt]` (NaN becomes 0)
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    clamp(dt, 0.0, max_dt)
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = clamp_dt(dt, state.tuning.max_dt);
    state.frames += 1;

    if input.reset {
        state.reset();
    }
    if let Some(p) = input.pointer_down {
        state.begin_drag(p);
    }
    if let Some(p) = input.pointer_move {
        state.drag_to(p);
    }
    if input.pointer_up {
        state.release_drag();
    }

    state.bird.integrate(dt, &state.tuning);

    let report = resolve_contacts(
        &mut state.bird,
        &mut state.blocks,
        &mut state.pigs,
        &state.tuning,
    );
    state.score += report.score;
    if report
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PigDestroyed { .. }))
    {
        state.status = Status::PigDown;
    }
    for event in report.events {
        state.push_event(event);
    }

    // Rest-based auto reset (runs after victory too)
    if state.bird.launched && state.bird.rest_timer > state.tuning.rest_threshold {
        state.auto_reset_timer += dt;
        if state.auto_reset_timer > state.tuning.auto_reset_delay {
            state.rebuild(ResetCause::Rested);
        }
    } else {
        state.auto_reset_timer = 0.0;
    }

    if !state.won && out_of_bounds(state) {
        state.rebuild(ResetCause::OutOfBounds);
    }

    if state.pigs.is_empty() && !state.won {
        state.won = true;
        state.score += state.tuning.victory_score;
        state.status = Status::Victory;
        state.push_event(GameEvent::Victory { score: state.score });
        log::info!(
            "Victory with {} shots, score {}",
            state.shots_fired,
            state.score
        );
    }

    state.refresh_phase();
}

/// Bird drifted past the right edge and has nearly stopped
fn out_of_bounds(state: &GameState) -> bool {
    let t = &state.tuning;
    let bird = &state.bird;
    bird.pos.x > t.play_width + t.out_of_bounds_margin
        && bird.vel.x.abs() < t.out_of_bounds_speed
        && bird.vel.y.abs() < t.out_of_bounds_speed
}

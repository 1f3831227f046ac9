//! Read-only views of the session for the HUD and render sinks
//!
//! Sinks never write back into [`GameState`]; they get owned, serializable
//! snapshots built once per frame.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect, TrailPoint, aim_preview, launch_velocity};

/// What the HUD shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub shots: u32,
    pub pigs: usize,
    pub score: u64,
    pub won: bool,
    pub status: &'static str,
    /// Aiming hint while the bird is still in the sling
    pub hint: Option<&'static str>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            shots: state.shots_fired,
            pigs: state.pigs_remaining(),
            score: state.score,
            won: state.won,
            status: state.status.as_str(),
            hint: (!state.bird.launched).then_some("Drag to aim, release to launch"),
        }
    }

    /// Single-line text form for console hosts
    pub fn line(&self) -> String {
        format!(
            "Shots: {} | Pigs: {} | Score: {} | {}",
            self.shots, self.pigs, self.score, self.status
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub rect: Rect,
    pub health: f32,
    pub tilt: f32,
    pub cracked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PigView {
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    /// Simulation frame counter, keeps counting across rebuilds
    pub frame: u64,
    pub phase: GamePhase,
    pub bird_pos: Vec2,
    pub bird_radius: f32,
    pub trail: Vec<TrailPoint>,
    pub sling_anchor: Vec2,
    pub sling_attach: Vec2,
    /// Predicted path while aiming, empty otherwise
    pub aim_preview: Vec<Vec2>,
    pub blocks: Vec<BlockView>,
    pub pigs: Vec<PigView>,
    pub hud: HudSnapshot,
}

impl FrameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let anchor = state.sling_anchor();
        let aim_preview = if state.sling.dragging {
            let vel = launch_velocity(anchor, state.sling.pointer, state.tuning.launch_power);
            aim_preview(state.bird.pos, vel, &state.tuning)
        } else {
            Vec::new()
        };

        Self {
            frame: state.frames,
            phase: state.phase,
            bird_pos: state.bird.pos,
            bird_radius: state.bird.radius,
            trail: state.bird.trail.clone(),
            sling_anchor: anchor,
            sling_attach: state.sling_attach(),
            aim_preview,
            blocks: state
                .blocks
                .values()
                .map(|b| BlockView {
                    rect: b.rect,
                    health: b.health,
                    tilt: b.tilt(),
                    cracked: b.is_cracked(),
                })
                .collect(),
            pigs: state
                .pigs
                .values()
                .map(|p| PigView {
                    pos: p.pos,
                    radius: p.radius,
                    health: p.health,
                })
                .collect(),
            hud: HudSnapshot::from_state(state),
        }
    }
}

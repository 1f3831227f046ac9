//! Session state and core simulation types
//!
//! [`GameState`] owns every entity. Blocks and pigs are created only by
//! [`GameState::rebuild`] and removed only by the contact pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Handle};
use super::bird::Bird;
use super::entities::{Block, Pig};
use super::launch::{clamp_pull, launch_velocity};
use crate::consts::MAX_PENDING_EVENTS;
use crate::tuning::Tuning;

/// Current phase of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird armed in the sling, untouched
    Ready,
    /// Player is dragging the sling
    Aiming,
    /// Bird launched and moving
    InFlight,
    /// Bird grounded and slow past the rest threshold, auto reset counting down
    Resting,
    /// Level won, waiting for a rebuild
    Resolved,
}

/// Why the level was rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    /// Explicit reset from the player
    Manual,
    /// Bird sat still long enough
    Rested,
    /// Bird drifted off the right edge
    OutOfBounds,
}

impl ResetCause {
    /// Transient message a host can flash when the rebuild happens
    pub fn message(&self) -> &'static str {
        match self {
            ResetCause::Manual => "Level reset",
            ResetCause::Rested => "Resetting…",
            ResetCause::OutOfBounds => "Out of bounds, resetting…",
        }
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { velocity: Vec2 },
    BlockDestroyed { handle: Handle },
    PigDestroyed { handle: Handle },
    Victory { score: u64 },
    LevelRebuilt { cause: ResetCause },
}

/// HUD status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    ReadyToLaunch,
    PullBack,
    InFlight,
    PigDown,
    Victory,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ReadyToLaunch => "Ready to launch",
            Status::PullBack => "Pull back and release",
            Status::InFlight => "In flight",
            Status::PigDown => "Pig down!",
            Status::Victory => "Victory! Reset to play again",
        }
    }
}

/// Sling drag state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Sling {
    pub dragging: bool,
    /// Clamped pointer position while dragging
    pub pointer: Vec2,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub bird: Bird,
    pub blocks: Arena<Block>,
    pub pigs: Arena<Pig>,
    pub sling: Sling,
    pub shots_fired: u32,
    pub score: u64,
    pub won: bool,
    /// Seconds spent past the rest threshold
    pub auto_reset_timer: f32,
    pub phase: GamePhase,
    pub status: Status,
    /// Simulation frame counter (not reset by rebuilds)
    pub frames: u64,
    /// Pending events, oldest first
    ///
    /// The host drains these once per frame with [`GameState::drain_events`].
    /// Past [`MAX_PENDING_EVENTS`] the oldest are dropped.
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a session with the level already built
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let bird = Bird::new(tuning.sling_anchor(), tuning.bird_radius);
        let mut state = Self {
            tuning,
            bird,
            blocks: Arena::new(),
            pigs: Arena::new(),
            sling: Sling::default(),
            shots_fired: 0,
            score: 0,
            won: false,
            auto_reset_timer: 0.0,
            phase: GamePhase::Ready,
            status: Status::ReadyToLaunch,
            frames: 0,
            events: Vec::new(),
        };
        state.build_level();
        state
    }

    #[inline]
    pub fn sling_anchor(&self) -> Vec2 {
        self.tuning.sling_anchor()
    }

    /// Lay out the fixed structure and reset all session counters
    fn build_level(&mut self) {
        let g = self.tuning.ground_y();
        let hp = self.tuning.block_health;

        self.blocks = [
            Block::new(620.0, g - 60.0, 60.0, 60.0, hp),
            Block::new(680.0, g - 60.0, 60.0, 60.0, hp),
            Block::new(650.0, g - 120.0, 60.0, 60.0, hp),
            Block::new(720.0, g - 60.0, 60.0, 60.0, hp),
            Block::new(780.0, g - 60.0, 60.0, 60.0, hp),
            Block::new(750.0, g - 120.0, 60.0, 60.0, hp),
            Block::new(705.0, g - 180.0, 100.0, 30.0, hp),
        ]
        .into_iter()
        .collect();

        let (r, hp) = (self.tuning.pig_radius, self.tuning.pig_health);
        self.pigs = [
            Pig::new(Vec2::new(705.0, g - 215.0), r, hp),
            Pig::new(Vec2::new(650.0, g - 95.0), r, hp),
            Pig::new(Vec2::new(770.0, g - 95.0), r, hp),
        ]
        .into_iter()
        .collect();

        self.score = 0;
        self.shots_fired = 0;
        self.won = false;
        self.auto_reset_timer = 0.0;
        self.sling = Sling::default();
        let anchor = self.sling_anchor();
        self.bird.radius = self.tuning.bird_radius;
        self.bird.reset(anchor);
        self.phase = GamePhase::Ready;
        self.status = Status::ReadyToLaunch;
    }

    /// Tear down and rebuild the level
    pub fn rebuild(&mut self, cause: ResetCause) {
        log::info!(
            "Rebuilding level ({:?}): score {} after {} shots",
            cause,
            self.score,
            self.shots_fired
        );
        self.build_level();
        self.push_event(GameEvent::LevelRebuilt { cause });
    }

    /// Manual reset, allowed at any time
    pub fn reset(&mut self) {
        self.rebuild(ResetCause::Manual);
    }

    /// Start dragging if the pointer grabs the armed bird
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.bird.launched || self.sling.dragging {
            return false;
        }
        let grab = self.bird.radius + self.tuning.grab_slack;
        if pointer.distance(self.bird.pos) > grab {
            return false;
        }
        self.sling = Sling {
            dragging: true,
            pointer: clamp_pull(self.sling_anchor(), pointer, self.tuning.max_launch),
        };
        self.phase = GamePhase::Aiming;
        self.status = Status::PullBack;
        true
    }

    /// Move the sling pointer (ignored when not dragging)
    pub fn drag_to(&mut self, pointer: Vec2) {
        if !self.sling.dragging {
            return;
        }
        self.sling.pointer = clamp_pull(self.sling_anchor(), pointer, self.tuning.max_launch);
    }

    /// Release the sling and launch. Returns the launch velocity.
    pub fn release_drag(&mut self) -> Option<Vec2> {
        if !self.sling.dragging {
            return None;
        }
        self.sling.dragging = false;

        let velocity = launch_velocity(
            self.sling_anchor(),
            self.sling.pointer,
            self.tuning.launch_power,
        );
        if !self.bird.launch(velocity) {
            return None;
        }
        self.shots_fired += 1;
        self.phase = GamePhase::InFlight;
        self.status = Status::InFlight;
        self.push_event(GameEvent::Launched { velocity });
        log::info!("Shot {} launched at {:?}", self.shots_fired, velocity);
        Some(velocity)
    }

    /// Where the sling band attaches (pointer while dragging, else the bird)
    pub fn sling_attach(&self) -> Vec2 {
        if self.sling.dragging {
            self.sling.pointer
        } else {
            self.bird.pos
        }
    }

    /// Derive the phase from flags and timers after a tick
    pub(crate) fn refresh_phase(&mut self) {
        self.phase = if self.won {
            GamePhase::Resolved
        } else if self.sling.dragging {
            GamePhase::Aiming
        } else if !self.bird.launched {
            GamePhase::Ready
        } else if self.bird.rest_timer > self.tuning.rest_threshold {
            GamePhase::Resting
        } else {
            GamePhase::InFlight
        };
    }

    pub fn pigs_remaining(&self) -> usize {
        self.pigs.len()
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
        if self.events.len() > MAX_PENDING_EVENTS {
            let excess = self.events.len() - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Projectile dynamics
//!
//! The bird sits in the sling until launched, then falls under constant
//! gravity and bounces on the ground with heavy energy loss. A grounded,
//! slow bird accumulates `rest_timer`, the only signal the session uses for
//! the rest-based auto reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Trail point for bird rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 when recorded, faded toward 0 by the render path
    pub life: f32,
}

/// The projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub launched: bool,
    /// Seconds spent grounded below rest speed
    pub rest_timer: f32,
    /// Trail history (oldest first)
    pub trail: Vec<TrailPoint>,
}

impl Bird {
    /// New bird resting in the sling at `anchor`
    pub fn new(anchor: Vec2, radius: f32) -> Self {
        Self {
            pos: anchor,
            vel: Vec2::ZERO,
            radius,
            launched: false,
            rest_timer: 0.0,
            trail: Vec::new(),
        }
    }

    /// Put the bird back in the sling
    pub fn reset(&mut self, anchor: Vec2) {
        self.pos = anchor;
        self.vel = Vec2::ZERO;
        self.launched = false;
        self.rest_timer = 0.0;
        self.trail.clear();
    }

    /// Launch with the given initial velocity
    ///
    /// Returns false (and changes nothing) if already in flight.
    pub fn launch(&mut self, vel: Vec2) -> bool {
        if self.launched {
            return false;
        }
        self.vel = vel;
        self.launched = true;
        true
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one step. No-op while in the sling.
    pub fn integrate(&mut self, dt: f32, tuning: &Tuning) {
        if !self.launched {
            return;
        }

        self.vel.y += tuning.gravity * dt;
        self.pos += self.vel * dt;

        let ground_y = tuning.ground_y();
        if self.pos.y + self.radius > ground_y {
            self.pos.y = ground_y - self.radius;
            if self.vel.y > 0.0 {
                self.vel.y *= -tuning.ground_bounce;
                self.vel.x *= tuning.ground_friction;
            }
        }

        if self.speed() < tuning.rest_speed && self.pos.y + self.radius >= ground_y - 1.0 {
            self.rest_timer += dt;
        } else {
            self.rest_timer = 0.0;
        }

        self.record_trail(tuning.trail_length);
    }

    /// Record current position to trail, evicting the oldest past `max_len`
    fn record_trail(&mut self, max_len: usize) {
        self.trail.push(TrailPoint {
            pos: self.pos,
            life: 1.0,
        });
        if self.trail.len() > max_len {
            let excess = self.trail.len() - max_len;
            self.trail.drain(..excess);
        }
    }

    /// Fade trail points (render path only, never called by the simulation)
    pub fn fade_trail(&mut self, step: f32) {
        for point in &mut self.trail {
            point.life = (point.life - step).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const DT: f32 = 0.016;

    fn launched_bird(tuning: &Tuning, vel: Vec2) -> Bird {
        let mut bird = Bird::new(tuning.sling_anchor(), tuning.bird_radius);
        assert!(bird.launch(vel));
        bird
    }

    #[test]
    fn test_unlaunched_bird_does_not_move() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(tuning.sling_anchor(), BIRD_RADIUS);
        bird.integrate(DT, &tuning);
        assert_eq!(bird.pos, tuning.sling_anchor());
        assert_eq!(bird.vel, Vec2::ZERO);
        assert!(bird.trail.is_empty());
    }

    #[test]
    fn test_launch_only_once() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(100.0, -100.0));
        assert!(!bird.launch(Vec2::new(5.0, 5.0)));
        assert_eq!(bird.vel, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn test_ground_bounce_loses_energy() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(100.0, 400.0));
        bird.pos.y = tuning.ground_y() - bird.radius - 1.0;
        bird.integrate(DT, &tuning);

        assert_eq!(bird.pos.y, tuning.ground_y() - bird.radius);
        let expected_vy = -(400.0 + GRAVITY * DT) * GROUND_BOUNCE;
        assert!((bird.vel.y - expected_vy).abs() < 1e-3);
        assert!((bird.vel.x - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_straight_up_shot_comes_to_rest() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(0.0, -500.0));
        let start_y = bird.pos.y;
        let mut apex = start_y;
        let mut rested_at = None;

        for frame in 0..600 {
            bird.integrate(DT, &tuning);
            apex = apex.min(bird.pos.y);
            if bird.rest_timer > 0.0 {
                rested_at = Some(frame);
                break;
            }
        }

        assert!(apex < start_y - 50.0, "bird should climb before falling");
        assert!(rested_at.is_some(), "bird never came to rest");
        assert_eq!(bird.pos.y, tuning.ground_y() - bird.radius);
        assert!(bird.speed() < REST_SPEED);
    }

    #[test]
    fn test_trail_bounded_and_newest_last() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(200.0, -300.0));
        for _ in 0..100 {
            bird.integrate(DT, &tuning);
        }
        assert_eq!(bird.trail.len(), TRAIL_LENGTH);
        assert_eq!(bird.trail.last().map(|p| p.pos), Some(bird.pos));
        assert!(bird.trail.iter().all(|p| p.life == 1.0));
    }

    #[test]
    fn test_fade_trail_floors_at_zero() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(200.0, -300.0));
        bird.integrate(DT, &tuning);
        for _ in 0..60 {
            bird.fade_trail(TRAIL_FADE);
        }
        assert_eq!(bird.trail[0].life, 0.0);
    }

    #[test]
    fn test_reset_returns_to_sling() {
        let tuning = Tuning::default();
        let mut bird = launched_bird(&tuning, Vec2::new(200.0, -300.0));
        for _ in 0..10 {
            bird.integrate(DT, &tuning);
        }
        bird.reset(tuning.sling_anchor());
        assert!(!bird.launched);
        assert_eq!(bird.pos, tuning.sling_anchor());
        assert_eq!(bird.vel, Vec2::ZERO);
        assert!(bird.trail.is_empty());
        assert_eq!(bird.rest_timer, 0.0);
    }

    proptest! {
        #[test]
        fn airborne_gravity_adds_exactly_g_dt(
            vx in -500.0f32..500.0,
            vy in -800.0f32..-100.0,
            dt in 0.001f32..0.05,
        ) {
            let tuning = Tuning::default();
            let mut bird = launched_bird(&tuning, Vec2::new(vx, vy));
            // High in the air: no ground contact this step
            bird.pos.y = 100.0;
            bird.integrate(dt, &tuning);
            prop_assert!((bird.vel.y - (vy + GRAVITY * dt)).abs() < 1e-2);
            prop_assert_eq!(bird.vel.x, vx);
        }

        #[test]
        fn never_ends_below_ground(
            vx in -800.0f32..800.0,
            vy in -800.0f32..800.0,
            steps in 1usize..200,
        ) {
            let tuning = Tuning::default();
            let mut bird = launched_bird(&tuning, Vec2::new(vx, vy));
            for _ in 0..steps {
                bird.integrate(0.05, &tuning);
                prop_assert!(bird.pos.y + bird.radius <= tuning.ground_y());
            }
        }

        #[test]
        fn bounce_heights_shrink(vy in 200.0f32..1500.0) {
            let tuning = Tuning::default();
            let mut bird = launched_bird(&tuning, Vec2::new(0.0, vy));
            let mut rebounds = Vec::new();
            for _ in 0..2000 {
                let falling = bird.vel.y > 0.0;
                bird.integrate(0.001, &tuning);
                if falling && bird.vel.y < 0.0 {
                    rebounds.push(-bird.vel.y);
                }
                if rebounds.len() >= 3 {
                    break;
                }
            }
            for pair in rebounds.windows(2) {
                prop_assert!(pair[1] < pair[0]);
            }
        }
    }
}

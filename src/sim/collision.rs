//! Collision detection and response
//!
//! The bird is a circle; blocks are axis-aligned rectangles and pigs are
//! circles. Only blocks push the bird back out. Pigs just take damage.

use glam::Vec2;

use super::arena::Arena;
use super::bird::Bird;
use super::entities::{Block, Pig};
use super::geometry::Rect;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Nearest point on the obstacle
    pub point: Vec2,
    /// Contact normal (pointing from the obstacle toward the circle center)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle vs rectangle overlap test
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    (center - nearest).length_squared() < radius * radius
}

/// Circle vs rectangle contact info
///
/// A center sitting exactly on (or inside) the rectangle has no separation
/// direction. The distance then falls back to 1, which leaves a zero normal:
/// no push, no reflection.
pub fn circle_rect_contact(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    if !circle_rect_collision(center, radius, rect) {
        return CollisionResult::miss();
    }
    let point = rect.nearest_point(center);
    let delta = center - point;
    let dist = match delta.length() {
        d if d > 0.0 => d,
        _ => 1.0,
    };
    CollisionResult {
        hit: true,
        point,
        normal: delta / dist,
        penetration: radius - dist,
    }
}

/// Circle vs circle overlap test
#[inline]
pub fn circle_circle_collision(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Remove `restitution` times the velocity component along `normal`
///
/// 2.0 is a mirror bounce, 1.0 kills the normal component.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    velocity - restitution * velocity.dot(normal) * normal
}

/// Push the bird out of a block and bounce it
pub fn resolve_circle_rect(bird: &mut Bird, rect: &Rect, restitution: f32) {
    let contact = circle_rect_contact(bird.pos, bird.radius, rect);
    if !contact.hit {
        return;
    }
    bird.pos += contact.normal * contact.penetration;
    bird.vel = reflect_velocity(bird.vel, contact.normal, restitution);
}

/// Score and events produced by one contact pass
#[derive(Debug, Clone, Default)]
pub struct ContactReport {
    pub score: u64,
    pub events: Vec<GameEvent>,
}

/// Resolve every contact between the bird and the live blocks and pigs
///
/// Blocks are processed first, then pigs, each in arena order. Every
/// overlapping entity is hit; destroyed ones leave the arena immediately so
/// later contacts in the same pass cannot touch them again.
pub fn resolve_contacts(
    bird: &mut Bird,
    blocks: &mut Arena<Block>,
    pigs: &mut Arena<Pig>,
    tuning: &Tuning,
) -> ContactReport {
    let mut report = ContactReport::default();

    for handle in blocks.handles() {
        let Some(block) = blocks.get_mut(handle) else {
            continue;
        };
        if !circle_rect_collision(bird.pos, bird.radius, &block.rect) {
            continue;
        }

        let speed = bird.speed();
        resolve_circle_rect(bird, &block.rect, tuning.contact_restitution);

        let power = speed * tuning.block_damage_scale + tuning.base_damage;
        let destroyed = block.damage(power);
        log::debug!(
            "Block {:?} hit: power {:.1}, health {:.1}",
            handle,
            power,
            block.health
        );
        if destroyed {
            blocks.remove(handle);
            report.score += tuning.block_score;
            report.events.push(GameEvent::BlockDestroyed { handle });
        }
    }

    for handle in pigs.handles() {
        let Some(pig) = pigs.get_mut(handle) else {
            continue;
        };
        if !circle_circle_collision(bird.pos, bird.radius, pig.pos, pig.radius) {
            continue;
        }

        let power = bird.speed() * tuning.pig_damage_scale + tuning.base_damage;
        let destroyed = pig.damage(power);
        log::debug!(
            "Pig {:?} hit: power {:.1}, health {:.1}",
            handle,
            power,
            pig.health
        );
        if destroyed {
            pigs.remove(handle);
            report.score += tuning.pig_score;
            report.events.push(GameEvent::PigDestroyed { handle });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn bird_at(pos: Vec2, vel: Vec2) -> Bird {
        let mut bird = Bird::new(pos, BIRD_RADIUS);
        bird.launch(vel);
        bird
    }

    #[test]
    fn test_circle_rect_collision() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        assert!(circle_rect_collision(Vec2::new(90.0, 130.0), 16.0, &rect));
        assert!(!circle_rect_collision(Vec2::new(80.0, 130.0), 16.0, &rect));
        // Corner: nearest point is (100, 100), distance ~14.1
        assert!(circle_rect_collision(Vec2::new(90.0, 90.0), 16.0, &rect));
        assert!(!circle_rect_collision(Vec2::new(85.0, 85.0), 16.0, &rect));
    }

    #[test]
    fn test_contact_normal_points_out_of_left_face() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        let result = circle_rect_contact(Vec2::new(90.0, 130.0), 16.0, &rect);
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(100.0, 130.0));
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert!((result.penetration - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_contact_center_inside_uses_fallback() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        let result = circle_rect_contact(Vec2::new(130.0, 130.0), 16.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::ZERO);
        assert!(result.normal.is_finite());
    }

    #[test]
    fn test_contact_miss() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        assert!(!circle_rect_contact(Vec2::new(0.0, 0.0), 16.0, &rect).hit);
    }

    #[test]
    fn test_resolve_pushes_out_and_reflects() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        let mut bird = bird_at(Vec2::new(90.0, 130.0), Vec2::new(200.0, 0.0));
        resolve_circle_rect(&mut bird, &rect, CONTACT_RESTITUTION);

        assert!((bird.pos.x - 84.0).abs() < 1e-4);
        // 200 - 1.4 * 200 = -80
        assert!((bird.vel.x - (-80.0)).abs() < 1e-3);
        assert_eq!(bird.vel.y, 0.0);
        assert!(!circle_rect_collision(bird.pos, bird.radius, &rect));
    }

    #[test]
    fn test_resolve_inside_leaves_bird_alone() {
        let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
        let mut bird = bird_at(Vec2::new(130.0, 130.0), Vec2::new(50.0, 25.0));
        resolve_circle_rect(&mut bird, &rect, CONTACT_RESTITUTION);
        assert_eq!(bird.pos, Vec2::new(130.0, 130.0));
        assert_eq!(bird.vel, Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_reflect_velocity() {
        let v = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0), 2.0);
        assert!((v.x + 100.0).abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
    }

    #[test]
    fn test_circle_circle_collision() {
        assert!(circle_circle_collision(Vec2::ZERO, 16.0, Vec2::new(29.0, 0.0), 14.0));
        assert!(!circle_circle_collision(Vec2::ZERO, 16.0, Vec2::new(30.0, 0.0), 14.0));
    }

    #[test]
    fn test_heavy_hit_destroys_block_and_scores() {
        let tuning = Tuning::default();
        let mut blocks: Arena<Block> = [Block::new(100.0, 100.0, 60.0, 60.0, BLOCK_HEALTH)]
            .into_iter()
            .collect();
        let mut pigs = Arena::new();
        // power = 562.5 * 0.08 + 5 = 50
        let mut bird = bird_at(Vec2::new(90.0, 130.0), Vec2::new(562.5, 0.0));

        let report = resolve_contacts(&mut bird, &mut blocks, &mut pigs, &tuning);

        assert!(blocks.is_empty());
        assert_eq!(report.score, BLOCK_SCORE);
        assert_eq!(report.events.len(), 1);
        assert!(bird.vel.x < 0.0, "bird should bounce back");
    }

    #[test]
    fn test_light_hit_only_damages_block() {
        let tuning = Tuning::default();
        let mut blocks: Arena<Block> = [Block::new(100.0, 100.0, 60.0, 60.0, BLOCK_HEALTH)]
            .into_iter()
            .collect();
        let mut pigs = Arena::new();
        let mut bird = bird_at(Vec2::new(90.0, 130.0), Vec2::new(100.0, 0.0));

        let report = resolve_contacts(&mut bird, &mut blocks, &mut pigs, &tuning);

        assert_eq!(report.score, 0);
        let block = blocks.values().next().unwrap();
        // 45 - (100 * 0.08 + 5)
        assert!((block.health - 32.0).abs() < 1e-4);
    }

    #[test]
    fn test_pig_hit_does_not_push_bird() {
        let tuning = Tuning::default();
        let mut blocks = Arena::new();
        let mut pigs: Arena<Pig> = [Pig::new(Vec2::new(120.0, 100.0), PIG_RADIUS, PIG_HEALTH)]
            .into_iter()
            .collect();
        // power = 200 * 0.1 + 5 = 25 -> destroyed
        let mut bird = bird_at(Vec2::new(100.0, 100.0), Vec2::new(200.0, 0.0));

        let report = resolve_contacts(&mut bird, &mut blocks, &mut pigs, &tuning);

        assert!(pigs.is_empty());
        assert_eq!(report.score, PIG_SCORE);
        assert_eq!(bird.pos, Vec2::new(100.0, 100.0));
        assert_eq!(bird.vel, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_all_simultaneous_contacts_processed() {
        let tuning = Tuning::default();
        // Bird wedged between two blocks and touching two pigs
        let mut blocks: Arena<Block> = [
            Block::new(70.0, 90.0, 20.0, 20.0, 1.0),
            Block::new(110.0, 90.0, 20.0, 20.0, 1.0),
        ]
        .into_iter()
        .collect();
        let mut pigs: Arena<Pig> = [
            Pig::new(Vec2::new(100.0, 75.0), PIG_RADIUS, 1.0),
            Pig::new(Vec2::new(100.0, 125.0), PIG_RADIUS, 1.0),
        ]
        .into_iter()
        .collect();
        let mut bird = bird_at(Vec2::new(100.0, 100.0), Vec2::ZERO);

        let report = resolve_contacts(&mut bird, &mut blocks, &mut pigs, &tuning);

        assert!(blocks.is_empty());
        assert!(pigs.is_empty());
        assert_eq!(report.score, 2 * BLOCK_SCORE + 2 * PIG_SCORE);
        assert_eq!(report.events.len(), 4);
    }
}

//! Swept collision detection.
//!
//! Objects here can move several times their own radius in one frame, so
//! comparing post-advance positions alone lets fast movers tunnel through
//! each other. Instead we sample both paths backward from the post-advance
//! position toward the pre-advance one and keep the closest approach.

use glam::Vec2;

use super::object::MovingObject;

/// Minimum distance between two objects' paths over the last frame.
///
/// The sample count scales with the largest velocity component so that
/// consecutive samples are at most one unit apart; the 0.1 floor forces a
/// single sample when both objects are stationary.
pub fn closest_approach(pos1: Vec2, vel1: Vec2, pos2: Vec2, vel2: Vec2) -> f32 {
    let d_max = vel1
        .x
        .abs()
        .max(vel1.y.abs())
        .max(vel2.x.abs())
        .max(vel2.y.abs())
        .max(0.1);

    let mut min_dist = f32::MAX;
    let mut i = 0.0f32;
    while i <= d_max {
        let t = i / d_max;
        let sample1 = pos1 - vel1 * t;
        let sample2 = pos2 - vel2 * t;
        min_dist = min_dist.min(sample1.distance(sample2));
        i += 1.0;
    }

    min_dist
}

/// Whether two objects' swept paths came within their combined radii
/// during the last frame.
pub fn collides(a: &impl MovingObject, b: &impl MovingObject) -> bool {
    closest_approach(a.pos(), a.vel(), b.pos(), b.vel()) <= a.radius() + b.radius()
}

//! Base state shared by every moving object: position, velocity, the
//! alive flag, and the wraparound motion rule.

use glam::Vec2;

/// Rectangular play field, y-up (`min` is the bottom-left corner).
///
/// Objects leaving the field re-enter flush with the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Teleport a position that left the field to the opposite edge.
    ///
    /// Each axis wraps independently, and the re-entry coordinate is the
    /// far edge itself, not the crossing distance carried over.
    pub fn wrap(&self, mut pos: Vec2) -> Vec2 {
        if pos.x < self.min.x {
            pos.x = self.max.x;
        } else if pos.x > self.max.x {
            pos.x = self.min.x;
        }

        if pos.y < self.min.y {
            pos.y = self.max.y;
        } else if pos.y > self.max.y {
            pos.y = self.min.y;
        }

        pos
    }
}

/// Position, velocity and liveness of a moving object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            alive: true,
        }
    }
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            alive: true,
        }
    }

    /// One step of the base motion rule: add velocity, then wrap if a
    /// boundary is configured.
    pub fn advance(&mut self, bounds: Option<Bounds>) {
        self.pos += self.vel;
        if let Some(bounds) = bounds {
            self.pos = bounds.wrap(self.pos);
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Capability surface shared by the ship, projectiles and asteroids.
///
/// `kill` has the unconditional default; the ship overrides it to gate on
/// its invulnerability window.
pub trait MovingObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Collision radius; objects with no physical extent report 0.
    fn radius(&self) -> f32 {
        0.0
    }

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn vel(&self) -> Vec2 {
        self.body().vel
    }

    fn is_alive(&self) -> bool {
        self.body().alive
    }

    fn kill(&mut self) {
        self.body_mut().kill();
    }
}

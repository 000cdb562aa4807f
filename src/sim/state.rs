//! Game entities and world state.
//!
//! Everything the simulation owns lives here: the ship, the projectile
//! list, the asteroid field, score/lives, and the seeded RNG that drives
//! wave spawning.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::object::{Body, Bounds, MovingObject};
use crate::consts::*;
use crate::{velocity_from_heading, wrap_degrees};

/// A fired projectile. Expires after a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub body: Body,
    /// Frames remaining before self-expiry
    pub life: u32,
}

impl Projectile {
    /// Fire from `origin` along `degrees` at muzzle speed.
    pub fn fire(origin: Vec2, degrees: f32) -> Self {
        Self {
            body: Body::new(origin, velocity_from_heading(degrees, PROJECTILE_SPEED)),
            life: PROJECTILE_LIFE,
        }
    }

    /// Base motion, then burn one frame of life. Self-kills on expiry.
    pub fn advance(&mut self, bounds: Option<Bounds>) {
        self.body.advance(bounds);

        if self.life > 0 {
            self.life -= 1;
            if self.life == 0 {
                self.kill();
            }
        }
    }
}

impl MovingObject for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn radius(&self) -> f32 {
        PROJECTILE_RADIUS
    }
}

/// Asteroid size class. Strictly ordered: larger means bigger radius,
/// slower spin, and more fragments on a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn radius(self) -> f32 {
        match self {
            Self::Large => LARGE_RADIUS,
            Self::Medium => MEDIUM_RADIUS,
            Self::Small => SMALL_RADIUS,
        }
    }

    /// Degrees of rotation added per frame
    pub fn spin(self) -> i32 {
        match self {
            Self::Large => LARGE_SPIN,
            Self::Medium => MEDIUM_SPIN,
            Self::Small => SMALL_SPIN,
        }
    }
}

/// A tumbling rock. Fragmentation only ever produces strictly smaller
/// size classes; `Small` leaves nothing behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub size: AsteroidSize,
    /// Current tumble angle, normalized to [0, 360)
    pub rotation: i32,
}

impl Asteroid {
    /// Spawn heading in `degrees` at the wave base speed.
    pub fn launch(size: AsteroidSize, pos: Vec2, degrees: f32) -> Self {
        Self::with_velocity(size, pos, velocity_from_heading(degrees, ASTEROID_SPEED))
    }

    pub fn with_velocity(size: AsteroidSize, pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, vel),
            size,
            rotation: 0,
        }
    }

    /// Base motion, then tumble by the size class spin rate.
    pub fn advance(&mut self, bounds: Option<Bounds>) {
        self.body.advance(bounds);
        self.rotation = wrap_degrees(self.rotation + self.size.spin());
    }

    /// Resolve a hit: the asteroid dies and hands its fragments to the
    /// caller, which takes ownership of them.
    pub fn hit(&mut self) -> Vec<Asteroid> {
        self.kill();

        let pos = self.pos();
        let Vec2 { x: dx, y: dy } = self.vel();

        match self.size {
            AsteroidSize::Large => vec![
                Self::with_velocity(AsteroidSize::Medium, pos, Vec2::new(dx, dy + 1.0)),
                Self::with_velocity(AsteroidSize::Medium, pos, Vec2::new(dx, dy - 1.0)),
                Self::with_velocity(AsteroidSize::Small, pos, Vec2::new(dx + 2.0, dy)),
            ],
            AsteroidSize::Medium => vec![
                Self::with_velocity(AsteroidSize::Small, pos, Vec2::new(dx + 3.0, dy)),
                Self::with_velocity(AsteroidSize::Small, pos, Vec2::new(dx - 3.0, dy)),
            ],
            AsteroidSize::Small => Vec::new(),
        }
    }
}

impl MovingObject for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// The player's ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Facing in degrees, normalized to [0, 360)
    pub rotation: i32,
    /// Frames of invulnerability remaining (0 = vulnerable)
    pub invulnerable: u32,
    /// Thrust was applied since the last advance
    thrusted: bool,
    /// Latched copy of `thrusted` for the next draw call
    pub show_thrust: bool,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            body: Body::default(),
            rotation: SHIP_START_ROTATION,
            invulnerable: 0,
            thrusted: false,
            show_thrust: false,
        }
    }
}

impl Ship {
    pub fn rotate_left(&mut self) {
        self.rotation = wrap_degrees(self.rotation + SHIP_ROTATE_STEP);
    }

    pub fn rotate_right(&mut self) {
        self.rotation = wrap_degrees(self.rotation - SHIP_ROTATE_STEP);
    }

    /// Accumulate velocity along the current facing. There is no drag, so
    /// repeated thrust keeps adding up.
    pub fn thrust(&mut self) {
        self.body.vel += velocity_from_heading(self.rotation as f32, SHIP_THRUST);
        self.thrusted = true;
    }

    /// Build a projectile at the ship's position and facing, carrying the
    /// ship's own velocity on top of the muzzle speed.
    pub fn fire(&self) -> Projectile {
        let mut projectile = Projectile::fire(self.pos(), self.rotation as f32);
        projectile.body.vel += self.vel();
        projectile
    }

    pub fn set_invulnerable(&mut self, frames: u32) {
        self.invulnerable = frames;
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0
    }

    /// Base motion, count down the invulnerability window, and latch the
    /// thrust flag for the next draw call.
    pub fn advance(&mut self, bounds: Option<Bounds>) {
        self.body.advance(bounds);
        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.show_thrust = self.thrusted;
        self.thrusted = false;
    }
}

impl MovingObject for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn radius(&self) -> f32 {
        SHIP_RADIUS
    }

    /// No effect while the invulnerability window is open.
    fn kill(&mut self) {
        if self.is_invulnerable() {
            return;
        }
        self.body.kill();
    }
}

/// Complete world state. Owns every live entity.
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: Bounds,
    pub ship: Ship,
    /// Live asteroids, in spawn/splice order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles, in creation order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    pub lives: u32,
    pub rng: Pcg32,
}

impl World {
    /// Build a world with a fresh wave and a briefly invulnerable ship.
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut world = Self {
            bounds,
            ship: Ship::default(),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            lives: MAX_LIVES,
            rng: Pcg32::seed_from_u64(seed),
        };

        world.spawn_wave();

        // A rock may spawn right on top of the ship
        world.ship.set_invulnerable(SPAWN_INVULN_FRAMES);

        world
    }

    /// Fill the field with a fresh wave of large asteroids at random
    /// positions and headings.
    pub fn spawn_wave(&mut self) {
        for _ in 0..WAVE_SIZE {
            let pos = self.random_point();
            let heading = self.rng.random_range(0.0..360.0);
            self.asteroids
                .push(Asteroid::launch(AsteroidSize::Large, pos, heading));
        }
        log::info!("Wave spawned: {} large asteroids", WAVE_SIZE);
    }

    fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(self.bounds.min.x..=self.bounds.max.x),
            self.rng.random_range(self.bounds.min.y..=self.bounds.max.y),
        )
    }
}

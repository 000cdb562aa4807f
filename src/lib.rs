//! Rockstorm - a fixed-timestep asteroids simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, swept collisions, game state)
//! - `render`: Draw-side boundary (trait the host renderer implements)
//!
//! Rendering, input polling and windowing live in the host application;
//! the core only consumes a [`sim::TickInput`] per frame and emits draw
//! calls through [`render::Renderer`].

pub mod render;
pub mod sim;

pub use sim::{Bounds, TickInput, World, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ship collision radius
    pub const SHIP_RADIUS: f32 = 10.0;
    /// Degrees of facing change per rotate input
    pub const SHIP_ROTATE_STEP: i32 = 6;
    /// Velocity added along the facing per thrust input
    pub const SHIP_THRUST: f32 = 0.5;
    /// Initial facing (ship sprite points up)
    pub const SHIP_START_ROTATION: i32 = 90;
    /// Invulnerability granted on (re)spawn, in frames
    pub const SPAWN_INVULN_FRAMES: u32 = 100;
    /// Blink period of an invulnerable ship (drawn the first half)
    pub const SHIP_BLINK_PACE: u32 = 10;
    /// The ship sprite is authored facing up, so draw calls subtract this
    pub const ROTATION_DRAW_OFFSET: i32 = 90;

    /// Projectile muzzle speed (before inheriting ship velocity)
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Projectile collision radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Frames a projectile survives before expiring
    pub const PROJECTILE_LIFE: u32 = 40;

    /// Asteroid radii by size class
    pub const LARGE_RADIUS: f32 = 16.0;
    pub const MEDIUM_RADIUS: f32 = 8.0;
    pub const SMALL_RADIUS: f32 = 4.0;
    /// Asteroid spin rates (degrees per frame) by size class
    pub const LARGE_SPIN: i32 = 2;
    pub const MEDIUM_SPIN: i32 = 5;
    pub const SMALL_SPIN: i32 = 10;
    /// Speed of a freshly spawned wave asteroid
    pub const ASTEROID_SPEED: f32 = 1.0;

    /// Asteroids in a fresh wave
    pub const WAVE_SIZE: usize = 5;
    /// Lives at the start of a run
    pub const MAX_LIVES: u32 = 3;

    /// HUD text offsets from the top-left corner
    pub const SCORE_X_OFFSET: f32 = 5.0;
    pub const SCORE_Y_OFFSET: f32 = -20.0;
    pub const LIVES_Y_OFFSET: f32 = -40.0;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Build a velocity from a heading in degrees and a speed
#[inline]
pub fn velocity_from_heading(degrees: f32, speed: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(speed * radians.cos(), speed * radians.sin())
}

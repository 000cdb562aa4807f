//! Draw-side boundary.
//!
//! The core never owns a renderer; the host hands one in once per frame
//! and [`draw_world`] walks the live entities in a fixed order. Renderer
//! calls are pure side effects and must not touch simulation state.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{MovingObject, World};

/// Rendering calls the simulation core emits, one per live entity per
/// frame, plus the HUD text.
pub trait Renderer {
    /// A projectile dot
    fn draw_dot(&mut self, pos: Vec2);
    fn draw_ship(&mut self, pos: Vec2, facing_degrees: i32, show_thrust: bool);
    fn draw_large_asteroid(&mut self, pos: Vec2, rotation_degrees: i32);
    fn draw_medium_asteroid(&mut self, pos: Vec2, rotation_degrees: i32);
    fn draw_small_asteroid(&mut self, pos: Vec2, rotation_degrees: i32);
    fn draw_text(&mut self, pos: Vec2, text: &str);
}

/// Draw one frame: ship, projectiles, asteroids, then the HUD.
pub fn draw_world(world: &World, renderer: &mut impl Renderer) {
    if world.ship.is_alive() && ship_visible(world.ship.invulnerable) {
        renderer.draw_ship(
            world.ship.pos(),
            world.ship.rotation - ROTATION_DRAW_OFFSET,
            world.ship.show_thrust,
        );
    }

    for projectile in &world.projectiles {
        renderer.draw_dot(projectile.pos());
    }

    for asteroid in &world.asteroids {
        use crate::sim::AsteroidSize::*;
        match asteroid.size {
            Large => renderer.draw_large_asteroid(asteroid.pos(), asteroid.rotation),
            Medium => renderer.draw_medium_asteroid(asteroid.pos(), asteroid.rotation),
            Small => renderer.draw_small_asteroid(asteroid.pos(), asteroid.rotation),
        }
    }

    let hud_x = world.bounds.min.x + SCORE_X_OFFSET;
    renderer.draw_text(
        Vec2::new(hud_x, world.bounds.max.y + SCORE_Y_OFFSET),
        &format!("Points: {}", world.score),
    );
    renderer.draw_text(
        Vec2::new(hud_x, world.bounds.max.y + LIVES_Y_OFFSET),
        &format!("Lives: {}", world.lives),
    );
}

/// An invulnerable ship blinks: drawn only for the first half of each
/// blink period, using the countdown itself as the clock.
fn ship_visible(invulnerable: u32) -> bool {
    invulnerable == 0 || invulnerable % SHIP_BLINK_PACE < SHIP_BLINK_PACE / 2
}

//! Fixed timestep simulation tick.
//!
//! One `tick` per frame: apply the sampled input, then run the world's
//! advance/collide/reap sequence. The ordering inside [`World::advance`]
//! decides which entity wins a near-simultaneous collision, so it must
//! not be rearranged.

use super::collision::collides;
use super::object::MovingObject;
use super::state::{Asteroid, Ship, World};
use crate::consts::*;

/// Input commands for a single tick, sampled once per frame by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Rotate the ship counter-clockwise
    pub left: bool,
    /// Rotate the ship clockwise
    pub right: bool,
    /// Apply thrust along the current facing
    pub thrust: bool,
    /// Fire a projectile
    pub fire: bool,
}

/// Advance the world by one frame under the given input.
pub fn tick(world: &mut World, input: &TickInput) {
    world.handle_input(input);
    world.advance();
}

impl World {
    /// Apply one frame of input. A dead ship takes no commands.
    pub fn handle_input(&mut self, input: &TickInput) {
        if !self.ship.is_alive() {
            return;
        }

        if input.right {
            self.ship.rotate_right();
        }
        if input.left {
            self.ship.rotate_left();
        }
        if input.thrust {
            self.ship.thrust();
        }
        if input.fire {
            self.projectiles.push(self.ship.fire());
        }
    }

    /// One frame of simulation: respawn an exhausted wave, advance
    /// everything, resolve collisions, reap the dead.
    pub fn advance(&mut self) {
        // 1. A cleared field immediately restocks, before any motion.
        if self.asteroids.is_empty() {
            self.spawn_wave();
        }

        // 2-3. Motion.
        for asteroid in &mut self.asteroids {
            asteroid.advance(Some(self.bounds));
        }
        for projectile in &mut self.projectiles {
            projectile.advance(Some(self.bounds));
        }

        // 4. Advance the ship, or bring it back if lives remain.
        if self.ship.is_alive() {
            self.ship.advance(Some(self.bounds));
        } else if self.lives > 0 {
            self.ship = Ship::default();
            self.ship.set_invulnerable(SPAWN_INVULN_FRAMES);
            log::info!("Ship respawned, {} lives left", self.lives);
        }

        self.handle_collisions();

        // 6. Reap: drop everything the collision pass (or expiry) killed.
        self.projectiles.retain(|p| p.is_alive());
        self.asteroids.retain(|a| a.is_alive());
    }

    /// Projectiles first, then the ship: a rock destroyed by a shot this
    /// frame can no longer ram the ship.
    fn handle_collisions(&mut self) {
        for idx in 0..self.projectiles.len() {
            if !self.projectiles[idx].is_alive() {
                continue;
            }
            if collide_with_asteroids(&mut self.projectiles[idx], &mut self.asteroids) {
                self.score += 1;
            }
        }

        if self.ship.is_alive()
            && collide_with_asteroids(&mut self.ship, &mut self.asteroids)
            && self.lives > 0
        {
            self.lives -= 1;
            if self.lives == 0 {
                log::info!("Final ship lost at {} points", self.score);
            }
        }
    }
}

/// Scan the asteroid list for the first swept collision with `obj`.
///
/// On a hit the object is killed (the ship's invulnerability gating
/// applies), the asteroid fragments, and the fragments are spliced in
/// before the dead parent. The scan stops at the hit, so the fragments
/// are skipped by this object but seen by later shooters and the ship
/// within the same frame.
fn collide_with_asteroids(obj: &mut impl MovingObject, asteroids: &mut Vec<Asteroid>) -> bool {
    let mut idx = 0;
    while idx < asteroids.len() {
        if collides(obj, &asteroids[idx]) {
            obj.kill();
            let size = asteroids[idx].size;
            let fragments = asteroids[idx].hit();
            log::debug!("{size:?} destroyed, {} fragments", fragments.len());
            asteroids.splice(idx..idx, fragments);
            return true;
        }
        idx += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::object::Bounds;
    use crate::sim::state::{AsteroidSize, Projectile};
    use glam::{Vec2, vec2};

    fn empty_world() -> World {
        let bounds = Bounds::new(vec2(-200.0, -200.0), vec2(200.0, 200.0));
        let mut world = World::new(bounds, 1);
        world.asteroids.clear();
        // Park the ship away from the test entities
        world.ship.body.pos = vec2(180.0, 180.0);
        world
    }

    fn stationary_rock(size: AsteroidSize, pos: Vec2) -> Asteroid {
        Asteroid::with_velocity(size, pos, Vec2::ZERO)
    }

    fn stationary_shot(pos: Vec2) -> Projectile {
        let mut projectile = Projectile::fire(pos, 0.0);
        projectile.body.vel = Vec2::ZERO;
        projectile
    }

    #[test]
    fn cleared_field_respawns_a_full_wave() {
        let mut world = empty_world();
        // Take the ship out of play so a random spawn position cannot
        // register a collision and fragment a rock this frame.
        world.lives = 0;
        world.ship.set_invulnerable(0);
        world.ship.kill();

        tick(&mut world, &TickInput::default());

        assert_eq!(world.asteroids.len(), WAVE_SIZE);
        assert!(
            world
                .asteroids
                .iter()
                .all(|a| a.size == AsteroidSize::Large)
        );
    }

    #[test]
    fn projectile_hit_scores_and_spawns_fragments() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Large, Vec2::ZERO));
        world.projectiles.push(stationary_shot(Vec2::ZERO));

        tick(&mut world, &TickInput::default());

        assert_eq!(world.score, 1);
        assert!(world.projectiles.is_empty());
        // Parent reaped, three fragments remain
        assert_eq!(world.asteroids.len(), 3);
        assert_eq!(
            world
                .asteroids
                .iter()
                .filter(|a| a.size == AsteroidSize::Medium)
                .count(),
            2
        );
    }

    #[test]
    fn one_asteroid_per_projectile_per_frame() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));
        world.projectiles.push(stationary_shot(Vec2::ZERO));

        tick(&mut world, &TickInput::default());

        assert_eq!(world.score, 1);
        assert_eq!(world.asteroids.len(), 1);
    }

    #[test]
    fn fragments_are_fair_game_for_later_projectiles() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Large, Vec2::ZERO));
        world.projectiles.push(stationary_shot(Vec2::ZERO));
        world.projectiles.push(stationary_shot(Vec2::ZERO));

        tick(&mut world, &TickInput::default());

        // First shot kills the large rock; the second hits one of its
        // fresh medium fragments the same frame.
        assert_eq!(world.score, 2);
        // Large -> 2 medium + 1 small; one medium -> 2 small
        assert_eq!(world.asteroids.len(), 4);
    }

    #[test]
    fn expired_projectiles_do_not_collide() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));
        let mut shot = stationary_shot(Vec2::ZERO);
        shot.life = 1; // expires during this frame's advance
        world.projectiles.push(shot);

        tick(&mut world, &TickInput::default());

        assert_eq!(world.score, 0);
        assert_eq!(world.asteroids.len(), 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn ship_collision_costs_a_life() {
        let mut world = empty_world();
        world.ship.body.pos = Vec2::ZERO;
        world.ship.set_invulnerable(0);
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));

        tick(&mut world, &TickInput::default());

        assert!(!world.ship.is_alive());
        assert_eq!(world.lives, MAX_LIVES - 1);
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn dead_ship_respawns_invulnerable_next_frame() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, vec2(-150.0, -150.0)));
        world.ship.set_invulnerable(0);
        world.ship.kill();
        assert!(!world.ship.is_alive());

        tick(&mut world, &TickInput::default());

        assert!(world.ship.is_alive());
        assert!(world.ship.is_invulnerable());
    }

    #[test]
    fn invulnerable_ship_survives_but_the_hit_still_registers() {
        let mut world = empty_world();
        world.ship.body.pos = Vec2::ZERO;
        world.ship.set_invulnerable(SPAWN_INVULN_FRAMES);
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));

        tick(&mut world, &TickInput::default());

        assert!(world.ship.is_alive());
        assert_eq!(world.lives, MAX_LIVES - 1);
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn lives_never_drop_below_zero() {
        let mut world = empty_world();
        world.ship.body.pos = Vec2::ZERO;
        world.ship.set_invulnerable(0);
        world.lives = 0;
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, Vec2::ZERO));

        tick(&mut world, &TickInput::default());
        assert_eq!(world.lives, 0);
        assert!(!world.ship.is_alive());

        // No lives, no respawn
        tick(&mut world, &TickInput::default());
        assert!(!world.ship.is_alive());
    }

    #[test]
    fn fire_input_adds_a_projectile_with_ship_momentum() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, vec2(-150.0, -150.0)));
        world.ship.rotation = 0;
        world.ship.body.vel = vec2(0.0, 1.0);

        tick(
            &mut world,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );

        assert_eq!(world.projectiles.len(), 1);
        let shot = &world.projectiles[0];
        assert!((shot.vel().x - PROJECTILE_SPEED).abs() < 1e-5);
        assert!((shot.vel().y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn dead_ship_ignores_input() {
        let mut world = empty_world();
        world
            .asteroids
            .push(stationary_rock(AsteroidSize::Small, vec2(-150.0, -150.0)));
        world.lives = 0;
        world.ship.set_invulnerable(0);
        world.ship.kill();

        tick(
            &mut world,
            &TickInput {
                fire: true,
                thrust: true,
                ..Default::default()
            },
        );

        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn score_counts_every_kill_in_a_frame() {
        let mut world = empty_world();
        for x in [-50.0, 0.0, 50.0] {
            world
                .asteroids
                .push(stationary_rock(AsteroidSize::Small, vec2(x, 0.0)));
            world.projectiles.push(stationary_shot(vec2(x, 0.0)));
        }

        tick(&mut world, &TickInput::default());

        assert_eq!(world.score, 3);
        assert!(world.asteroids.is_empty());
    }
}

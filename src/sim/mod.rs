//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod object;
pub mod state;
pub mod tick;

pub use collision::{closest_approach, collides};
pub use object::{Body, Bounds, MovingObject};
pub use state::{Asteroid, AsteroidSize, Projectile, Ship, World};
pub use tick::{TickInput, tick};

//! Headless demo driver.
//!
//! Runs a seeded world for a fixed number of frames with a tiny autopilot
//! standing in for the player, drawing through a log-backed renderer.
//! Useful for eyeballing the simulation (`RUST_LOG=debug cargo run -- 42`)
//! and as a living example of the host-side contract.

use glam::{Vec2, vec2};
use rockstorm::render::{Renderer, draw_world};
use rockstorm::sim::{Bounds, MovingObject, TickInput, World, tick};

const FIELD_HALF_EXTENT: f32 = 200.0;
const DEMO_FRAMES: u32 = 3_000;

/// Renderer that narrates draw calls to the log instead of a screen.
#[derive(Default)]
struct LogRenderer {
    frame: u32,
}

impl Renderer for LogRenderer {
    fn draw_dot(&mut self, pos: Vec2) {
        log::trace!("frame {}: dot at {pos}", self.frame);
    }

    fn draw_ship(&mut self, pos: Vec2, facing_degrees: i32, show_thrust: bool) {
        log::trace!(
            "frame {}: ship at {pos} facing {facing_degrees} thrust={show_thrust}",
            self.frame
        );
    }

    fn draw_large_asteroid(&mut self, pos: Vec2, rotation_degrees: i32) {
        log::trace!(
            "frame {}: large asteroid at {pos} rot {rotation_degrees}",
            self.frame
        );
    }

    fn draw_medium_asteroid(&mut self, pos: Vec2, rotation_degrees: i32) {
        log::trace!(
            "frame {}: medium asteroid at {pos} rot {rotation_degrees}",
            self.frame
        );
    }

    fn draw_small_asteroid(&mut self, pos: Vec2, rotation_degrees: i32) {
        log::trace!(
            "frame {}: small asteroid at {pos} rot {rotation_degrees}",
            self.frame
        );
    }

    fn draw_text(&mut self, _pos: Vec2, text: &str) {
        log::trace!("frame {}: {text}", self.frame);
    }
}

/// Spin slowly and shoot in bursts. Not clever, but it exercises every
/// input path and racks up a few points on most seeds.
fn autopilot(frame: u32) -> TickInput {
    TickInput {
        left: frame % 3 == 0,
        right: false,
        thrust: frame % 40 == 0,
        fire: frame % 12 == 0,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("Demo run starting with seed {seed}");

    let bounds = Bounds::new(
        vec2(-FIELD_HALF_EXTENT, -FIELD_HALF_EXTENT),
        vec2(FIELD_HALF_EXTENT, FIELD_HALF_EXTENT),
    );
    let mut world = World::new(bounds, seed);
    let mut renderer = LogRenderer::default();

    for frame in 0..DEMO_FRAMES {
        tick(&mut world, &autopilot(frame));
        renderer.frame = frame;
        draw_world(&world, &mut renderer);

        if world.lives == 0 && !world.ship.is_alive() {
            log::info!("Out of ships on frame {frame}");
            break;
        }
    }

    println!(
        "seed {seed}: {} points, {} lives left, {} rocks on screen",
        world.score,
        world.lives,
        world.asteroids.len()
    );
}

use log::debug;
use rand::Rng;

use crate::frames::{frame_size, HAZARD_FRAMES};
use crate::scenario;
use crate::sched::{Context, Flow};
use crate::tasks::{FallingObstacle, Task};

const MIN_FALL_SPEED: f64 = 0.3;
const MAX_FALL_SPEED: f64 = 0.8;

/// Top-level producer of falling hazards, throttled by the scenario's
/// year-dependent spawn delay.
pub struct HazardSpawner;

impl HazardSpawner {
    pub fn new() -> Self {
        HazardSpawner
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        let Some(delay) = scenario::spawn_delay(ctx.scenario.year) else {
            // Disabled this year; re-check every tick so spawning starts
            // the moment the gate opens.
            return Flow::Sleep(1);
        };

        let (_, cols) = ctx.canvas.size();
        let frame = HAZARD_FRAMES[ctx.rng.gen_range(0..HAZARD_FRAMES.len())];
        let (_, width) = frame_size(frame);
        let max_col = cols.saturating_sub(width).max(1);
        let col = ctx.rng.gen_range(0..max_col) as f64;
        let speed = ctx.rng.gen_range(MIN_FALL_SPEED..MAX_FALL_SPEED);

        debug!("hazard spawned at col {col} speed {speed:.2}");
        ctx.spawn(Task::Obstacle(FallingObstacle::new(col, frame, speed)));
        Flow::Sleep(delay)
    }
}

impl Default for HazardSpawner {
    fn default() -> Self {
        Self::new()
    }
}

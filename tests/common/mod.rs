#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_sweeper::canvas::GridCanvas;
use space_sweeper::entities::{Controls, ScenarioState};
use space_sweeper::registry::ObstacleRegistry;
use space_sweeper::sched::{Context, Supervisor};

/// Headless simulation harness: canvas, registry, scenario, and a
/// seeded RNG driven tick by tick through the supervisor.
pub struct Sim {
    pub canvas: GridCanvas,
    pub registry: ObstacleRegistry,
    pub scenario: ScenarioState,
    pub rng: StdRng,
    pub supervisor: Supervisor,
    pub controls: Controls,
}

impl Sim {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self::with_seed(rows, cols, 42)
    }

    pub fn with_seed(rows: u16, cols: u16, seed: u64) -> Self {
        Sim {
            canvas: GridCanvas::new(rows, cols),
            registry: ObstacleRegistry::new(),
            scenario: ScenarioState::new(),
            rng: StdRng::seed_from_u64(seed),
            supervisor: Supervisor::new(),
            controls: Controls::default(),
        }
    }

    /// Run one tick; returns whether the ship was destroyed during it.
    pub fn tick(&mut self) -> bool {
        let mut ctx = Context::new(
            &mut self.canvas,
            &mut self.registry,
            &mut self.scenario,
            &mut self.rng,
        );
        ctx.controls = self.controls;
        self.supervisor.tick(&mut ctx);
        ctx.ship_destroyed
    }

    pub fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }
}

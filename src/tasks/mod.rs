//! Entity tasks: one independently scheduled state machine per live
//! animated entity.  The supervisor dispatches over the tagged variants
//! here; there is no inheritance-style polymorphism.

mod driver;
mod explosion;
mod obstacle;
mod projectile;
mod ship;
mod spawner;
mod star;

pub use driver::{PhraseBanner, YearClock};
pub use explosion::Explosion;
pub use obstacle::FallingObstacle;
pub use projectile::Projectile;
pub use ship::{GameOverScreen, Ship};
pub use spawner::HazardSpawner;
pub use star::Star;

use crate::sched::{Context, Flow};

/// Discriminant used for group cancellation and liveness queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Star,
    Ship,
    Projectile,
    Obstacle,
    Explosion,
    Spawner,
    YearClock,
    Banner,
    GameOver,
}

pub enum Task {
    Star(Star),
    Ship(Ship),
    Projectile(Projectile),
    Obstacle(FallingObstacle),
    Explosion(Explosion),
    Spawner(HazardSpawner),
    YearClock(YearClock),
    Banner(PhraseBanner),
    GameOver(GameOverScreen),
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Star(_) => TaskKind::Star,
            Task::Ship(_) => TaskKind::Ship,
            Task::Projectile(_) => TaskKind::Projectile,
            Task::Obstacle(_) => TaskKind::Obstacle,
            Task::Explosion(_) => TaskKind::Explosion,
            Task::Spawner(_) => TaskKind::Spawner,
            Task::YearClock(_) => TaskKind::YearClock,
            Task::Banner(_) => TaskKind::Banner,
            Task::GameOver(_) => TaskKind::GameOver,
        }
    }

    /// Advance one scheduling step.
    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        match self {
            Task::Star(t) => t.step(ctx),
            Task::Ship(t) => t.step(ctx),
            Task::Projectile(t) => t.step(ctx),
            Task::Obstacle(t) => t.step(ctx),
            Task::Explosion(t) => t.step(ctx),
            Task::Spawner(t) => t.step(ctx),
            Task::YearClock(t) => t.step(ctx),
            Task::Banner(t) => t.step(ctx),
            Task::GameOver(t) => t.step(ctx),
        }
    }
}

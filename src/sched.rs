//! Tick-driven cooperative scheduling.
//!
//! One tick is one fixed real-time period of the outer loop.  Each tick
//! the supervisor resumes every due live task exactly once, in creation
//! order; a task suspends only by returning [`Flow::Sleep`] and is
//! resumed after exactly that many ticks.  Given the same inputs and
//! the same ordering, the visible frame sequence is reproducible.
//!
//! Mid-tick mutations follow two rules:
//! - a task spawned during tick T is admitted at the end of T and first
//!   runs at T+1, so it never observes a half-built tick;
//! - a cancellation issued during tick T takes effect immediately, so a
//!   task cancelled earlier in the tick is never resumed later in it.
//! Cancelled tasks get no cleanup step; the initiator cleans up.

use rand::rngs::StdRng;

use crate::canvas::Canvas;
use crate::entities::{Controls, ScenarioState};
use crate::registry::ObstacleRegistry;
use crate::tasks::{Task, TaskKind};

/// What a task reports back from one scheduling step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Resume after exactly this many ticks (1 = next tick).
    Sleep(u32),
    /// Finished; the slot is reaped at the end of the tick.
    Done,
}

/// Shared simulation state handed by reference to every task step.
/// Rebuilt by the outer loop each tick; the spawn and cancel queues are
/// drained by the supervisor within the same tick.
pub struct Context<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub registry: &'a mut ObstacleRegistry,
    pub scenario: &'a mut ScenarioState,
    pub rng: &'a mut StdRng,
    /// This tick's decoded player input.
    pub controls: Controls,
    /// Set when the ship was destroyed during this tick.
    pub ship_destroyed: bool,
    spawns: Vec<Task>,
    cancels: Vec<TaskKind>,
}

impl<'a> Context<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        registry: &'a mut ObstacleRegistry,
        scenario: &'a mut ScenarioState,
        rng: &'a mut StdRng,
    ) -> Self {
        Context {
            canvas,
            registry,
            scenario,
            rng,
            controls: Controls::default(),
            ship_destroyed: false,
            spawns: Vec::new(),
            cancels: Vec::new(),
        }
    }

    /// Queue a task for admission at the start of the next tick.
    pub fn spawn(&mut self, task: Task) {
        self.spawns.push(task);
    }

    /// Request immediate cancellation of every live task of this kind.
    pub fn cancel(&mut self, kind: TaskKind) {
        self.cancels.push(kind);
    }
}

struct Slot {
    /// Remaining ticks before the next resume; 0 = due now.
    sleep: u32,
    done: bool,
    cancelled: bool,
    task: Task,
}

/// Owns the ordered set of live entity tasks.
#[derive(Default)]
pub struct Supervisor {
    slots: Vec<Slot>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a task; it first runs on the next `tick` call.
    pub fn spawn(&mut self, task: Task) {
        self.slots.push(Slot {
            sleep: 0,
            done: false,
            cancelled: false,
            task,
        });
    }

    /// Immediately remove every live task matching the predicate,
    /// without giving it another step.
    pub fn cancel_all(&mut self, pred: impl Fn(&Task) -> bool) {
        self.slots.retain(|slot| !pred(&slot.task));
    }

    /// Number of live tasks of one kind.
    pub fn count(&self, kind: TaskKind) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.task.kind() == kind)
            .count()
    }

    /// Advance one clock tick: resume every due live task exactly once
    /// in creation order, apply cancellations as they are issued, then
    /// reap finished tasks and admit pending spawns.
    pub fn tick(&mut self, ctx: &mut Context<'_>) {
        // Snapshot the live count: tasks admitted below never run this tick.
        let live = self.slots.len();
        for i in 0..live {
            if self.slots[i].cancelled || self.slots[i].done {
                continue;
            }
            if self.slots[i].sleep > 1 {
                self.slots[i].sleep -= 1;
                continue;
            }
            match self.slots[i].task.step(ctx) {
                Flow::Sleep(n) => self.slots[i].sleep = n.max(1),
                Flow::Done => self.slots[i].done = true,
            }
            // Cancellations take effect before any later task runs.
            for kind in std::mem::take(&mut ctx.cancels) {
                for slot in &mut self.slots {
                    if slot.task.kind() == kind {
                        slot.cancelled = true;
                    }
                }
                // Pending spawns of a cancelled kind never start.
                ctx.spawns.retain(|task| task.kind() != kind);
            }
        }
        self.slots.retain(|slot| !slot.done && !slot.cancelled);
        for task in std::mem::take(&mut ctx.spawns) {
            self.spawn(task);
        }
    }
}

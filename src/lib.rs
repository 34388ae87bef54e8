//! Terminal arcade simulation: a player-controlled ship dodges and
//! destroys falling space debris while a scenario clock advances through
//! the space age, unlocking mechanics year by year.
//!
//! The heart of the crate is a cooperative tick scheduler: every animated
//! entity is an independently scheduled state machine that draws itself,
//! suspends for a number of ticks, and resumes exactly where it left off.
//! See [`sched`] for the scheduling contract and [`tasks`] for the
//! entities themselves.

pub mod canvas;
pub mod entities;
pub mod frames;
pub mod input;
pub mod physics;
pub mod registry;
pub mod scenario;
pub mod sched;
pub mod tasks;

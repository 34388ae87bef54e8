//! Obstacle registry: the shared table of currently-airborne hazard
//! boxes, plus the set of ids already destroyed this collision episode.
//!
//! A `BTreeMap` keyed by spawn id keeps iteration deterministic, which
//! fixes which obstacle a projectile is credited with when several boxes
//! contain the same cell.
//!
//! Invariant: an id is present iff its falling task has registered and
//! has not yet terminated.  Every exit path deregisters; a leaked entry
//! is a correctness bug.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::Obstacle;

#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    airborne: BTreeMap<u64, Obstacle>,
    resolved: BTreeSet<u64>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new airborne box; returns its fresh, lifetime-stable id.
    pub fn register(&mut self, row: f64, col: f64, rows: u16, cols: u16) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.airborne.insert(
            id,
            Obstacle {
                id,
                row,
                col,
                rows,
                cols,
            },
        );
        id
    }

    /// Mirror a falling task's row advance into the published box.
    pub fn update_row(&mut self, id: u64, row: f64) {
        if let Some(obstacle) = self.airborne.get_mut(&id) {
            obstacle.row = row;
        }
    }

    pub fn deregister(&mut self, id: u64) {
        self.airborne.remove(&id);
    }

    /// First airborne box (in id order) containing the cell.
    pub fn hit_test(&self, row: i32, col: i32) -> Option<u64> {
        self.airborne
            .values()
            .find(|obstacle| obstacle.contains(row, col))
            .map(|obstacle| obstacle.id)
    }

    /// Whether any airborne box overlaps the given box.
    pub fn overlaps(&self, row: i32, col: i32, rows: u16, cols: u16) -> bool {
        self.airborne
            .values()
            .any(|obstacle| obstacle.overlaps(row, col, rows, cols))
    }

    /// Credit a hit: removes the entry and records the id so the
    /// obstacle's own task retires quietly instead of redrawing.
    /// First writer wins; returns false if the entry was already gone.
    pub fn resolve(&mut self, id: u64) -> bool {
        if self.airborne.remove(&id).is_some() {
            self.resolved.insert(id);
            true
        } else {
            false
        }
    }

    /// Consume the resolved flag for `id`, if set.
    pub fn take_resolved(&mut self, id: u64) -> bool {
        self.resolved.remove(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.airborne.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Obstacle> {
        self.airborne.get(&id)
    }

    pub fn len(&self) -> usize {
        self.airborne.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airborne.is_empty()
    }

    /// Drop every entry and pending resolution.  Called by whichever
    /// component initiates a mass cancellation of falling tasks, since
    /// cancelled tasks never get a cleanup step.
    pub fn clear(&mut self) {
        self.airborne.clear();
        self.resolved.clear();
    }
}

//! Fundamental simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        f64::from(crate::constants::DT)
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Ordered world-space waypoints toward a destination.
///
/// Waypoint 0 is always the current target; reaching a waypoint pops it
/// from the front. An empty route means "no movement requested".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    waypoints: Vec<Vec2>,
}

impl Route {
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self { waypoints }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// The waypoint the vessel is currently heading for.
    pub fn current_target(&self) -> Option<Vec2> {
        self.waypoints.first().copied()
    }

    /// Consume the current target once it has been reached.
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.waypoints.remove(0);
        }
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }
}

/// Axis-aligned world-space bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of the given extents centered on `center`.
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Standard AABB overlap test. All four edge comparisons are strict,
    /// so boxes that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

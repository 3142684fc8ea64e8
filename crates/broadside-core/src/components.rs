//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::ShipCondition;
use crate::types::{Aabb, Route};

/// World-space position of the entity's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Unit direction the vessel is facing; zero until it first sails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub Vec2);

/// Stable vessel identity used in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselId(pub u32);

/// Stable cannonball identity used in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannonballId(pub u32);

/// Marks the player's vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OwnShip;

/// Marks an enemy vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pirate;

/// Marks a cannonball projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cannonball;

/// Hit points. Monotonically non-increasing during an encounter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub hp: u32,
}

/// Damage-FSM state, with the previously observed state kept only to
/// detect transition edges for redraw signalling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Condition {
    pub current: ShipCondition,
    pub previous: ShipCondition,
}

/// Sprite extents from which the collision box is derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    /// The entity's collision box when centered at `center`.
    pub fn aabb(&self, center: Vec2) -> Aabb {
        Aabb::from_center(center, self.width, self.height)
    }
}

/// Cannonball flight state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotState {
    /// Tile-centered destination.
    pub destination: Vec2,
    /// Vessel that fired this shot; never a valid target for it.
    pub shooter: u32,
    /// Set once the shot has struck a vessel or reached its destination.
    /// Resolved shots are despawned by cleanup and never evaluated again.
    pub resolved: bool,
}

/// Current sailing route. Empty = holding position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavRoute(pub Route);

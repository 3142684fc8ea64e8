//! Class-specific hull profiles.
//!
//! Consolidates per-class parameters used when spawning and sailing
//! vessels.

use broadside_core::constants::*;
use broadside_core::enums::ShipClass;

/// Hull parameters for a vessel class.
pub struct HullProfile {
    /// Hit points at episode start.
    pub initial_hp: u32,
    /// Sailing speed (world units per second).
    pub sail_speed: f32,
    /// Sprite footprint, also the collision box extents.
    pub footprint_w: f32,
    pub footprint_h: f32,
}

/// Get the hull profile for a given class.
pub fn get_profile(class: ShipClass) -> HullProfile {
    match class {
        ShipClass::Sloop => HullProfile {
            initial_hp: VESSEL_INITIAL_HP,
            sail_speed: SLOOP_SPEED,
            footprint_w: VESSEL_FOOTPRINT_W,
            footprint_h: VESSEL_FOOTPRINT_H,
        },
        ShipClass::Corsair => HullProfile {
            initial_hp: VESSEL_INITIAL_HP,
            sail_speed: CORSAIR_SPEED,
            footprint_w: VESSEL_FOOTPRINT_W,
            footprint_h: VESSEL_FOOTPRINT_H,
        },
    }
}

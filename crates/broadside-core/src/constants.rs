//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Chart ---

/// Default tile edge length in world units (charts ship with 128px tiles).
pub const DEFAULT_TILE_SIZE: f32 = 128.0;

/// Highest tile cost a vessel can sail through; anything above is land/no-go.
pub const MAX_SAIL_COST: u32 = 1;

// --- Vessels ---

/// Player vessel sailing speed (world units per second).
pub const SLOOP_SPEED: f32 = 750.0;

/// Enemy vessel sailing speed (world units per second).
pub const CORSAIR_SPEED: f32 = 600.0;

/// Arrival radius factor: within `speed * this` of a waypoint the vessel
/// snaps to it and pops the route.
pub const ARRIVAL_RADIUS_FACTOR: f32 = 0.02;

/// Vessel sprite width in world units.
pub const VESSEL_FOOTPRINT_W: f32 = 66.0;

/// Vessel sprite height in world units.
pub const VESSEL_FOOTPRINT_H: f32 = 113.0;

/// Starting hit points for every vessel class.
pub const VESSEL_INITIAL_HP: u32 = 10;

// --- Damage ---

/// Above this the hull is Healthy; at or below it, Damaged.
pub const DAMAGED_HP_MAX: u32 = 6;

/// Above zero and at or below this the hull is VeryDamaged.
pub const VERY_DAMAGED_HP_MAX: u32 = 3;

/// Hit points removed per cannonball hit.
pub const HIT_DAMAGE: u32 = 1;

// --- Cannonballs ---

/// Exponential approach rate toward the destination (per second).
pub const CANNONBALL_APPROACH_RATE: f32 = 8.0;

/// Cannonball sprite edge length (square) in world units.
pub const CANNONBALL_EXTENT: f32 = 10.0;

/// Per-axis clamp: within this of the destination the position snaps exact.
pub const CANNONBALL_SNAP_EPSILON: f32 = 0.01;

// --- Encounter ---

/// Number of enemy vessels spawned per encounter.
pub const PIRATE_COUNT: usize = 5;

/// Default player start position.
pub const PLAYER_START_X: f32 = 5407.0;
pub const PLAYER_START_Y: f32 = 775.0;

/// Score the external scoring layer awards per `Hit` event.
pub const HIT_SCORE: u32 = 100;

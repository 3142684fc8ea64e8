//! The nautical chart: a cost-weighted tile grid with tile/world
//! coordinate mapping.
//!
//! Built once per encounter from externally parsed map layers and read-only
//! afterwards; the map file format itself is not this crate's concern.

mod grid;

pub use grid::{ChartError, CostGrid, TileLayer};

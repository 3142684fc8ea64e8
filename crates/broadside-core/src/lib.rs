//! Core types and definitions for the Broadside encounter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, snapshots, and constants. It has no
//! dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

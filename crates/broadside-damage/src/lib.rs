//! Hull damage finite state machine and per-class hull profiles.
//!
//! Pure functions over plain data: condition is computed from hit points
//! alone, with no ECS dependency, so every vessel type shares one
//! transition function instead of per-type state handlers.

pub mod fsm;
pub mod profiles;

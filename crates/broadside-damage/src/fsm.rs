//! Condition transition function.
//!
//! Condition is a pure function of current hit points, re-evaluated every
//! tick. Hit points only ever decrease during an encounter, so severity is
//! visited in the fixed order Healthy -> Damaged -> VeryDamaged -> Sunk,
//! each state at most once (states are skipped when several hits land in
//! one tick).

use broadside_core::constants::{DAMAGED_HP_MAX, VERY_DAMAGED_HP_MAX};
use broadside_core::enums::ShipCondition;

/// Output of one FSM evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionUpdate {
    pub condition: ShipCondition,
    /// True exactly when the condition differs from the previous one;
    /// the rendering layer's only redraw signal.
    pub changed: bool,
}

/// The condition a hull with `hp` hit points is in.
pub fn condition_for_hp(hp: u32) -> ShipCondition {
    match hp {
        0 => ShipCondition::Sunk,
        hp if hp <= VERY_DAMAGED_HP_MAX => ShipCondition::VeryDamaged,
        hp if hp <= DAMAGED_HP_MAX => ShipCondition::Damaged,
        _ => ShipCondition::Healthy,
    }
}

/// Evaluate the FSM for one vessel.
///
/// Sunk is terminal and severity never decreases: `max` with the current
/// state guards against any hp glitch walking the ladder backwards.
/// Idempotent for unchanged `hp`.
pub fn evaluate(current: ShipCondition, hp: u32) -> ConditionUpdate {
    if current == ShipCondition::Sunk {
        return ConditionUpdate {
            condition: ShipCondition::Sunk,
            changed: false,
        };
    }

    let next = condition_for_hp(hp).max(current);
    ConditionUpdate {
        condition: next,
        changed: next != current,
    }
}

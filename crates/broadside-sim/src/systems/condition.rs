//! Damage-FSM advance: recompute each vessel's condition from its hit
//! points and raise a redraw edge when it changes.

use hecs::World;

use broadside_core::components::{Condition, Hull, VesselId};
use broadside_core::events::ConditionChange;
use broadside_damage::fsm;

/// Evaluate the FSM for every vessel. The previous condition is compared
/// against the freshly computed one so each transition produces exactly
/// one `ConditionChange`, the rendering layer's only redraw signal.
pub fn run(world: &mut World, changes: &mut Vec<ConditionChange>) {
    for (_entity, (id, hull, condition)) in
        world.query_mut::<(&VesselId, &Hull, &mut Condition)>()
    {
        let update = fsm::evaluate(condition.current, hull.hp);
        condition.current = update.condition;

        if condition.current != condition.previous {
            changes.push(ConditionChange {
                vessel: id.0,
                from: condition.previous,
                to: condition.current,
            });
            condition.previous = condition.current;
        }
    }
}

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::host::ActiveLaws;

use super::resolver::TypeCache;

/// Does `player` run elective succession right now?
///
/// Fail-closed: while the type cache is unresolved the answer is `false`
/// regardless of the player's law state, so an unconfigured game keeps its
/// default succession behavior. Pure read, safe to call redundantly.
pub fn is_elective(world: &World, cache: &TypeCache, player: Entity) -> bool {
    let Some(types) = cache.get() else {
        return false;
    };
    world
        .get::<ActiveLaws>(player)
        .is_some_and(|laws| laws.contains(types.elective_law))
}

//! Law bookkeeping: the host's own adoption check and class-exclusive
//! activation.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ids::LawType;

use super::components::ActiveLaws;
use super::infos::Infos;

/// The host's preliminary adoption answer, before any hook weighs in:
/// the law must be defined in loaded game data and not already active.
pub(crate) fn base_can_start_law(world: &World, player: Entity, law: LawType) -> bool {
    if world.resource::<Infos>().law_class_of(law).is_none() {
        return false;
    }
    world
        .get::<ActiveLaws>(player)
        .is_some_and(|laws| !laws.contains(law))
}

/// Activate `law` for `player`, deactivating any other active law in the
/// same class. Law classes are mutually exclusive policy groups.
pub(crate) fn make_active_law(world: &mut World, player: Entity, law: LawType) {
    let infos = world.resource::<Infos>();
    let class = infos.law_class_of(law);
    let siblings: Vec<LawType> = match (world.get::<ActiveLaws>(player), class) {
        (Some(active), Some(class)) => active
            .0
            .iter()
            .copied()
            .filter(|&other| other != law && infos.law_class_of(other) == Some(class))
            .collect(),
        _ => Vec::new(),
    };

    if let Some(mut active) = world.get_mut::<ActiveLaws>(player) {
        for sibling in siblings {
            active.0.remove(&sibling);
        }
        active.0.insert(law);
    }
}

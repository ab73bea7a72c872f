//! Default hereditary heir search.

use std::cmp::Reverse;

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::ids::{HeirGender, SuccessionOrder};

use super::components::{Character, CharacterCore, CourtOf};

/// Rank the player's living courtiers under one succession order and gender
/// filter and return the best candidate, if any.
pub(crate) fn default_heir(
    world: &mut World,
    player: Entity,
    order: SuccessionOrder,
    gender: HeirGender,
) -> Option<Entity> {
    let mut query = world.query_filtered::<(Entity, &CharacterCore, &CourtOf), With<Character>>();
    let mut candidates: Vec<(Entity, u32, u8)> = query
        .iter(world)
        .filter(|(_, core, court)| court.0 == player && core.alive && gender.admits(core.sex))
        .map(|(entity, core, _)| (entity, core.birth_year, core.kinship))
        .collect();

    // Entity id breaks ties so repeated queries rank identically.
    match order {
        SuccessionOrder::Primogeniture => {
            candidates.sort_by_key(|&(entity, birth, _)| (birth, entity));
        }
        SuccessionOrder::Ultimogeniture => {
            candidates.sort_by_key(|&(entity, birth, _)| (Reverse(birth), entity));
        }
        SuccessionOrder::Kinship => {
            candidates.sort_by_key(|&(entity, birth, kinship)| (kinship, birth, entity));
        }
    }

    candidates.first().map(|&(entity, _, _)| entity)
}

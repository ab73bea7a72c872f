//! The five decision functions and their registration.

use std::sync::Arc;

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::host::{
    ActiveLaws, DispatchScope, EventDecision, Game, HeirDecision, HeirQuery, HookError, HookGroup,
    Infos, LawQuery, Player, PlayerCore, ScopeFlag, laws,
};
use crate::ids::EventTriggerType;

use super::gate::is_elective;
use super::resolver::{ELECTIVE_LAW, TypeCache};

/// Hook group every decision function registers under.
pub const HOOK_GROUP: HookGroup = "elective-succession";

/// Register the override engine against the game's hook registry.
///
/// No-op when the group is already registered, so a double initialization
/// cannot stack duplicate decisions. One [`TypeCache`] is shared by all five
/// hooks; it resolves lazily from whichever hook runs first with loaded
/// game data.
pub fn install(game: &mut Game) {
    if game.hooks().has_group(HOOK_GROUP) {
        tracing::debug!("elective succession hooks already installed");
        return;
    }

    let cache = Arc::new(TypeCache::default());
    let hooks = game.hooks_mut();

    let c = Arc::clone(&cache);
    hooks.on_game_ready(
        HOOK_GROUP,
        Box::new(move |world| assign_elective_law(world, &c)),
    );

    let c = Arc::clone(&cache);
    hooks.on_heir_lookup(
        HOOK_GROUP,
        Box::new(move |world, query| heir_override(world, query, &c)),
    );

    let c = Arc::clone(&cache);
    hooks.on_leader_change(
        HOOK_GROUP,
        Box::new(move |world, player, scope| mark_leader_change(world, player, scope, &c)),
    );

    let c = Arc::clone(&cache);
    hooks.on_event_fire(
        HOOK_GROUP,
        Box::new(move |world, scope, trigger| filter_succession_event(world, scope, trigger, &c)),
    );

    hooks.on_law_check(
        HOOK_GROUP,
        Box::new(move |world, query, allowed| contain_order_laws(world, query, allowed, &cache)),
    );
}

/// Remove every hook of the engine and drop its resolved state. Safe to
/// call when nothing was ever installed.
pub fn uninstall(game: &mut Game) {
    game.hooks_mut().remove_group(HOOK_GROUP);
}

// ===========================================================================
// 1. Game-ready: force the elective law onto human players of a new game
// ===========================================================================

fn assign_elective_law(world: &mut World, cache: &TypeCache) -> Result<(), HookError> {
    let resolved = cache.resolve(world.resource::<Infos>()).copied();
    let Some(types) = resolved else {
        tracing::error!("{ELECTIVE_LAW} missing from game data; succession rules left unchanged");
        return Ok(());
    };

    let mut query = world.query_filtered::<(Entity, &PlayerCore, &ActiveLaws), With<Player>>();
    let pending: Vec<(Entity, String)> = query
        .iter(world)
        .filter(|(_, core, active)| core.human && !active.contains(types.elective_law))
        .map(|(entity, core, _)| (entity, core.name.clone()))
        .collect();

    // Already-elective players are skipped, so a second run changes nothing.
    for (player, name) in pending {
        laws::make_active_law(world, player, types.elective_law);
        tracing::info!("assigned {ELECTIVE_LAW} to {name}");
    }
    Ok(())
}

// ===========================================================================
// 2. Heir lookup: elective players have no heir under any order
// ===========================================================================

fn heir_override(
    world: &World,
    query: &HeirQuery,
    cache: &TypeCache,
) -> Result<HeirDecision, HookError> {
    // Loaded games never see the game-ready hook; resolve here instead.
    let _ = cache.resolve(world.resource::<Infos>());

    // The gender filter is deliberately ignored: every variant of the query
    // must come up empty for the host to reach its succession-failed path.
    if is_elective(world, cache, query.player) {
        Ok(HeirDecision::NoHeir)
    } else {
        Ok(HeirDecision::PassThrough)
    }
}

// ===========================================================================
// 3. Leader change: bracket elective installations with a suppression flag
// ===========================================================================

fn mark_leader_change(
    world: &World,
    player: Entity,
    scope: &mut DispatchScope,
    cache: &TypeCache,
) -> Result<(), HookError> {
    if is_elective(world, cache, player) {
        scope.set(ScopeFlag::SuppressOwnSuccession);
    }
    Ok(())
}

// ===========================================================================
// 4. Event filter: silence the player's own succession announcement
// ===========================================================================

fn filter_succession_event(
    _world: &World,
    scope: &DispatchScope,
    trigger: EventTriggerType,
    cache: &TypeCache,
) -> Result<EventDecision, HookError> {
    if !scope.is_set(ScopeFlag::SuppressOwnSuccession) {
        return Ok(EventDecision::Allow);
    }
    // Only the player's own announcement; the rival-facing trigger stays
    // live so other factions can react to the change.
    match cache.get() {
        Some(types) if types.succession_us == trigger => Ok(EventDecision::Cancel),
        _ => Ok(EventDecision::Allow),
    }
}

// ===========================================================================
// 5. Law guard: elective players may hold no other law of the order class
// ===========================================================================

fn contain_order_laws(
    world: &World,
    query: &LawQuery,
    allowed: bool,
    cache: &TypeCache,
) -> Result<bool, HookError> {
    if !allowed {
        return Ok(false);
    }
    let Some(types) = cache.get() else {
        return Ok(allowed);
    };
    if !is_elective(world, cache, query.player) {
        return Ok(allowed);
    }
    if query.law == types.elective_law {
        return Ok(allowed);
    }
    let same_class =
        world.resource::<Infos>().law_class_of(query.law) == Some(types.order_class);
    Ok(!same_class)
}

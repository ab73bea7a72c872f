//! Extension points consulted by the host's succession and law operations.
//!
//! Five hook points, each an ordered list of decision functions keyed by a
//! [`HookGroup`] so a whole extension can be removed at once:
//!
//! 1. game-ready — post-hook after a new game finishes starting
//! 2. heir-lookup — pre-hook that may short-circuit an heir query
//! 3. leader-change — bracket-entry hook contributing [`DispatchScope`] flags
//! 4. event-fire — pre-hook that may cancel a single event firing
//! 5. law-check — post-hook folding over the host's preliminary answer
//!
//! Hooks fail OPEN: a hook returning `Err` is logged and treated as absent
//! for that call, so extension faults can degrade behavior to the host
//! default but never abort a host operation.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use thiserror::Error;

use crate::ids::{EventTriggerType, HeirGender, LawType, SuccessionOrder};

use super::scope::DispatchScope;

/// Identifies the extension that registered a hook.
pub type HookGroup = &'static str;

/// Error surfaced by a hook body. The dispatcher logs it and falls back to
/// the host's unhooked behavior for that call.
#[derive(Debug, Error)]
#[error("hook '{hook}' failed: {message}")]
pub struct HookError {
    pub hook: &'static str,
    pub message: String,
}

/// Overridable outcome of a heir-lookup pre-hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeirDecision {
    /// Let the host's own search run.
    PassThrough,
    /// Short-circuit: this query produces no candidate and the host search
    /// is skipped.
    NoHeir,
}

/// Outcome of an event-fire pre-hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDecision {
    Allow,
    Cancel,
}

/// Context for one heir query.
#[derive(Debug, Clone, Copy)]
pub struct HeirQuery {
    pub player: Entity,
    pub order: SuccessionOrder,
    pub gender: HeirGender,
}

/// Context for one law-adoption check.
#[derive(Debug, Clone, Copy)]
pub struct LawQuery {
    pub player: Entity,
    pub law: LawType,
}

pub type GameReadyHook = Box<dyn Fn(&mut World) -> Result<(), HookError> + Send + Sync>;
pub type HeirLookupHook =
    Box<dyn Fn(&World, &HeirQuery) -> Result<HeirDecision, HookError> + Send + Sync>;
pub type LeaderChangeHook =
    Box<dyn Fn(&World, Entity, &mut DispatchScope) -> Result<(), HookError> + Send + Sync>;
pub type EventFireHook = Box<
    dyn Fn(&World, &DispatchScope, EventTriggerType) -> Result<EventDecision, HookError>
        + Send
        + Sync,
>;
pub type LawCheckHook =
    Box<dyn Fn(&World, &LawQuery, bool) -> Result<bool, HookError> + Send + Sync>;

#[derive(Default)]
pub struct HookRegistry {
    game_ready: Vec<(HookGroup, GameReadyHook)>,
    heir_lookup: Vec<(HookGroup, HeirLookupHook)>,
    leader_change: Vec<(HookGroup, LeaderChangeHook)>,
    event_fire: Vec<(HookGroup, EventFireHook)>,
    law_check: Vec<(HookGroup, LawCheckHook)>,
}

impl HookRegistry {
    pub fn on_game_ready(&mut self, group: HookGroup, hook: GameReadyHook) {
        self.game_ready.push((group, hook));
    }

    pub fn on_heir_lookup(&mut self, group: HookGroup, hook: HeirLookupHook) {
        self.heir_lookup.push((group, hook));
    }

    pub fn on_leader_change(&mut self, group: HookGroup, hook: LeaderChangeHook) {
        self.leader_change.push((group, hook));
    }

    pub fn on_event_fire(&mut self, group: HookGroup, hook: EventFireHook) {
        self.event_fire.push((group, hook));
    }

    pub fn on_law_check(&mut self, group: HookGroup, hook: LawCheckHook) {
        self.law_check.push((group, hook));
    }

    /// Whether any hook from `group` is registered at any point.
    pub fn has_group(&self, group: HookGroup) -> bool {
        self.game_ready.iter().any(|(g, _)| *g == group)
            || self.heir_lookup.iter().any(|(g, _)| *g == group)
            || self.leader_change.iter().any(|(g, _)| *g == group)
            || self.event_fire.iter().any(|(g, _)| *g == group)
            || self.law_check.iter().any(|(g, _)| *g == group)
    }

    /// Remove every hook registered under `group`. No-op for an unknown
    /// group.
    pub fn remove_group(&mut self, group: HookGroup) {
        self.game_ready.retain(|(g, _)| *g != group);
        self.heir_lookup.retain(|(g, _)| *g != group);
        self.leader_change.retain(|(g, _)| *g != group);
        self.event_fire.retain(|(g, _)| *g != group);
        self.law_check.retain(|(g, _)| *g != group);
    }

    // -----------------------------------------------------------------------
    // Dispatch — called by the Game facade at each decision site
    // -----------------------------------------------------------------------

    pub(crate) fn run_game_ready(&self, world: &mut World) {
        for (group, hook) in &self.game_ready {
            if let Err(err) = hook(world) {
                tracing::warn!("game-ready hook from '{group}' failed: {err}");
            }
        }
    }

    /// First `NoHeir` wins; errors are skipped.
    pub(crate) fn heir_decision(&self, world: &World, query: &HeirQuery) -> HeirDecision {
        for (group, hook) in &self.heir_lookup {
            match hook(world, query) {
                Ok(HeirDecision::NoHeir) => return HeirDecision::NoHeir,
                Ok(HeirDecision::PassThrough) => {}
                Err(err) => tracing::warn!("heir-lookup hook from '{group}' failed: {err}"),
            }
        }
        HeirDecision::PassThrough
    }

    pub(crate) fn fill_scope(&self, world: &World, player: Entity, scope: &mut DispatchScope) {
        for (group, hook) in &self.leader_change {
            if let Err(err) = hook(world, player, scope) {
                tracing::warn!("leader-change hook from '{group}' failed: {err}");
            }
        }
    }

    /// Any `Cancel` cancels this one firing; errors are skipped.
    pub(crate) fn event_decision(
        &self,
        world: &World,
        scope: &DispatchScope,
        trigger: EventTriggerType,
    ) -> EventDecision {
        for (group, hook) in &self.event_fire {
            match hook(world, scope, trigger) {
                Ok(EventDecision::Cancel) => return EventDecision::Cancel,
                Ok(EventDecision::Allow) => {}
                Err(err) => tracing::warn!("event-fire hook from '{group}' failed: {err}"),
            }
        }
        EventDecision::Allow
    }

    /// Fold hooks over the host's preliminary answer. Results are ANDed, so
    /// hooks can only tighten a `true` into a `false`, never the reverse.
    pub(crate) fn law_decision(&self, world: &World, query: &LawQuery, preliminary: bool) -> bool {
        let mut allowed = preliminary;
        for (group, hook) in &self.law_check {
            match hook(world, query, allowed) {
                Ok(verdict) => allowed = allowed && verdict,
                Err(err) => tracing::warn!("law-check hook from '{group}' failed: {err}"),
            }
        }
        allowed
    }
}

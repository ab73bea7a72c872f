//! Host-equivalent succession subsystem.
//!
//! Players and their courts live in a `bevy_ecs::World`; game data is the
//! [`Infos`] resource; fired events accumulate in the [`EventLog`] resource.
//! Every succession- and law-related operation on [`Game`] consults the
//! [`HookRegistry`] at its decision site, so extensions can reshape behavior
//! without owning any host code.

pub mod components;
pub mod events;
pub mod game;
pub mod hooks;
pub mod infos;
pub(crate) mod laws;
pub mod scope;
mod succession;

pub use components::{
    ActiveLaws, Character, CharacterCore, CourtOf, ElectionPending, Leader, Player, PlayerCore,
};
pub use events::{EventLog, EventRecord};
pub use game::{Game, HostError, SuccessionOutcome};
pub use hooks::{
    EventDecision, HeirDecision, HeirQuery, HookError, HookGroup, HookRegistry, LawQuery,
};
pub use infos::{Globals, Infos, InfosError};
pub use scope::{DispatchScope, ScopeFlag};

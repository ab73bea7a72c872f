//! Game facade: lifecycle, players, succession operations, law adoption,
//! and event dispatch.
//!
//! Every operation that an extension may want to reshape consults the
//! [`HookRegistry`] at its decision site:
//!
//! - `start` → game-ready post-hooks (fires only for new games; a loaded
//!   game is resumed without it)
//! - `find_heir` → heir-lookup pre-hooks, then the default search
//! - `install_leader` → leader-change hooks fill a [`DispatchScope`] that
//!   brackets the installation and its event firings
//! - `fire_trigger*` → event-fire pre-hooks, which may cancel one firing
//! - `can_start_law` → the host's preliminary answer folded through
//!   law-check post-hooks

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use thiserror::Error;

use crate::ids::{EventTriggerType, HeirGender, LawType, Sex, SuccessionOrder};

use super::components::{
    ActiveLaws, Character, CharacterCore, CourtOf, ElectionPending, Leader, Player, PlayerCore,
};
use super::events::{EventLog, EventRecord};
use super::hooks::{EventDecision, HeirDecision, HeirQuery, HookRegistry, LawQuery};
use super::infos::Infos;
use super::scope::DispatchScope;
use super::{laws, succession};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("entity {0:?} is not a player")]
    NotAPlayer(Entity),
    #[error("entity {0:?} is not a character")]
    NotACharacter(Entity),
    #[error("character {0:?} is dead")]
    DeadCandidate(Entity),
    #[error("character {0:?} does not belong to the acting player's court")]
    ForeignCourtier(Entity),
}

/// Result of a full succession attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessionOutcome {
    Installed(Entity),
    /// Every succession order came up empty; the player is leaderless and
    /// awaiting an election.
    ElectionPending,
}

pub struct Game {
    world: World,
    hooks: HookRegistry,
    next_event_id: u64,
}

impl Game {
    pub fn new(infos: Infos) -> Game {
        let mut world = World::new();
        world.insert_resource(infos);
        world.insert_resource(EventLog::new());
        Game {
            world,
            hooks: HookRegistry::default(),
            next_event_id: 1,
        }
    }

    /// A game whose data has not been loaded yet. Lookups against `Infos`
    /// return nothing until [`Game::load_infos`] supplies the tables.
    pub fn unconfigured() -> Game {
        Game::new(Infos::default())
    }

    /// Replace the game data tables (late data load).
    pub fn load_infos(&mut self, infos: Infos) {
        self.world.insert_resource(infos);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    pub fn infos(&self) -> &Infos {
        self.world.resource::<Infos>()
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    pub fn add_player(&mut self, name: impl Into<String>, human: bool) -> Entity {
        self.world
            .spawn((
                Player,
                PlayerCore {
                    name: name.into(),
                    human,
                },
                ActiveLaws::default(),
                Leader(None),
            ))
            .id()
    }

    pub fn add_courtier(
        &mut self,
        player: Entity,
        name: impl Into<String>,
        sex: Sex,
        birth_year: u32,
        kinship: u8,
    ) -> Entity {
        self.world
            .spawn((
                Character,
                CharacterCore {
                    name: name.into(),
                    sex,
                    birth_year,
                    kinship,
                    alive: true,
                },
                CourtOf(player),
            ))
            .id()
    }

    /// New-game ready notification: all players exist, data is in place.
    /// Runs the game-ready post-hooks. Loaded games are resumed without
    /// calling this.
    pub fn start(&mut self) {
        let Game { world, hooks, .. } = self;
        hooks.run_game_ready(world);
    }

    // -----------------------------------------------------------------------
    // Succession
    // -----------------------------------------------------------------------

    /// Who would inherit under one succession order? Heir-lookup hooks may
    /// short-circuit to "no heir", in which case the host search is skipped
    /// entirely for this call.
    pub fn find_heir(
        &mut self,
        player: Entity,
        order: SuccessionOrder,
        gender: HeirGender,
    ) -> Option<Entity> {
        let query = HeirQuery {
            player,
            order,
            gender,
        };
        match self.hooks.heir_decision(&self.world, &query) {
            HeirDecision::NoHeir => None,
            HeirDecision::PassThrough => {
                succession::default_heir(&mut self.world, player, order, gender)
            }
        }
    }

    /// Try every succession order in turn and install the first heir found.
    /// When every order comes up empty, fall through to succession-failed
    /// handling: the player goes leaderless with an election pending and the
    /// fail trigger fires.
    pub fn succeed_leader(&mut self, player: Entity) -> Result<SuccessionOutcome, HostError> {
        for order in SuccessionOrder::ALL {
            if let Some(heir) = self.find_heir(player, order, HeirGender::Any) {
                self.install_leader(player, heir)?;
                return Ok(SuccessionOutcome::Installed(heir));
            }
        }

        let name = self.player_name(player)?;
        if let Some(mut leader) = self.world.get_mut::<Leader>(player) {
            leader.0 = None;
        }
        self.world.entity_mut(player).insert(ElectionPending);
        tracing::info!("succession failed for {name}; election pending");

        if let Some(globals) = self.infos().globals().copied() {
            self.fire_trigger(
                globals.succession_fail,
                format!("{name} found no heir"),
                serde_json::json!({ "player": name }),
            );
        }
        Ok(SuccessionOutcome::ElectionPending)
    }

    /// Install `new_leader` as the leader of `player`.
    ///
    /// The whole installation runs under one [`DispatchScope`] filled by the
    /// leader-change hooks; the scope covers the succession announcements
    /// and is gone on every exit path, early validation errors included.
    pub fn install_leader(&mut self, player: Entity, new_leader: Entity) -> Result<(), HostError> {
        let player_name = self.player_name(player)?;
        let core = self
            .world
            .get::<CharacterCore>(new_leader)
            .ok_or(HostError::NotACharacter(new_leader))?;
        if !core.alive {
            return Err(HostError::DeadCandidate(new_leader));
        }
        let leader_name = core.name.clone();
        let court = self
            .world
            .get::<CourtOf>(new_leader)
            .ok_or(HostError::NotACharacter(new_leader))?;
        if court.0 != player {
            return Err(HostError::ForeignCourtier(new_leader));
        }

        let mut scope = DispatchScope::new();
        self.hooks.fill_scope(&self.world, player, &mut scope);

        if let Some(mut leader) = self.world.get_mut::<Leader>(player) {
            leader.0 = Some(new_leader);
        }
        self.world.entity_mut(player).remove::<ElectionPending>();

        if let Some(globals) = self.infos().globals().copied() {
            let data = serde_json::json!({ "player": player_name, "leader": leader_name });
            self.fire_trigger_scoped(
                &scope,
                globals.succession_us,
                format!("{leader_name} became leader of {player_name}"),
                data.clone(),
            );
            self.fire_trigger_scoped(
                &scope,
                globals.succession_them,
                format!("rivals learn {player_name} has a new leader"),
                data,
            );
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Fire a trigger outside any bracketed operation (empty scope).
    pub fn fire_trigger(
        &mut self,
        trigger: EventTriggerType,
        description: impl Into<String>,
        data: serde_json::Value,
    ) -> bool {
        let scope = DispatchScope::new();
        self.fire_trigger_scoped(&scope, trigger, description, data)
    }

    /// Fire a trigger within the given dispatch scope. Event-fire hooks may
    /// cancel this one firing; a canceled firing reports `false` and leaves
    /// no record.
    pub fn fire_trigger_scoped(
        &mut self,
        scope: &DispatchScope,
        trigger: EventTriggerType,
        description: impl Into<String>,
        data: serde_json::Value,
    ) -> bool {
        match self.hooks.event_decision(&self.world, scope, trigger) {
            EventDecision::Cancel => false,
            EventDecision::Allow => {
                let id = self.next_event_id;
                self.next_event_id += 1;
                self.world.resource_mut::<EventLog>().events.push(EventRecord {
                    id,
                    trigger,
                    description: description.into(),
                    data,
                });
                true
            }
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.world.resource::<EventLog>().events
    }

    // -----------------------------------------------------------------------
    // Laws
    // -----------------------------------------------------------------------

    /// May `player` adopt `law`? The host's own answer first, then the
    /// law-check hooks fold over it (they can only tighten it).
    pub fn can_start_law(&mut self, player: Entity, law: LawType) -> bool {
        let preliminary = laws::base_can_start_law(&self.world, player, law);
        let query = LawQuery { player, law };
        self.hooks.law_decision(&self.world, &query, preliminary)
    }

    /// Adopt `law` if permitted, deactivating any sibling law in its class.
    pub fn adopt_law(&mut self, player: Entity, law: LawType) -> bool {
        if !self.can_start_law(player, law) {
            return false;
        }
        laws::make_active_law(&mut self.world, player, law);
        true
    }

    // -----------------------------------------------------------------------
    // Read helpers
    // -----------------------------------------------------------------------

    pub fn is_human(&self, player: Entity) -> bool {
        self.world
            .get::<PlayerCore>(player)
            .is_some_and(|core| core.human)
    }

    pub fn is_active_law(&self, player: Entity, law: LawType) -> bool {
        self.world
            .get::<ActiveLaws>(player)
            .is_some_and(|laws| laws.contains(law))
    }

    pub fn leader(&self, player: Entity) -> Option<Entity> {
        self.world.get::<Leader>(player).and_then(|leader| leader.0)
    }

    pub fn election_pending(&self, player: Entity) -> bool {
        self.world.get::<ElectionPending>(player).is_some()
    }

    fn player_name(&self, player: Entity) -> Result<String, HostError> {
        self.world
            .get::<PlayerCore>(player)
            .map(|core| core.name.clone())
            .ok_or(HostError::NotAPlayer(player))
    }
}

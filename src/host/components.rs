use std::collections::BTreeSet;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use crate::ids::{LawType, Sex};

// ---------------------------------------------------------------------------
// Marker components
// ---------------------------------------------------------------------------

/// Marks a faction-player entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marks a character entity belonging to some player's court.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Character;

/// Marks a player whose succession failed and is awaiting an election.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ElectionPending;

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

/// Core player identity and control flags.
#[derive(Component, Debug, Clone)]
pub struct PlayerCore {
    pub name: String,
    pub human: bool,
}

/// The set of laws a player currently has active.
#[derive(Component, Debug, Clone, Default)]
pub struct ActiveLaws(pub BTreeSet<LawType>);

impl ActiveLaws {
    pub fn contains(&self, law: LawType) -> bool {
        self.0.contains(&law)
    }
}

/// The player's current leader, if any.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Leader(pub Option<Entity>);

// ---------------------------------------------------------------------------
// Character state
// ---------------------------------------------------------------------------

/// Core character identity.
#[derive(Component, Debug, Clone)]
pub struct CharacterCore {
    pub name: String,
    pub sex: Sex,
    pub birth_year: u32,
    /// Kinship distance to the previous leader; 0 is an immediate child.
    pub kinship: u8,
    pub alive: bool,
}

/// The player whose court this character belongs to.
#[derive(Component, Debug, Clone, Copy)]
pub struct CourtOf(pub Entity);

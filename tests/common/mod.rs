use bevy_ecs::entity::Entity;
use elective_succession::host::{Game, Infos};
use elective_succession::ids::Sex;

pub const GAME_DATA: &str = r#"{
    "law_classes": ["LAWCLASS_ORDER", "LAWCLASS_ECONOMY"],
    "laws": [
        {"name": "LAW_PRIMOGENITURE", "class": "LAWCLASS_ORDER"},
        {"name": "LAW_ULTIMOGENITURE", "class": "LAWCLASS_ORDER"},
        {"name": "LAW_SENIORITY", "class": "LAWCLASS_ORDER"},
        {"name": "LAW_ELECTIVE", "class": "LAWCLASS_ORDER"},
        {"name": "LAW_TITHE", "class": "LAWCLASS_ECONOMY"},
        {"name": "LAW_FREEHOLD", "class": "LAWCLASS_ECONOMY"}
    ],
    "event_triggers": [
        "EVENTTRIGGER_SUCCESSION_US",
        "EVENTTRIGGER_SUCCESSION_THEM",
        "EVENTTRIGGER_SUCCESSION_FAIL"
    ],
    "globals": {
        "succession_us": "EVENTTRIGGER_SUCCESSION_US",
        "succession_them": "EVENTTRIGGER_SUCCESSION_THEM",
        "succession_fail": "EVENTTRIGGER_SUCCESSION_FAIL"
    }
}"#;

pub fn standard_infos() -> Infos {
    Infos::from_json_str(GAME_DATA).expect("game data fixture should parse")
}

pub fn new_game() -> Game {
    Game::new(standard_infos())
}

/// A court of three with distinct ranking outcomes per succession order:
/// Aldric is the eldest, Corin the youngest, Berenice the closest kin and
/// the only woman.
pub struct Court {
    pub aldric: Entity,
    pub berenice: Entity,
    pub corin: Entity,
}

pub fn add_player_with_court(game: &mut Game, name: &str, human: bool) -> (Entity, Court) {
    let player = game.add_player(name, human);
    let court = Court {
        aldric: game.add_courtier(player, "Aldric", Sex::Male, 40, 1),
        berenice: game.add_courtier(player, "Berenice", Sex::Female, 55, 0),
        corin: game.add_courtier(player, "Corin", Sex::Male, 70, 2),
    };
    (player, court)
}

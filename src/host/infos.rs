//! Game data tables: laws, law classes, event triggers, and globals.
//!
//! `Infos` starts empty (`Default`) and stays empty until data is loaded,
//! which models the window between process start and data load: every lookup
//! against an unloaded table returns `None`.

use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{EventTriggerType, LawClassType, LawType};

/// Raw on-disk shape of the game data document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfosData {
    #[serde(default)]
    pub law_classes: Vec<String>,
    #[serde(default)]
    pub laws: Vec<LawData>,
    #[serde(default)]
    pub event_triggers: Vec<String>,
    /// Optional: a data set may ship without a globals table.
    #[serde(default)]
    pub globals: Option<GlobalsData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawData {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalsData {
    pub succession_us: String,
    pub succession_them: String,
    pub succession_fail: String,
}

#[derive(Debug, Error)]
pub enum InfosError {
    #[error("failed to read game data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse game data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("law '{law}' references unknown law class '{class}'")]
    UnknownLawClass { law: String, class: String },
    #[error("globals reference unknown event trigger '{0}'")]
    UnknownTrigger(String),
}

/// A law definition with its class resolved to a table index.
#[derive(Debug, Clone)]
pub struct LawDef {
    pub name: String,
    pub class: LawClassType,
}

/// Well-known event triggers the succession flow fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Globals {
    pub succession_us: EventTriggerType,
    pub succession_them: EventTriggerType,
    pub succession_fail: EventTriggerType,
}

/// Resolved game data tables. Identifier-by-name resolution surface.
#[derive(Resource, Debug, Clone, Default)]
pub struct Infos {
    law_classes: Vec<String>,
    laws: Vec<LawDef>,
    triggers: Vec<String>,
    globals: Option<Globals>,
}

impl Infos {
    /// Resolve a raw data document into indexed tables, validating every
    /// cross-reference.
    pub fn from_data(data: InfosData) -> Result<Infos, InfosError> {
        let mut infos = Infos {
            law_classes: data.law_classes,
            laws: Vec::with_capacity(data.laws.len()),
            triggers: data.event_triggers,
            globals: None,
        };

        for law in data.laws {
            let Some(class) = infos.law_class_type(&law.class) else {
                return Err(InfosError::UnknownLawClass {
                    law: law.name,
                    class: law.class,
                });
            };
            infos.laws.push(LawDef {
                name: law.name,
                class,
            });
        }

        if let Some(globals) = data.globals {
            let resolve = |name: &str| {
                infos
                    .trigger_type(name)
                    .ok_or_else(|| InfosError::UnknownTrigger(name.to_string()))
            };
            infos.globals = Some(Globals {
                succession_us: resolve(&globals.succession_us)?,
                succession_them: resolve(&globals.succession_them)?,
                succession_fail: resolve(&globals.succession_fail)?,
            });
        }

        Ok(infos)
    }

    pub fn from_json_str(json: &str) -> Result<Infos, InfosError> {
        Infos::from_data(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Infos, InfosError> {
        Infos::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Whether any data has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.laws.is_empty() || !self.triggers.is_empty() || !self.law_classes.is_empty()
    }

    pub fn law_type(&self, name: &str) -> Option<LawType> {
        self.laws
            .iter()
            .position(|law| law.name == name)
            .map(|i| LawType(i as u16))
    }

    pub fn law(&self, law: LawType) -> Option<&LawDef> {
        self.laws.get(law.0 as usize)
    }

    pub fn law_class_of(&self, law: LawType) -> Option<LawClassType> {
        self.law(law).map(|def| def.class)
    }

    pub fn law_class_type(&self, name: &str) -> Option<LawClassType> {
        self.law_classes
            .iter()
            .position(|class| class == name)
            .map(|i| LawClassType(i as u16))
    }

    pub fn trigger_type(&self, name: &str) -> Option<EventTriggerType> {
        self.triggers
            .iter()
            .position(|trigger| trigger == name)
            .map(|i| EventTriggerType(i as u16))
    }

    pub fn trigger_name(&self, trigger: EventTriggerType) -> Option<&str> {
        self.triggers.get(trigger.0 as usize).map(String::as_str)
    }

    pub fn globals(&self) -> Option<&Globals> {
        self.globals.as_ref()
    }
}

pub mod elective;
pub mod host;
pub mod ids;

pub use host::{
    DispatchScope, EventLog, EventRecord, Game, Globals, HookError, HookRegistry, HostError,
    Infos, InfosError, ScopeFlag, SuccessionOutcome,
};
pub use ids::{EventTriggerType, HeirGender, LawClassType, LawType, Sex, SuccessionOrder};

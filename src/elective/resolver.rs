//! Lazy, monotonic resolution of data-defined identifiers.

use std::sync::OnceLock;

use crate::host::Infos;
use crate::ids::{EventTriggerType, LawClassType, LawType};

/// Name of the elective law in game data.
pub const ELECTIVE_LAW: &str = "LAW_ELECTIVE";

/// The identifiers the override engine needs, resolved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTypes {
    pub elective_law: LawType,
    pub order_class: LawClassType,
    pub succession_us: EventTriggerType,
}

/// One-shot identifier cache.
///
/// Empty until game data containing [`ELECTIVE_LAW`] is seen, then resolved
/// for the rest of the cache's lifetime. Resolution is monotonic: callers
/// re-invoke [`TypeCache::resolve`] opportunistically until it succeeds, and
/// a success is never revisited. The `OnceLock` makes the check-then-set
/// atomic, so concurrent resolvers race benignly and the first write wins.
#[derive(Debug, Default)]
pub struct TypeCache {
    resolved: OnceLock<ResolvedTypes>,
}

impl TypeCache {
    /// The resolved set, if resolution has succeeded.
    pub fn get(&self) -> Option<&ResolvedTypes> {
        self.resolved.get()
    }

    /// Resolve from `infos` if not already resolved.
    ///
    /// Returns `None` while the elective law is absent from the data, the
    /// expected state before data load, retried on the next call. Once the
    /// law is found, the class and trigger derivations are expected to
    /// succeed; when one does not, that is a data-integrity fault: logged,
    /// non-fatal, and also retried on the next call.
    pub fn resolve<'a>(&'a self, infos: &Infos) -> Option<&'a ResolvedTypes> {
        if let Some(resolved) = self.resolved.get() {
            return Some(resolved);
        }

        let elective_law = infos.law_type(ELECTIVE_LAW)?;
        let Some(order_class) = infos.law_class_of(elective_law) else {
            tracing::warn!("{ELECTIVE_LAW} has no law class in game data");
            return None;
        };
        let Some(globals) = infos.globals() else {
            tracing::warn!("game data defines {ELECTIVE_LAW} but no globals table");
            return None;
        };

        let resolved = self.resolved.get_or_init(|| ResolvedTypes {
            elective_law,
            order_class,
            succession_us: globals.succession_us,
        });
        tracing::info!(
            "resolved elective succession types: law={:?} class={:?} trigger={:?}",
            resolved.elective_law,
            resolved.order_class,
            resolved.succession_us
        );
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_infos() -> Infos {
        Infos::from_json_str(
            r#"{
                "law_classes": ["LAWCLASS_ORDER"],
                "laws": [
                    {"name": "LAW_PRIMOGENITURE", "class": "LAWCLASS_ORDER"},
                    {"name": "LAW_ELECTIVE", "class": "LAWCLASS_ORDER"}
                ],
                "event_triggers": ["US", "THEM", "FAIL"],
                "globals": {
                    "succession_us": "US",
                    "succession_them": "THEM",
                    "succession_fail": "FAIL"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn unloaded_data_stays_unresolved() {
        let cache = TypeCache::default();
        assert!(cache.resolve(&Infos::default()).is_none());
        assert!(cache.get().is_none());
    }

    #[test]
    fn resolves_once_data_is_present() {
        let cache = TypeCache::default();
        let infos = loaded_infos();
        let resolved = *cache.resolve(&infos).unwrap();
        assert_eq!(resolved.elective_law, infos.law_type("LAW_ELECTIVE").unwrap());
        assert_eq!(
            Some(resolved.order_class),
            infos.law_class_type("LAWCLASS_ORDER")
        );
        assert_eq!(Some(resolved.succession_us), infos.trigger_type("US"));
    }

    #[test]
    fn repeated_resolution_is_idempotent() {
        let cache = TypeCache::default();
        let infos = loaded_infos();
        let first = *cache.resolve(&infos).unwrap();
        for _ in 0..5 {
            assert_eq!(*cache.resolve(&infos).unwrap(), first);
        }
        // Even against different (now empty) data, the cached set stands.
        assert_eq!(*cache.resolve(&Infos::default()).unwrap(), first);
    }

    #[test]
    fn partial_data_is_retried_until_complete() {
        let cache = TypeCache::default();
        let partial = Infos::from_json_str(
            r#"{
                "law_classes": ["LAWCLASS_ORDER"],
                "laws": [{"name": "LAW_ELECTIVE", "class": "LAWCLASS_ORDER"}]
            }"#,
        )
        .unwrap();
        // Law present but globals missing: a data-integrity fault, not a
        // permanent failure.
        assert!(cache.resolve(&partial).is_none());
        assert!(cache.get().is_none());

        assert!(cache.resolve(&loaded_infos()).is_some());
    }
}

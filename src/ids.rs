use serde::{Deserialize, Serialize};

/// Index of a law definition in [`crate::host::Infos`].
///
/// Identifiers are only ever minted by `Infos` lookups; an identifier that
/// could not be resolved is represented as `None`, not a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LawType(pub u16);

/// Index of a law class (a group of mutually exclusive laws) in `Infos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LawClassType(pub u16);

/// Index of an event trigger definition in `Infos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventTriggerType(pub u16);

/// Heir-selection strategies tried in sequence when a leader must be
/// replaced. Each strategy ranks the same candidate pool differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessionOrder {
    /// Eldest eligible courtier first.
    Primogeniture,
    /// Youngest eligible courtier first.
    Ultimogeniture,
    /// Closest kinship to the previous leader, age breaking ties.
    Kinship,
}

impl SuccessionOrder {
    /// All strategies, in the order the host tries them.
    pub const ALL: [SuccessionOrder; 3] = [
        SuccessionOrder::Primogeniture,
        SuccessionOrder::Ultimogeniture,
        SuccessionOrder::Kinship,
    ];
}

/// Gender filter applied to an heir query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeirGender {
    Male,
    Female,
    Any,
}

impl HeirGender {
    pub fn admits(self, sex: Sex) -> bool {
        match self {
            HeirGender::Male => sex == Sex::Male,
            HeirGender::Female => sex == Sex::Female,
            HeirGender::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_filter_admits() {
        assert!(HeirGender::Any.admits(Sex::Male));
        assert!(HeirGender::Any.admits(Sex::Female));
        assert!(HeirGender::Male.admits(Sex::Male));
        assert!(!HeirGender::Male.admits(Sex::Female));
        assert!(HeirGender::Female.admits(Sex::Female));
        assert!(!HeirGender::Female.admits(Sex::Male));
    }

    #[test]
    fn all_orders_are_distinct() {
        let [a, b, c] = SuccessionOrder::ALL;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}

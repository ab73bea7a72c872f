//! Call-scoped dispatch flags.
//!
//! A [`DispatchScope`] lives for exactly one bracketed host operation. The
//! bracket creates it empty, leader-change hooks populate it before the
//! operation body runs, and it is dropped on every exit path (success,
//! validation error, or unwind), so no flag can outlive its bracket or leak
//! into another execution context. Event dispatch outside any bracket uses a
//! fresh empty scope.

use std::collections::BTreeSet;

/// Flags a pre-operation hook can attach to the current dispatch scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScopeFlag {
    /// The leadership change underway must not announce the acting player's
    /// own succession.
    SuppressOwnSuccession,
}

#[derive(Debug, Default)]
pub struct DispatchScope {
    flags: BTreeSet<ScopeFlag>,
}

impl DispatchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, flag: ScopeFlag) {
        self.flags.insert(flag);
    }

    pub fn is_set(&self, flag: ScopeFlag) -> bool {
        self.flags.contains(&flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scope_carries_no_flags() {
        let scope = DispatchScope::new();
        assert!(!scope.is_set(ScopeFlag::SuppressOwnSuccession));
    }

    #[test]
    fn set_flag_is_visible() {
        let mut scope = DispatchScope::new();
        scope.set(ScopeFlag::SuppressOwnSuccession);
        assert!(scope.is_set(ScopeFlag::SuppressOwnSuccession));
    }
}

//! Booster bookkeeping - per-game one-shot used/activated flags.
//!
//! Each booster has two independent gates:
//!
//! - `activated`: set by the external economy layer (currency spend or
//!   rewarded ad) before the effect may run. The engine only records the
//!   flag; the negotiation itself lives entirely outside the core.
//! - `used`: the effect has run once this game. Effects refuse to run a
//!   second time.
//!
//! Both reset on level init. `ready` = activated and not yet used.

use crate::types::{BoosterKind, ALL_BOOSTERS};

/// Flags for a single booster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoosterState {
    pub activated: bool,
    pub used: bool,
}

/// Flags for all three boosters, indexed by [`BoosterKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boosters {
    states: [BoosterState; ALL_BOOSTERS.len()],
}

fn index(kind: BoosterKind) -> usize {
    match kind {
        BoosterKind::MoveOut => 0,
        BoosterKind::Undo => 1,
        BoosterKind::Shuffle => 2,
    }
}

impl Boosters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, kind: BoosterKind) -> BoosterState {
        self.states[index(kind)]
    }

    pub fn is_activated(&self, kind: BoosterKind) -> bool {
        self.state(kind).activated
    }

    pub fn is_used(&self, kind: BoosterKind) -> bool {
        self.state(kind).used
    }

    /// Activated and not yet consumed: the effect operation may run.
    pub fn ready(&self, kind: BoosterKind) -> bool {
        let state = self.state(kind);
        state.activated && !state.used
    }

    /// Record an external activation. Returns false if the booster was
    /// already activated (idempotent).
    pub fn activate(&mut self, kind: BoosterKind) -> bool {
        let state = &mut self.states[index(kind)];
        if state.activated {
            return false;
        }
        state.activated = true;
        true
    }

    /// Mark the booster's effect as consumed for the rest of the game.
    pub(crate) fn consume(&mut self, kind: BoosterKind) {
        self.states[index(kind)].used = true;
    }

    /// Reset all flags (level init / restart).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Raw states in [`ALL_BOOSTERS`] order (snapshot support).
    pub fn as_array(&self) -> [BoosterState; ALL_BOOSTERS.len()] {
        self.states
    }

    /// Rebuild from raw states in [`ALL_BOOSTERS`] order (resume support).
    pub fn from_array(states: [BoosterState; ALL_BOOSTERS.len()]) -> Self {
        Self { states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_boosters_are_inactive_and_unused() {
        let boosters = Boosters::new();
        for kind in ALL_BOOSTERS {
            assert!(!boosters.is_activated(kind));
            assert!(!boosters.is_used(kind));
            assert!(!boosters.ready(kind));
        }
    }

    #[test]
    fn activation_makes_ready_once() {
        let mut boosters = Boosters::new();
        assert!(boosters.activate(BoosterKind::Undo));
        assert!(boosters.ready(BoosterKind::Undo));
        // Second activation is a no-op.
        assert!(!boosters.activate(BoosterKind::Undo));
        assert!(boosters.ready(BoosterKind::Undo));
    }

    #[test]
    fn consume_ends_readiness_but_not_activation() {
        let mut boosters = Boosters::new();
        boosters.activate(BoosterKind::Shuffle);
        boosters.consume(BoosterKind::Shuffle);
        assert!(boosters.is_activated(BoosterKind::Shuffle));
        assert!(boosters.is_used(BoosterKind::Shuffle));
        assert!(!boosters.ready(BoosterKind::Shuffle));
    }

    #[test]
    fn boosters_are_independent() {
        let mut boosters = Boosters::new();
        boosters.activate(BoosterKind::MoveOut);
        boosters.consume(BoosterKind::MoveOut);
        assert!(!boosters.is_activated(BoosterKind::Undo));
        assert!(!boosters.is_used(BoosterKind::Shuffle));
    }

    #[test]
    fn reset_clears_everything() {
        let mut boosters = Boosters::new();
        for kind in ALL_BOOSTERS {
            boosters.activate(kind);
            boosters.consume(kind);
        }
        boosters.reset();
        assert_eq!(boosters, Boosters::new());
    }

    #[test]
    fn array_roundtrip() {
        let mut boosters = Boosters::new();
        boosters.activate(BoosterKind::Undo);
        boosters.consume(BoosterKind::Undo);
        boosters.activate(BoosterKind::Shuffle);
        assert_eq!(Boosters::from_array(boosters.as_array()), boosters);
    }
}

//! Unique heroes invariant: a hero is picked or banned at most once.

use super::super::DraftSequencer;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: no hero fills two pick/ban steps.
///
/// Picks and bans share one namespace: a hero banned by either team can
/// no longer be picked by anyone.
pub struct UniqueHeroesInvariant;

impl Invariant<DraftSequencer> for UniqueHeroesInvariant {
    fn holds(draft: &DraftSequencer) -> bool {
        let mut seen = HashSet::new();
        draft
            .steps()
            .iter()
            .filter_map(|step| step.hero())
            .all(|hero| seen.insert(hero))
    }

    fn description() -> &'static str {
        "Each hero is picked or banned at most once"
    }
}

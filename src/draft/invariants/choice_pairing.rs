//! Choice pairing invariant: choice and final steps exist together or not at all.

use super::super::{DraftSequencer, StepKind};
use super::Invariant;

/// Invariant: there are as many `Choice` steps as `Final` steps, at most one each.
///
/// Resolving the choice rewrites both steps in a single transition, so the
/// counts drop from one to zero together.
pub struct ChoicePairingInvariant;

impl Invariant<DraftSequencer> for ChoicePairingInvariant {
    fn holds(draft: &DraftSequencer) -> bool {
        let count = |kind: StepKind| draft.steps().iter().filter(|s| s.kind() == kind).count();
        let choices = count(StepKind::Choice);
        choices <= 1 && choices == count(StepKind::Final)
    }

    fn description() -> &'static str {
        "Choice and final steps are paired"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HeroCode;
    use crate::draft::{ChoiceKind, DraftMode, Step, Team};

    #[test]
    fn test_unresolved_pair_holds() {
        let draft = DraftSequencer::new(&DraftMode::Duel.schema());
        assert!(ChoicePairingInvariant::holds(&draft));
    }

    #[test]
    fn test_resolved_pair_holds() {
        let mut draft = DraftSequencer::new(&DraftMode::Duel.schema());
        for hero in [HeroCode::Alice, HeroCode::Medusa, HeroCode::Sinbad, HeroCode::Loki] {
            draft.select_hero(hero);
        }
        assert!(draft.resolve_choice(ChoiceKind::Map).is_resolved());
        assert!(ChoicePairingInvariant::holds(&draft));
    }

    #[test]
    fn test_half_rewritten_pair_violates() {
        let mut draft = DraftSequencer::new(&DraftMode::Duel.schema());
        draft.steps[4] = Step::empty(StepKind::Map, Team::A);

        assert!(!ChoicePairingInvariant::holds(&draft));
    }
}

//! Contract-based validation for drafting.
//!
//! Preconditions decide whether an action is legal; a failed precondition
//! becomes the [`Rejection`] of an ignored submission. Postconditions check
//! that an applied action kept the draft invariants.

use super::action::{DraftError, Rejection, Selection};
use super::invariants::{DraftInvariants, InvariantSet, InvariantViolation};
use super::sequencer::DraftSequencer;
use super::types::{ChoiceKind, StepKind};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), DraftError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the draft has not completed.
pub struct DraftInProgress;

impl DraftInProgress {
    /// Fails with [`Rejection::DraftComplete`] once the draft is over.
    #[instrument(skip(draft))]
    pub fn check(draft: &DraftSequencer) -> Result<(), Rejection> {
        if draft.is_complete() {
            Err(Rejection::DraftComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the current step accepts this kind of selection.
pub struct StepAccepts;

impl StepAccepts {
    /// Heroes go to pick/ban steps, maps to map steps, positions to position steps.
    #[instrument(skip(draft))]
    pub fn check(selection: &Selection, draft: &DraftSequencer) -> Result<(), Rejection> {
        let step = draft
            .current_step()
            .map_err(|_| Rejection::DraftComplete)?;

        let accepted = match selection {
            Selection::Hero(_) => step.takes_hero(),
            Selection::Map(_) => step.kind() == StepKind::Map,
            Selection::Position(_) => step.kind() == StepKind::Position,
        };

        if accepted {
            Ok(())
        } else {
            Err(Rejection::UnexpectedStep(step.kind()))
        }
    }
}

/// Precondition: a selected hero has not been picked or banned yet.
pub struct HeroAvailable;

impl HeroAvailable {
    /// Passes for map and position selections.
    #[instrument(skip(draft))]
    pub fn check(selection: &Selection, draft: &DraftSequencer) -> Result<(), Rejection> {
        let Selection::Hero(hero) = *selection else {
            return Ok(());
        };

        match draft.hero_draft_index(hero) {
            Some(step) => Err(Rejection::HeroTaken { hero, step }),
            None => Ok(()),
        }
    }
}

/// Composite precondition for selections.
pub struct LegalSelection;

impl LegalSelection {
    /// Validates all preconditions for a selection.
    #[instrument(skip(draft))]
    pub fn check(selection: &Selection, draft: &DraftSequencer) -> Result<(), Rejection> {
        DraftInProgress::check(draft)?;
        StepAccepts::check(selection, draft)?;
        HeroAvailable::check(selection, draft)?;
        Ok(())
    }
}

/// Precondition: the current step is the choice and its final step exists.
pub struct ChoicePending;

impl ChoicePending {
    /// Fails unless the cursor sits on a paired `Choice` step.
    #[instrument(skip(draft))]
    pub fn check(draft: &DraftSequencer) -> Result<(), Rejection> {
        let step = draft
            .current_step()
            .map_err(|_| Rejection::DraftComplete)?;

        if step.kind() != StepKind::Choice {
            return Err(Rejection::UnexpectedStep(step.kind()));
        }

        if draft.index_of(StepKind::Final).is_none() {
            let choice = draft.cursor().unwrap_or_default();
            warn!(choice, "Choice step has no paired final step");
            return Err(Rejection::UnpairedChoice(choice));
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn describe(violations: Vec<InvariantViolation>) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn filled(draft: &DraftSequencer) -> usize {
    draft.steps().iter().filter(|s| s.is_filled()).count()
}

/// Contract for hero, map and position selections.
///
/// Preconditions:
/// - Draft is in progress
/// - Current step accepts the selection
/// - A hero is still available
///
/// Postconditions:
/// - Draft invariants hold
/// - Exactly one more step is filled
pub struct SelectionContract;

impl Contract<DraftSequencer, Selection> for SelectionContract {
    fn pre(draft: &DraftSequencer, selection: &Selection) -> Result<(), Rejection> {
        LegalSelection::check(selection, draft)
    }

    fn post(before: &DraftSequencer, after: &DraftSequencer) -> Result<(), DraftError> {
        DraftInvariants::check_all(after).map_err(|violations| {
            DraftError::InvariantViolation(format!("Postcondition failed: {}", describe(violations)))
        })?;

        if filled(after) != filled(before) + 1 {
            return Err(DraftError::InvariantViolation(
                "Postcondition failed: selection must fill exactly one step".to_string(),
            ));
        }

        Ok(())
    }
}

/// Contract for resolving the choice step.
///
/// Preconditions:
/// - Current step is a paired `Choice`
///
/// Postconditions:
/// - Draft invariants hold
/// - The cursor did not move and no `Choice` step remains
pub struct ChoiceContract;

impl Contract<DraftSequencer, ChoiceKind> for ChoiceContract {
    fn pre(draft: &DraftSequencer, _kind: &ChoiceKind) -> Result<(), Rejection> {
        ChoicePending::check(draft)
    }

    fn post(before: &DraftSequencer, after: &DraftSequencer) -> Result<(), DraftError> {
        DraftInvariants::check_all(after).map_err(|violations| {
            DraftError::InvariantViolation(format!("Postcondition failed: {}", describe(violations)))
        })?;

        if before.cursor() != after.cursor() || after.needs_choice() {
            return Err(DraftError::InvariantViolation(
                "Postcondition failed: choice must resolve in place".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HeroCode, MapCode};
    use crate::draft::{DraftMode, Step, Team};

    #[test]
    fn test_precondition_accepts_hero_on_ban_step() {
        let draft = DraftSequencer::new(&DraftMode::Team.schema());
        assert!(SelectionContract::pre(&draft, &Selection::Hero(HeroCode::Alice)).is_ok());
    }

    #[test]
    fn test_precondition_rejects_map_on_ban_step() {
        let draft = DraftSequencer::new(&DraftMode::Team.schema());
        assert_eq!(
            SelectionContract::pre(&draft, &Selection::Map(MapCode::Soho)),
            Err(Rejection::UnexpectedStep(StepKind::Ban))
        );
    }

    #[test]
    fn test_precondition_rejects_taken_hero() {
        let mut draft = DraftSequencer::new(&DraftMode::Team.schema());
        draft.select_hero(HeroCode::Alice);

        assert_eq!(
            SelectionContract::pre(&draft, &Selection::Hero(HeroCode::Alice)),
            Err(Rejection::HeroTaken {
                hero: HeroCode::Alice,
                step: 0
            })
        );
    }

    #[test]
    fn test_choice_precondition_requires_choice_step() {
        let draft = DraftSequencer::new(&DraftMode::Duel.schema());
        assert_eq!(
            ChoiceContract::pre(&draft, &ChoiceKind::Map),
            Err(Rejection::UnexpectedStep(StepKind::Ban))
        );
    }

    #[test]
    fn test_postcondition_holds_after_selection() {
        let before = DraftSequencer::new(&DraftMode::Team.schema());
        let mut after = before.clone();
        after.select_hero(HeroCode::Alice);

        assert!(SelectionContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = DraftSequencer::new(&DraftMode::Team.schema());
        let mut after = before.clone();
        after.select_hero(HeroCode::Alice);

        after.steps[5] = Step::Pick {
            team: Team::B,
            hero: Some(HeroCode::Medusa),
        };

        assert!(SelectionContract::post(&before, &after).is_err());
    }
}

//! The draft sequencer: a cursor walking a schema's steps.
//!
//! The sequencer is either in progress (with a cursor on a valid step) or
//! complete (with a result). Every submission is applied in full or not at
//! all, and the choice/final rewrite happens inside a single `&mut self`
//! call, so no reader can observe one without the other.

use super::action::{ChoiceResolution, DraftError, Rejection, Selection, Submission};
use super::contracts::{ChoiceContract, Contract, SelectionContract};
use super::result::DraftResult;
use super::schema::DraftSchema;
use super::types::{ChoiceKind, StartPosition, Step, StepKind};
use crate::catalog::{HeroCode, MapCode};
use tracing::{debug, info, instrument};

/// Phase of a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftPhase {
    /// Accepting selections for the step at `cursor`.
    InProgress {
        /// Index of the current step.
        cursor: usize,
    },
    /// Every step is filled.
    Complete(DraftResult),
}

/// Walks a draft schema one selection at a time.
#[derive(Debug, Clone)]
pub struct DraftSequencer {
    pub(super) steps: Vec<Step>,
    pub(super) phase: DraftPhase,
}

impl DraftSequencer {
    /// Starts a draft with fresh steps cloned from the schema.
    #[instrument(skip(schema), fields(len = schema.len()))]
    pub fn new(schema: &DraftSchema) -> Self {
        info!("Starting draft");
        Self {
            steps: schema.instantiate(),
            phase: DraftPhase::InProgress { cursor: 0 },
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns all steps in draft order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &DraftPhase {
        &self.phase
    }

    /// Returns the cursor, or `None` once complete.
    pub fn cursor(&self) -> Option<usize> {
        match self.phase {
            DraftPhase::InProgress { cursor } => Some(cursor),
            DraftPhase::Complete(_) => None,
        }
    }

    /// Returns true once every step is filled.
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, DraftPhase::Complete(_))
    }

    /// Returns the result of a complete draft.
    pub fn result(&self) -> Option<&DraftResult> {
        match &self.phase {
            DraftPhase::Complete(result) => Some(result),
            DraftPhase::InProgress { .. } => None,
        }
    }

    /// Returns the step at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::AlreadyComplete`] once the draft has completed.
    #[instrument(skip(self))]
    pub fn current_step(&self) -> Result<&Step, DraftError> {
        match self.phase {
            DraftPhase::InProgress { cursor } => {
                self.steps.get(cursor).ok_or(DraftError::AlreadyComplete)
            }
            DraftPhase::Complete(_) => Err(DraftError::AlreadyComplete),
        }
    }

    /// Returns the pick or ban step that consumed `hero`, if any.
    #[instrument(skip(self))]
    pub fn hero_draft_step(&self, hero: HeroCode) -> Option<&Step> {
        self.hero_draft_index(hero).map(|index| &self.steps[index])
    }

    /// Returns the index of the pick or ban step that consumed `hero`.
    pub fn hero_draft_index(&self, hero: HeroCode) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.takes_hero() && step.hero() == Some(hero))
    }

    /// Returns every picked or banned hero with the step that took it.
    #[instrument(skip(self))]
    pub fn unavailable_heroes(&self) -> Vec<(HeroCode, &Step)> {
        self.steps
            .iter()
            .filter_map(|step| step.hero().map(|hero| (hero, step)))
            .collect()
    }

    /// Returns true while a `Choice` step is unresolved.
    pub fn needs_choice(&self) -> bool {
        self.index_of(StepKind::Choice).is_some()
    }

    pub(super) fn index_of(&self, kind: StepKind) -> Option<usize> {
        self.steps.iter().position(|step| step.kind() == kind)
    }

    // ─────────────────────────────────────────────────────────
    //  Actions
    // ─────────────────────────────────────────────────────────

    /// Submits any selection.
    ///
    /// Map and position selections resolve a pending choice first, exactly
    /// like [`DraftSequencer::select_map`] and [`DraftSequencer::select_position`].
    #[instrument(skip(self))]
    pub fn submit(&mut self, selection: Selection) -> Submission {
        match selection {
            Selection::Hero(hero) => self.select_hero(hero),
            Selection::Map(map) => self.select_map(map),
            Selection::Position(position) => self.select_position(position),
        }
    }

    /// Picks or bans `hero` on the current step.
    ///
    /// Ignored unless the current step is a pick or ban and `hero` was not
    /// picked or banned before by either team.
    #[instrument(skip(self))]
    pub fn select_hero(&mut self, hero: HeroCode) -> Submission {
        self.apply(Selection::Hero(hero))
    }

    /// Chooses the map.
    ///
    /// A pending choice is resolved as [`ChoiceKind::Map`] first; then the
    /// map is written if the current step is a map step.
    #[instrument(skip(self))]
    pub fn select_map(&mut self, map: MapCode) -> Submission {
        if self.needs_choice() {
            self.resolve_choice(ChoiceKind::Map);
        }
        self.apply(Selection::Map(map))
    }

    /// Chooses the starting position.
    ///
    /// A pending choice is resolved as [`ChoiceKind::Position`] first; then
    /// the position is written if the current step is a position step.
    #[instrument(skip(self))]
    pub fn select_position(&mut self, position: StartPosition) -> Submission {
        if self.needs_choice() {
            self.resolve_choice(ChoiceKind::Position);
        }
        self.apply(Selection::Position(position))
    }

    /// Resolves the current `Choice` step.
    ///
    /// The choice step becomes an empty step of `kind` and the final step
    /// becomes an empty step of the other kind, both keeping their teams.
    /// The cursor does not move.
    #[instrument(skip(self))]
    pub fn resolve_choice(&mut self, kind: ChoiceKind) -> ChoiceResolution {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(rejection) = ChoiceContract::pre(self, &kind) {
            debug!(%rejection, "Choice ignored");
            return ChoiceResolution::Ignored(rejection);
        }

        let (Some(choice), Some(paired)) = (self.cursor(), self.index_of(StepKind::Final)) else {
            return ChoiceResolution::Ignored(Rejection::DraftComplete);
        };

        let choice_team = self.steps[choice].team();
        let paired_team = self.steps[paired].team();
        self.steps[choice] = Step::empty(kind.into(), choice_team);
        self.steps[paired] = Step::empty(kind.other().into(), paired_team);

        #[cfg(debug_assertions)]
        self.verify(ChoiceContract::post(&before, self));

        info!(%kind, choice, paired, team = %choice_team, "Choice resolved");
        ChoiceResolution::Resolved {
            kind,
            choice,
            paired,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Writes a legal selection into the current step and advances.
    fn apply(&mut self, selection: Selection) -> Submission {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(rejection) = SelectionContract::pre(self, &selection) {
            debug!(%selection, %rejection, "Selection ignored");
            return Submission::Ignored(rejection);
        }

        let Some(cursor) = self.cursor() else {
            return Submission::Ignored(Rejection::DraftComplete);
        };

        let written = match (self.steps.get_mut(cursor), selection) {
            (Some(Step::Pick { hero, .. } | Step::Ban { hero, .. }), Selection::Hero(value)) => {
                *hero = Some(value);
                true
            }
            (Some(Step::Map { map, .. }), Selection::Map(value)) => {
                *map = Some(value);
                true
            }
            (Some(Step::Position { position, .. }), Selection::Position(value)) => {
                *position = Some(value);
                true
            }
            _ => false,
        };

        if !written {
            let kind = self.steps[cursor].kind();
            return Submission::Ignored(Rejection::UnexpectedStep(kind));
        }

        debug!(cursor, %selection, "Selection applied");
        let submission = self.advance(cursor);

        #[cfg(debug_assertions)]
        self.verify(SelectionContract::post(&before, self));

        submission
    }

    /// Moves past the step at `cursor`, completing the draft after the last step.
    fn advance(&mut self, cursor: usize) -> Submission {
        let next = cursor + 1;

        if next == self.steps.len() {
            let result = DraftResult::from_steps(&self.steps);
            info!(
                team_a = ?result.team_a(),
                team_b = ?result.team_b(),
                map = ?result.map(),
                first_team = ?result.first_team(),
                "Draft complete"
            );
            self.phase = DraftPhase::Complete(result.clone());
            return Submission::Completed(result);
        }

        self.phase = DraftPhase::InProgress { cursor: next };
        Submission::Advanced { cursor: next }
    }

    /// Reports a failed postcondition (debug builds only).
    #[cfg(debug_assertions)]
    fn verify(&self, postcondition: Result<(), DraftError>) {
        if let Err(err) = postcondition {
            tracing::error!(%err, cursor = ?self.cursor(), "Draft postcondition failed");
            debug_assert!(false, "{}", err);
        }
    }
}

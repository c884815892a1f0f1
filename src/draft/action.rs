//! First-class action types for drafting.
//!
//! A selection is the drafting team's intent. The sequencer either applies it
//! or reports why it was ignored; ignored selections never change state.

use super::result::DraftResult;
use super::types::{ChoiceKind, StartPosition, StepKind};
use crate::catalog::{HeroCode, MapCode};
use serde::{Deserialize, Serialize};

/// A value submitted for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Selection {
    /// A hero for a pick or ban step.
    Hero(HeroCode),
    /// A map for a map step.
    Map(MapCode),
    /// A starting position for a position step.
    Position(StartPosition),
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Hero(hero) => write!(f, "hero {}", hero),
            Selection::Map(map) => write!(f, "map {}", map),
            Selection::Position(position) => write!(f, "position {}", position),
        }
    }
}

/// Why a selection or choice was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The draft has already completed.
    #[display("Draft is already complete")]
    DraftComplete,

    /// The current step does not accept this kind of value.
    #[display("Current step is a {} step", _0)]
    UnexpectedStep(StepKind),

    /// The hero was already picked or banned.
    #[display("{} was already taken at step {}", hero, step)]
    HeroTaken {
        /// The requested hero.
        hero: HeroCode,
        /// Index of the pick or ban step holding it.
        step: usize,
    },

    /// A choice step has no paired final step.
    #[display("Choice step {} has no paired final step", _0)]
    UnpairedChoice(usize),
}

/// Outcome of submitting a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The value was written and the cursor moved to `cursor`.
    Advanced {
        /// The new cursor.
        cursor: usize,
    },
    /// The value was written to the last step. Returned exactly once per draft.
    Completed(DraftResult),
    /// Nothing changed.
    Ignored(Rejection),
}

impl Submission {
    /// Returns true if the selection changed the draft.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Submission::Ignored(_))
    }

    /// Returns the rejection reason of an ignored selection.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Submission::Ignored(rejection) => Some(*rejection),
            _ => None,
        }
    }

    /// Returns the result of the completing selection.
    pub fn into_result(self) -> Option<DraftResult> {
        match self {
            Submission::Completed(result) => Some(result),
            _ => None,
        }
    }
}

/// Outcome of resolving the choice step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceResolution {
    /// Both steps were rewritten.
    Resolved {
        /// What the choice step became.
        kind: ChoiceKind,
        /// Index of the former choice step.
        choice: usize,
        /// Index of the former final step.
        paired: usize,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl ChoiceResolution {
    /// Returns true if the steps were rewritten.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ChoiceResolution::Resolved { .. })
    }
}

/// Error raised by the draft sequencer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DraftError {
    /// The draft is complete; there is no current step.
    #[display("Sequencer already complete")]
    AlreadyComplete,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for DraftError {}

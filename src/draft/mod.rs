//! Hero drafting: schemas, steps and the sequencer that walks them.

mod action;
mod contracts;
mod invariants;
mod result;
mod schema;
mod sequencer;
mod types;

pub use action::{ChoiceResolution, DraftError, Rejection, Selection, Submission};
pub use contracts::{
    ChoiceContract, ChoicePending, Contract, DraftInProgress, HeroAvailable, LegalSelection,
    SelectionContract, StepAccepts,
};
pub use invariants::{
    ChoicePairingInvariant, DraftInvariants, FilledPrefixInvariant, Invariant, InvariantSet,
    InvariantViolation, UniqueHeroesInvariant,
};
pub use result::DraftResult;
pub use schema::{DraftMode, DraftSchema, SchemaError, StepTemplate};
pub use sequencer::{DraftPhase, DraftSequencer};
pub use types::{ChoiceKind, StartPosition, Step, StepKind, Team};

//! Hero Draft library - pick/ban drafting for team board-game matches
//!
//! Two teams ban and pick heroes, then settle the map and starting position
//! according to a draft schema. The finished draft yields both rosters, the
//! map, and which team moves first.
//!
//! # Architecture
//!
//! - **Catalog**: sets, heroes and maps as closed code enums
//! - **Pool**: enabled sets, their persistence, and the heroes/maps they provide
//! - **Draft**: schemas, steps, and the sequencer that walks them
//! - **Match link**: the query-string hand-off of a finished draft
//!
//! # Example
//!
//! ```
//! use hero_draft::{DraftMode, DraftSequencer, HeroCode, MapCode, StartPosition, Submission, Team};
//!
//! let mut draft = DraftSequencer::new(&DraftMode::Fixed.schema());
//! draft.select_hero(HeroCode::Alice);
//! draft.select_hero(HeroCode::Medusa);
//! draft.select_map(MapCode::Sarpedon);
//!
//! let Submission::Completed(result) = draft.select_position(StartPosition::Second) else {
//!     panic!("draft should be complete");
//! };
//! assert_eq!(result.first_team(), &Some(Team::B));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod draft;
mod match_link;
mod pool;

// Crate-level exports - Catalog
pub use catalog::{HeroCode, MapCode, SetCode, SetContent};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, STORAGE_DIR_ENV};

// Crate-level exports - Drafting
pub use draft::{
    ChoiceContract, ChoiceKind, ChoicePairingInvariant, ChoicePending, ChoiceResolution, Contract,
    DraftError, DraftInProgress, DraftInvariants, DraftMode, DraftPhase, DraftResult, DraftSchema,
    DraftSequencer, FilledPrefixInvariant, HeroAvailable, Invariant, InvariantSet,
    InvariantViolation, LegalSelection, Rejection, SchemaError, Selection, SelectionContract,
    StartPosition, Step, StepAccepts, StepKind, StepTemplate, Submission, Team,
    UniqueHeroesInvariant,
};

// Crate-level exports - Match hand-off
pub use match_link::MatchLink;

// Crate-level exports - Pool
pub use pool::{
    ACTIVE_SETS_KEY, ActiveSets, DraftPool, FileStorage, MemoryStorage, PoolResolver,
    RandomSample, SetMembership, Storage, StorageError,
};

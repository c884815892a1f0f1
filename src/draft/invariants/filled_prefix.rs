//! Filled prefix invariant: exactly the steps behind the cursor hold values.

use super::super::DraftSequencer;
use super::Invariant;

/// Invariant: every step before the cursor is filled, every other step is empty.
///
/// Once the draft is complete, every step is filled. A `Choice` or `Final`
/// step can therefore never sit behind the cursor.
pub struct FilledPrefixInvariant;

impl Invariant<DraftSequencer> for FilledPrefixInvariant {
    fn holds(draft: &DraftSequencer) -> bool {
        let boundary = draft.cursor().unwrap_or(draft.steps().len());
        draft
            .steps()
            .iter()
            .enumerate()
            .all(|(index, step)| step.is_filled() == (index < boundary))
    }

    fn description() -> &'static str {
        "Steps before the cursor are filled and the rest are empty"
    }
}

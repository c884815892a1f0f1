//! Draft schemas: the ordered step templates that define a draft format.

use super::types::{Step, StepKind, Team};
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use tracing::{debug, instrument, warn};

/// A step template: kind and team, no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct StepTemplate {
    /// Kind of the step.
    pub kind: StepKind,
    /// Team that performs the step.
    pub team: Team,
}

/// Reasons a list of templates is not a usable draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SchemaError {
    /// The schema has no steps.
    #[display("Draft schema has no steps")]
    Empty,

    /// More than one step of a kind that must be unique.
    #[display("Draft schema has {} {} steps, at most one is allowed", count, kind)]
    Duplicate {
        /// The duplicated kind (`Choice` or `Final`).
        kind: StepKind,
        /// How many were found.
        count: usize,
    },

    /// A `Choice` or `Final` step without its partner.
    #[display("Draft schema has a {} step without a {} step", present, missing)]
    Unpaired {
        /// The kind that is present.
        present: StepKind,
        /// The kind that is missing.
        missing: StepKind,
    },

    /// The `Final` step comes before the `Choice` step.
    #[display("Draft schema places the final step (index {}) before the choice step (index {})", final_index, choice_index)]
    FinalBeforeChoice {
        /// Index of the choice step.
        choice_index: usize,
        /// Index of the final step.
        final_index: usize,
    },
}

/// A validated, immutable draft template.
///
/// Sequencers clone the template into fresh steps; the schema itself is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSchema {
    templates: Vec<StepTemplate>,
}

impl DraftSchema {
    /// Validates templates into a schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the list is empty, or if `Choice`/`Final`
    /// steps are duplicated, unpaired, or out of order.
    #[instrument(skip(templates), fields(len = templates.len()))]
    pub fn new(templates: Vec<StepTemplate>) -> Result<Self, SchemaError> {
        if templates.is_empty() {
            warn!("Rejecting empty draft schema");
            return Err(SchemaError::Empty);
        }

        let positions = |kind: StepKind| -> Vec<usize> {
            templates
                .iter()
                .enumerate()
                .filter(|(_, t)| t.kind == kind)
                .map(|(i, _)| i)
                .collect()
        };
        let choices = positions(StepKind::Choice);
        let finals = positions(StepKind::Final);

        for (kind, found) in [(StepKind::Choice, &choices), (StepKind::Final, &finals)] {
            if found.len() > 1 {
                warn!(%kind, count = found.len(), "Rejecting schema with duplicate step");
                return Err(SchemaError::Duplicate {
                    kind,
                    count: found.len(),
                });
            }
        }

        match (choices.first(), finals.first()) {
            (Some(_), None) => Err(SchemaError::Unpaired {
                present: StepKind::Choice,
                missing: StepKind::Final,
            }),
            (None, Some(_)) => Err(SchemaError::Unpaired {
                present: StepKind::Final,
                missing: StepKind::Choice,
            }),
            (Some(&choice_index), Some(&final_index)) if final_index < choice_index => {
                Err(SchemaError::FinalBeforeChoice {
                    choice_index,
                    final_index,
                })
            }
            _ => {
                debug!(len = templates.len(), "Draft schema validated");
                Ok(Self { templates })
            }
        }
    }

    /// Builds a schema from `(kind, team)` pairs.
    ///
    /// # Errors
    ///
    /// See [`DraftSchema::new`].
    pub fn from_pairs(pairs: &[(StepKind, Team)]) -> Result<Self, SchemaError> {
        Self::new(
            pairs
                .iter()
                .map(|&(kind, team)| StepTemplate::new(kind, team))
                .collect(),
        )
    }

    /// Returns the templates in draft order.
    pub fn templates(&self) -> &[StepTemplate] {
        &self.templates
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false: validated schemas are never empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns true if the schema contains a `Choice`/`Final` pair.
    pub fn has_choice(&self) -> bool {
        self.templates.iter().any(|t| t.kind == StepKind::Choice)
    }

    /// Creates fresh, empty steps from the templates.
    #[instrument(skip(self))]
    pub fn instantiate(&self) -> Vec<Step> {
        self.templates
            .iter()
            .map(|t| Step::empty(t.kind, t.team))
            .collect()
    }
}

impl<'de> Deserialize<'de> for DraftSchema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            templates: Vec<StepTemplate>,
        }

        let raw = Raw::deserialize(deserializer)?;
        DraftSchema::new(raw.templates).map_err(serde::de::Error::custom)
    }
}

/// Built-in draft formats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DraftMode {
    /// One hero per side, one ban each, map/position decided by choice.
    Duel,
    /// Two heroes per side, one ban each, map/position decided by choice.
    #[default]
    Team,
    /// One hero per side with fixed map (B) and position (A) steps.
    Fixed,
}

impl DraftMode {
    /// Returns the schema of this mode.
    #[instrument]
    pub fn schema(self) -> DraftSchema {
        use StepKind::*;
        use Team::{A, B};

        let pairs: &[(StepKind, Team)] = match self {
            DraftMode::Duel => &[(Ban, A), (Ban, B), (Pick, A), (Pick, B), (Choice, A), (Final, B)],
            DraftMode::Team => &[
                (Ban, A),
                (Ban, B),
                (Pick, A),
                (Pick, B),
                (Pick, A),
                (Pick, B),
                (Choice, A),
                (Final, B),
            ],
            DraftMode::Fixed => &[(Pick, A), (Pick, B), (Map, B), (Position, A)],
        };

        DraftSchema {
            templates: pairs
                .iter()
                .map(|&(kind, team)| StepTemplate::new(kind, team))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_modes_validate() {
        for mode in DraftMode::iter() {
            let schema = mode.schema();
            assert_eq!(DraftSchema::new(schema.templates().to_vec()), Ok(schema));
        }
    }

    #[test]
    fn test_instantiate_produces_empty_steps() {
        let steps = DraftMode::Fixed.schema().instantiate();
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| !s.is_filled()));
        assert_eq!(steps[2], Step::empty(StepKind::Map, Team::B));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DraftSchema = serde_json::from_str(
            r#"{"templates":[{"kind":"pick","team":"A"},{"kind":"pick","team":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(ok.len(), 2);

        let bad: Result<DraftSchema, _> =
            serde_json::from_str(r#"{"templates":[{"kind":"choice","team":"A"}]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_mode_parses_from_lowercase() {
        assert_eq!("duel".parse::<DraftMode>(), Ok(DraftMode::Duel));
        assert_eq!(DraftMode::default(), DraftMode::Team);
    }
}

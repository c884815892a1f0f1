//! Tests for draft schema validation.

use hero_draft::{DraftMode, DraftSchema, SchemaError, StepKind, StepTemplate, Team};

#[test]
fn test_empty_schema_rejected() {
    assert_eq!(DraftSchema::new(Vec::new()), Err(SchemaError::Empty));
}

#[test]
fn test_choice_without_final_rejected() {
    let result = DraftSchema::from_pairs(&[(StepKind::Pick, Team::A), (StepKind::Choice, Team::B)]);
    assert_eq!(
        result,
        Err(SchemaError::Unpaired {
            present: StepKind::Choice,
            missing: StepKind::Final
        })
    );
}

#[test]
fn test_final_without_choice_rejected() {
    let result = DraftSchema::from_pairs(&[(StepKind::Final, Team::B)]);
    assert!(matches!(result, Err(SchemaError::Unpaired { .. })));
}

#[test]
fn test_duplicate_choice_rejected() {
    let result = DraftSchema::from_pairs(&[
        (StepKind::Choice, Team::A),
        (StepKind::Choice, Team::B),
        (StepKind::Final, Team::B),
    ]);
    assert_eq!(
        result,
        Err(SchemaError::Duplicate {
            kind: StepKind::Choice,
            count: 2
        })
    );
}

#[test]
fn test_final_before_choice_rejected() {
    let result = DraftSchema::from_pairs(&[(StepKind::Final, Team::B), (StepKind::Choice, Team::A)]);
    assert_eq!(
        result,
        Err(SchemaError::FinalBeforeChoice {
            choice_index: 1,
            final_index: 0
        })
    );
}

#[test]
fn test_schema_without_map_or_position_is_allowed() {
    let schema = DraftSchema::new(vec![
        StepTemplate::new(StepKind::Pick, Team::A),
        StepTemplate::new(StepKind::Pick, Team::B),
    ])
    .expect("Valid schema");

    assert_eq!(schema.len(), 2);
    assert!(!schema.has_choice());
}

#[test]
fn test_error_messages() {
    assert_eq!(SchemaError::Empty.to_string(), "Draft schema has no steps");
    assert_eq!(
        SchemaError::Unpaired {
            present: StepKind::Final,
            missing: StepKind::Choice
        }
        .to_string(),
        "Draft schema has a final step without a choice step"
    );
}

#[test]
fn test_team_mode_layout() {
    let schema = DraftMode::Team.schema();
    let kinds: Vec<StepKind> = schema.templates().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Ban,
            StepKind::Ban,
            StepKind::Pick,
            StepKind::Pick,
            StepKind::Pick,
            StepKind::Pick,
            StepKind::Choice,
            StepKind::Final,
        ]
    );
    assert!(schema.has_choice());
}

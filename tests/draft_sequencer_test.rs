//! Tests for the draft sequencer state machine.

use hero_draft::{
    ChoiceKind, ChoiceResolution, DraftError, DraftMode, DraftPhase, DraftSchema, DraftSequencer,
    HeroCode, MapCode, MatchLink, Rejection, Selection, StartPosition, Step, StepKind,
    Submission, Team,
};

fn team_schema() -> DraftSchema {
    use StepKind::*;
    DraftSchema::from_pairs(&[
        (Ban, Team::A),
        (Ban, Team::B),
        (Pick, Team::A),
        (Pick, Team::B),
        (Pick, Team::A),
        (Pick, Team::B),
        (Choice, Team::A),
        (Final, Team::B),
    ])
    .expect("Valid schema")
}

fn draft_heroes(draft: &mut DraftSequencer, heroes: &[HeroCode]) {
    for hero in heroes {
        assert!(draft.select_hero(*hero).is_applied(), "{hero} should be accepted");
    }
}

#[test]
fn test_end_to_end_team_draft() {
    let mut draft = DraftSequencer::new(&team_schema());

    draft_heroes(
        &mut draft,
        &[
            HeroCode::Alice,
            HeroCode::Medusa,
            HeroCode::Sinbad,
            HeroCode::KingArthur,
            HeroCode::Achilles,
            HeroCode::Yennenga,
        ],
    );
    assert_eq!(draft.cursor(), Some(6));

    assert_eq!(
        draft.resolve_choice(ChoiceKind::Position),
        ChoiceResolution::Resolved {
            kind: ChoiceKind::Position,
            choice: 6,
            paired: 7
        }
    );
    assert_eq!(draft.steps()[6], Step::empty(StepKind::Position, Team::A));
    assert_eq!(draft.steps()[7], Step::empty(StepKind::Map, Team::B));

    assert_eq!(
        draft.select_position(StartPosition::Second),
        Submission::Advanced { cursor: 7 }
    );

    let result = draft
        .select_map(MapCode::Venice)
        .into_result()
        .expect("Draft should complete");

    assert_eq!(result.team_a(), &vec![HeroCode::Sinbad, HeroCode::Achilles]);
    assert_eq!(result.team_b(), &vec![HeroCode::KingArthur, HeroCode::Yennenga]);
    assert_eq!(result.map(), &Some(MapCode::Venice));
    assert_eq!(result.first_team(), &Some(Team::B));
    assert_eq!(draft.phase(), &DraftPhase::Complete(result.clone()));

    assert_eq!(
        MatchLink::from(&result).query(),
        "teamA=SINBAD,ACHILLES&teamB=ARTHUR,YENNENGA&map=VENICE&first=B"
    );
}

#[test]
fn test_current_step_fails_after_completion() {
    let mut draft = DraftSequencer::new(&DraftMode::Fixed.schema());
    draft_heroes(&mut draft, &[HeroCode::Alice, HeroCode::Medusa]);
    draft.select_map(MapCode::Sarpedon);
    draft.select_position(StartPosition::First);
    assert!(draft.is_complete());

    assert_eq!(
        draft.select_hero(HeroCode::Loki),
        Submission::Ignored(Rejection::DraftComplete)
    );
    assert_eq!(draft.current_step(), Err(DraftError::AlreadyComplete));
    assert_eq!(draft.cursor(), None);
}

#[test]
fn test_completion_is_reported_once() {
    let mut draft = DraftSequencer::new(&DraftMode::Fixed.schema());
    let selections = [
        Selection::Hero(HeroCode::Alice),
        Selection::Hero(HeroCode::Medusa),
        Selection::Map(MapCode::Soho),
        Selection::Position(StartPosition::Second),
        Selection::Position(StartPosition::First),
    ];

    let completions = selections
        .into_iter()
        .map(|selection| draft.submit(selection))
        .filter(|submission| matches!(submission, Submission::Completed(_)))
        .count();

    assert_eq!(completions, 1);
    assert_eq!(
        draft.result().and_then(|r| *r.first_team()),
        Some(Team::B)
    );
}

#[test]
fn test_plain_schema_completes_in_len_submissions() {
    use StepKind::*;
    let schema = DraftSchema::from_pairs(&[
        (Ban, Team::B),
        (Pick, Team::A),
        (Pick, Team::B),
        (Pick, Team::B),
        (Pick, Team::A),
        (Map, Team::A),
        (Position, Team::B),
    ])
    .expect("Valid schema");

    let selections = [
        Selection::Hero(HeroCode::Dracula),
        Selection::Hero(HeroCode::Sherlock),
        Selection::Hero(HeroCode::InvisibleMan),
        Selection::Hero(HeroCode::JekyllHyde),
        Selection::Hero(HeroCode::Buffy),
        Selection::Map(MapCode::Baskerville),
        Selection::Position(StartPosition::First),
    ];

    let mut draft = DraftSequencer::new(&schema);
    assert!(!draft.needs_choice());

    for (index, selection) in selections.into_iter().enumerate() {
        let submission = draft.submit(selection);
        assert!(submission.is_applied(), "selection {index} was ignored");
        if index + 1 < schema.len() {
            assert_eq!(submission, Submission::Advanced { cursor: index + 1 });
        }
    }

    let result = draft.result().expect("Complete");
    assert_eq!(result.team_a(), &vec![HeroCode::Sherlock, HeroCode::Buffy]);
    assert_eq!(
        result.team_b(),
        &vec![HeroCode::InvisibleMan, HeroCode::JekyllHyde]
    );
    assert_eq!(result.first_team(), &Some(Team::B));
}

#[test]
fn test_hero_is_unique_across_picks_and_bans() {
    let mut draft = DraftSequencer::new(&team_schema());
    draft.select_hero(HeroCode::Loki);

    for _ in 0..3 {
        let before = draft.steps().to_vec();
        assert_eq!(
            draft.select_hero(HeroCode::Loki),
            Submission::Ignored(Rejection::HeroTaken {
                hero: HeroCode::Loki,
                step: 0
            })
        );
        assert_eq!(draft.steps(), before.as_slice());
        assert_eq!(draft.cursor(), Some(1));
    }

    // Team B bans something else, then team A cannot pick the banned hero either.
    draft.select_hero(HeroCode::Pandora);
    assert!(!draft.select_hero(HeroCode::Loki).is_applied());
    assert!(!draft.select_hero(HeroCode::Pandora).is_applied());
    assert!(draft.select_hero(HeroCode::Chupacabra).is_applied());
}

#[test]
fn test_mismatched_selection_changes_nothing() {
    let mut draft = DraftSequencer::new(&team_schema());
    draft.select_hero(HeroCode::Alice);
    draft.select_hero(HeroCode::Medusa);

    let before = draft.clone();
    assert_eq!(
        draft.select_map(MapCode::Sarpedon),
        Submission::Ignored(Rejection::UnexpectedStep(StepKind::Pick))
    );
    assert_eq!(
        draft.select_position(StartPosition::First),
        Submission::Ignored(Rejection::UnexpectedStep(StepKind::Pick))
    );

    assert_eq!(draft.steps(), before.steps());
    assert_eq!(draft.cursor(), before.cursor());
    assert!(draft.needs_choice());
}

#[test]
fn test_hero_on_choice_step_is_ignored() {
    let mut draft = DraftSequencer::new(&DraftMode::Duel.schema());
    draft_heroes(
        &mut draft,
        &[HeroCode::Ali, HeroCode::BruceLee, HeroCode::Ciri, HeroCode::Geralt],
    );

    assert_eq!(
        draft.select_hero(HeroCode::Leshen),
        Submission::Ignored(Rejection::UnexpectedStep(StepKind::Choice))
    );
    assert!(draft.needs_choice());
}

#[test]
fn test_resolve_choice_as_map_pairs_final_with_position() {
    let mut draft = DraftSequencer::new(&DraftMode::Duel.schema());
    draft_heroes(
        &mut draft,
        &[HeroCode::Ali, HeroCode::BruceLee, HeroCode::Ciri, HeroCode::Geralt],
    );

    assert!(draft.resolve_choice(ChoiceKind::Map).is_resolved());
    assert_eq!(draft.steps()[4], Step::empty(StepKind::Map, Team::A));
    assert_eq!(draft.steps()[5], Step::empty(StepKind::Position, Team::B));
    assert_eq!(draft.cursor(), Some(4));
    assert!(!draft.needs_choice());

    // Resolving again is a no-op: the current step is no longer a choice.
    assert_eq!(
        draft.resolve_choice(ChoiceKind::Position),
        ChoiceResolution::Ignored(Rejection::UnexpectedStep(StepKind::Map))
    );
}

#[test]
fn test_select_position_resolves_choice() {
    let mut draft = DraftSequencer::new(&DraftMode::Duel.schema());
    draft_heroes(
        &mut draft,
        &[HeroCode::Ali, HeroCode::BruceLee, HeroCode::Ciri, HeroCode::Geralt],
    );

    assert_eq!(
        draft.select_position(StartPosition::First),
        Submission::Advanced { cursor: 5 }
    );
    let result = draft
        .select_map(MapCode::KaerMorhen)
        .into_result()
        .expect("Complete");

    assert_eq!(result.team_a(), &vec![HeroCode::Ciri]);
    assert_eq!(result.team_b(), &vec![HeroCode::Geralt]);
    assert_eq!(result.first_team(), &Some(Team::A));
}

#[test]
fn test_schema_is_not_mutated_by_draft() {
    let schema = DraftMode::Duel.schema();
    let mut draft = DraftSequencer::new(&schema);
    draft_heroes(
        &mut draft,
        &[HeroCode::Ali, HeroCode::BruceLee, HeroCode::Ciri, HeroCode::Geralt],
    );
    draft.select_map(MapCode::Yukon);

    assert_eq!(schema, DraftMode::Duel.schema());
    assert!(DraftSequencer::new(&schema).needs_choice());
}

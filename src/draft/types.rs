//! Core domain types for hero drafting.

use crate::catalog::{HeroCode, MapCode};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// One of the two drafting sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Team {
    /// Team A (drafts first in the built-in modes).
    A,
    /// Team B.
    B,
}

impl Team {
    /// Returns the opposing team.
    pub fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Starting position on the battlefield, `1` or `2`.
///
/// The team that takes position `1` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StartPosition {
    /// Position 1 (moves first).
    First,
    /// Position 2.
    Second,
}

impl StartPosition {
    /// Returns the printed number of this position.
    pub fn number(self) -> u8 {
        match self {
            StartPosition::First => 1,
            StartPosition::Second => 2,
        }
    }

    /// Creates a position from its printed number.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(StartPosition::First),
            2 => Some(StartPosition::Second),
            _ => None,
        }
    }
}

impl From<StartPosition> for u8 {
    fn from(position: StartPosition) -> Self {
        position.number()
    }
}

impl TryFrom<u8> for StartPosition {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| format!("invalid start position: {}", number))
    }
}

impl std::fmt::Display for StartPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which of the two deferred kinds a `Choice` step resolves to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    /// The choosing team picks the map.
    Map,
    /// The choosing team picks the starting position.
    Position,
}

impl ChoiceKind {
    /// Returns the kind handed to the paired `Final` step.
    pub fn other(self) -> Self {
        match self {
            ChoiceKind::Map => ChoiceKind::Position,
            ChoiceKind::Position => ChoiceKind::Map,
        }
    }
}

/// Discriminant of a [`Step`], without its value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Pick a hero for the team.
    Pick,
    /// Ban a hero for both teams.
    Ban,
    /// Choose the map.
    Map,
    /// Choose the starting position.
    Position,
    /// Decide whether to choose the map or the position.
    Choice,
    /// Whichever of map/position the `Choice` step left over.
    Final,
}

impl From<ChoiceKind> for StepKind {
    fn from(kind: ChoiceKind) -> Self {
        match kind {
            ChoiceKind::Map => StepKind::Map,
            ChoiceKind::Position => StepKind::Position,
        }
    }
}

/// One unit of a draft.
///
/// The value slot of each variant is `None` until the sequencer writes it.
/// `Choice` and `Final` carry no value: they are replaced by `Map` and
/// `Position` steps when the choice resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Step {
    /// A hero pick.
    Pick {
        /// Picking team.
        team: Team,
        /// Picked hero.
        hero: Option<HeroCode>,
    },
    /// A hero ban.
    Ban {
        /// Banning team.
        team: Team,
        /// Banned hero.
        hero: Option<HeroCode>,
    },
    /// A map choice.
    Map {
        /// Choosing team.
        team: Team,
        /// Chosen map.
        map: Option<MapCode>,
    },
    /// A starting-position choice.
    Position {
        /// Choosing team.
        team: Team,
        /// Chosen position.
        position: Option<StartPosition>,
    },
    /// Deferred map-or-position decision.
    Choice {
        /// Deciding team.
        team: Team,
    },
    /// Placeholder for the kind the `Choice` leaves over.
    Final {
        /// Team that performs the leftover step.
        team: Team,
    },
}

impl Step {
    /// Creates an empty step of the given kind.
    pub fn empty(kind: StepKind, team: Team) -> Self {
        match kind {
            StepKind::Pick => Step::Pick { team, hero: None },
            StepKind::Ban => Step::Ban { team, hero: None },
            StepKind::Map => Step::Map { team, map: None },
            StepKind::Position => Step::Position {
                team,
                position: None,
            },
            StepKind::Choice => Step::Choice { team },
            StepKind::Final => Step::Final { team },
        }
    }

    /// Returns the kind of this step.
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Pick { .. } => StepKind::Pick,
            Step::Ban { .. } => StepKind::Ban,
            Step::Map { .. } => StepKind::Map,
            Step::Position { .. } => StepKind::Position,
            Step::Choice { .. } => StepKind::Choice,
            Step::Final { .. } => StepKind::Final,
        }
    }

    /// Returns the team this step belongs to.
    pub fn team(&self) -> Team {
        match self {
            Step::Pick { team, .. }
            | Step::Ban { team, .. }
            | Step::Map { team, .. }
            | Step::Position { team, .. }
            | Step::Choice { team }
            | Step::Final { team } => *team,
        }
    }

    /// Returns true if the step's value has been written.
    ///
    /// `Choice` and `Final` never hold a value.
    pub fn is_filled(&self) -> bool {
        match self {
            Step::Pick { hero, .. } | Step::Ban { hero, .. } => hero.is_some(),
            Step::Map { map, .. } => map.is_some(),
            Step::Position { position, .. } => position.is_some(),
            Step::Choice { .. } | Step::Final { .. } => false,
        }
    }

    /// Returns the hero of a pick or ban step.
    pub fn hero(&self) -> Option<HeroCode> {
        match self {
            Step::Pick { hero, .. } | Step::Ban { hero, .. } => *hero,
            _ => None,
        }
    }

    /// Returns true for pick and ban steps.
    pub fn takes_hero(&self) -> bool {
        matches!(self, Step::Pick { .. } | Step::Ban { .. })
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind(), self.team())?;
        match self {
            Step::Pick { hero: Some(hero), .. } | Step::Ban { hero: Some(hero), .. } => {
                write!(f, ": {}", hero.name())
            }
            Step::Map { map: Some(map), .. } => write!(f, ": {}", map.name()),
            Step::Position {
                position: Some(position),
                ..
            } => write!(f, ": {}", position),
            _ => Ok(()),
        }
    }
}

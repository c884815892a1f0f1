//! The match parameters derived from a completed draft.

use super::types::{StartPosition, Step, Team};
use crate::catalog::{HeroCode, MapCode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rosters, map and first mover of a completed draft.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    /// Team A's picks in draft order.
    team_a: Vec<HeroCode>,
    /// Team B's picks in draft order.
    team_b: Vec<HeroCode>,
    /// The chosen map, if the draft had a map step.
    map: Option<MapCode>,
    /// The team that takes the first turn.
    first_team: Option<Team>,
}

impl DraftResult {
    /// Derives the result from fully drafted steps.
    ///
    /// Rosters come from `Pick` steps in order. The first mover is the
    /// team holding the position step when it chose position 1; otherwise
    /// the team holding the map step.
    #[instrument(skip(steps), fields(len = steps.len()))]
    pub fn from_steps(steps: &[Step]) -> Self {
        let roster = |side: Team| -> Vec<HeroCode> {
            steps
                .iter()
                .filter_map(|step| match step {
                    Step::Pick {
                        team,
                        hero: Some(hero),
                    } if *team == side => Some(*hero),
                    _ => None,
                })
                .collect()
        };

        let map_step = steps.iter().find_map(|step| match step {
            Step::Map { team, map } => Some((*team, *map)),
            _ => None,
        });
        let position_step = steps.iter().find_map(|step| match step {
            Step::Position { team, position } => Some((*team, *position)),
            _ => None,
        });

        let first_team = match position_step {
            Some((team, Some(StartPosition::First))) => Some(team),
            _ => map_step.map(|(team, _)| team),
        };

        let result = Self {
            team_a: roster(Team::A),
            team_b: roster(Team::B),
            map: map_step.and_then(|(_, map)| map),
            first_team,
        };
        debug!(?result, "Draft result derived");
        result
    }

    /// Returns the roster of one team.
    pub fn roster(&self, team: Team) -> &[HeroCode] {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}

//! Query-string hand-off of a finished draft to the match screen.

use crate::catalog::{HeroCode, MapCode};
use crate::draft::{DraftResult, Team};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Match parameters as carried in the match screen's query string.
///
/// Encoded as `teamA=<codes>&teamB=<codes>&map=<code>&first=<A|B>`, with
/// comma-joined hero codes. A missing map or first team encodes as an
/// empty value.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchLink {
    /// Team A's heroes.
    team_a: Vec<HeroCode>,
    /// Team B's heroes.
    team_b: Vec<HeroCode>,
    /// The map.
    map: Option<MapCode>,
    /// The team that moves first.
    first: Option<Team>,
}

impl MatchLink {
    /// Renders the query string (without a leading `?`).
    #[instrument(skip(self))]
    pub fn query(&self) -> String {
        let heroes = |team: &[HeroCode]| {
            team.iter()
                .map(|hero| hero.code())
                .collect::<Vec<_>>()
                .join(",")
        };

        format!(
            "teamA={}&teamB={}&map={}&first={}",
            heroes(&self.team_a),
            heroes(&self.team_b),
            self.map.map(MapCode::code).unwrap_or_default(),
            self.first.map(|team| team.to_string()).unwrap_or_default(),
        )
    }

    /// Reads match parameters from a query string.
    ///
    /// Unknown parameters and unknown codes are ignored.
    #[instrument]
    pub fn from_query(query: &str) -> Self {
        let mut link = Self {
            team_a: Vec::new(),
            team_b: Vec::new(),
            map: None,
            first: None,
        };

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let heroes = || {
                value
                    .split(',')
                    .filter_map(|code| code.parse().ok())
                    .collect::<Vec<HeroCode>>()
            };

            match key {
                "teamA" => link.team_a = heroes(),
                "teamB" => link.team_b = heroes(),
                "map" => link.map = value.parse().ok(),
                "first" => link.first = value.parse().ok(),
                _ => debug!(key, "Ignoring unknown match parameter"),
            }
        }

        link
    }
}

impl From<&DraftResult> for MatchLink {
    fn from(result: &DraftResult) -> Self {
        Self {
            team_a: result.team_a().clone(),
            team_b: result.team_b().clone(),
            map: *result.map(),
            first: *result.first_team(),
        }
    }
}

impl std::fmt::Display for MatchLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/match?{}", self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_format() {
        let link = MatchLink::from_query("teamA=ALICE,SINBAD&teamB=MEDUSA&map=VENICE&first=B");
        assert_eq!(link.team_a(), &vec![HeroCode::Alice, HeroCode::Sinbad]);
        assert_eq!(link.map(), &Some(MapCode::Venice));
        assert_eq!(link.first(), &Some(Team::B));
        assert_eq!(
            link.to_string(),
            "/match?teamA=ALICE,SINBAD&teamB=MEDUSA&map=VENICE&first=B"
        );
    }

    #[test]
    fn test_missing_values_encode_empty() {
        let link = MatchLink::from_query("?teamA=ALICE&bogus=1");
        assert_eq!(link.query(), "teamA=ALICE&teamB=&map=&first=");
    }
}

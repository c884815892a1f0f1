//! Pool resolution: which heroes and maps the enabled sets provide.

use crate::catalog::{HeroCode, MapCode, SetCode, SetContent};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Membership test over set codes.
pub trait SetMembership {
    /// Returns true if `set` contributes to the pool.
    fn is_active(&self, set: SetCode) -> bool;
}

impl<F> SetMembership for F
where
    F: Fn(SetCode) -> bool,
{
    fn is_active(&self, set: SetCode) -> bool {
        self(set)
    }
}

/// Heroes and maps available for a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPool {
    /// Available heroes, without duplicates.
    pub heroes: Vec<HeroCode>,
    /// Available maps, without duplicates.
    pub maps: Vec<MapCode>,
}

impl DraftPool {
    /// Parses comma-separated hero and map code lists.
    ///
    /// Empty entries and unknown codes are dropped; duplicates are kept once.
    #[instrument]
    pub fn from_lists(heroes: &str, maps: &str) -> Self {
        Self {
            heroes: parse_codes(heroes),
            maps: parse_codes(maps),
        }
    }

    /// Encodes the pool as comma-separated hero and map code lists.
    pub fn to_lists(&self) -> (String, String) {
        (join_codes(&self.heroes), join_codes(&self.maps))
    }

    /// Returns true if `hero` is in the pool.
    pub fn contains_hero(&self, hero: HeroCode) -> bool {
        self.heroes.contains(&hero)
    }

    /// Returns true if `map` is in the pool.
    pub fn contains_map(&self, map: MapCode) -> bool {
        self.maps.contains(&map)
    }
}

fn parse_codes<T>(list: &str) -> Vec<T>
where
    T: std::str::FromStr + Copy + Eq + Hash,
{
    let parsed = list
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .filter_map(|code| match code.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(code, "Dropping unknown code");
                None
            }
        });
    dedup(parsed)
}

fn join_codes<T: std::fmt::Display>(codes: &[T]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Keeps the first occurrence of every item, in order.
fn dedup<T: Copy + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

/// Derives the draft pool from set contents and a membership test.
///
/// Holds no state beyond the catalog it was built from.
#[derive(Debug, Clone)]
pub struct PoolResolver {
    catalog: BTreeMap<SetCode, SetContent>,
}

impl PoolResolver {
    /// Creates a resolver over an explicit set → contents mapping.
    #[instrument(skip(catalog), fields(sets = catalog.len()))]
    pub fn new(catalog: BTreeMap<SetCode, SetContent>) -> Self {
        Self { catalog }
    }

    /// Creates a resolver over the built-in catalog.
    #[instrument]
    pub fn builtin() -> Self {
        Self::new(SetCode::iter().map(|set| (set, set.contents())).collect())
    }

    /// Returns the union of heroes and maps of every enabled set.
    ///
    /// Sets are visited in catalog order and contents in box order; the
    /// first occurrence of a shared hero or map wins.
    #[instrument(skip(self, membership))]
    pub fn resolve(&self, membership: &impl SetMembership) -> DraftPool {
        let enabled: Vec<&SetContent> = self
            .catalog
            .iter()
            .filter(|(set, _)| membership.is_active(**set))
            .map(|(_, content)| content)
            .collect();

        let pool = DraftPool {
            heroes: dedup(enabled.iter().flat_map(|c| c.heroes.iter().copied())),
            maps: dedup(enabled.iter().flat_map(|c| c.maps.iter().copied())),
        };
        debug!(
            sets = enabled.len(),
            heroes = pool.heroes.len(),
            maps = pool.maps.len(),
            "Pool resolved"
        );
        pool
    }
}

impl Default for PoolResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_set() {
        let pool = PoolResolver::builtin().resolve(&|set: SetCode| set == SetCode::VolumeOne);
        assert_eq!(
            pool.heroes,
            vec![HeroCode::Alice, HeroCode::Medusa, HeroCode::Sinbad, HeroCode::KingArthur]
        );
        assert_eq!(pool.maps, vec![MapCode::Sarpedon, MapCode::Marmoreal]);
    }

    #[test]
    fn test_shared_content_is_deduplicated() {
        let pool = PoolResolver::builtin().resolve(&|set: SetCode| {
            matches!(
                set,
                SetCode::MarvelRedemptionRow | SetCode::MarvelHellKitchen
            )
        });
        assert_eq!(pool.heroes.iter().filter(|h| **h == HeroCode::Elektra).count(), 1);
        assert_eq!(pool.heroes.len(), 6);
    }

    #[test]
    fn test_no_sets_gives_empty_pool() {
        let pool = PoolResolver::builtin().resolve(&|_: SetCode| false);
        assert_eq!(pool, DraftPool::default());
    }

    #[test]
    fn test_from_lists_drops_unknown_codes() {
        let pool = DraftPool::from_lists("ALICE,, nobody ,medusa,ALICE", "VENICE,ATLANTIS");
        assert_eq!(pool.heroes, vec![HeroCode::Alice, HeroCode::Medusa]);
        assert_eq!(pool.maps, vec![MapCode::Venice]);
        assert_eq!(
            pool.to_lists(),
            ("ALICE,MEDUSA".to_string(), "VENICE".to_string())
        );
    }

    #[test]
    fn test_from_empty_lists() {
        assert_eq!(DraftPool::from_lists("", ""), DraftPool::default());
    }
}

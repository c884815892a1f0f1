//! Battlefield map codes.

use strum::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};
use tracing::instrument;

/// A battlefield map that can be drafted.
///
/// The string form (`SARPEDON`) is the stable code; [`MapCode::name`]
/// gives the printed name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumIter, EnumMessage, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum MapCode {
    #[strum(to_string = "SARPEDON", message = "Sarpedon")]
    Sarpedon,
    #[strum(to_string = "MARMOREAL", message = "Marmoreal")]
    Marmoreal,
    #[strum(to_string = "HANGING_GARDENS", message = "Hanging Gardens")]
    HangingGardens,
    #[strum(to_string = "VENICE", message = "Venice")]
    Venice,
    #[strum(to_string = "SANTAS_WORKSHOP", message = "Santa's Workshop")]
    SantasWorkshop,
    #[strum(to_string = "SHERWOOD", message = "Sherwood Forest")]
    Sherwood,
    #[strum(to_string = "YUKON", message = "Yukon")]
    Yukon,
    #[strum(to_string = "RAPTOR_PADDOCK", message = "Raptor Paddock")]
    RaptorPaddock,
    #[strum(to_string = "TREX_PADDOCK", message = "T. Rex Paddock")]
    TrexPaddock,
    #[strum(to_string = "SUNNYDALE", message = "Sunnydale High")]
    Sunnydale,
    #[strum(to_string = "THE_BRONZE", message = "The Bronze")]
    TheBronze,
    #[strum(to_string = "SOHO", message = "Soho")]
    Soho,
    #[strum(to_string = "BASKERVILLE", message = "Baskerville Manor")]
    Baskerville,
    #[strum(to_string = "HEOROT", message = "Heorot")]
    Heorot,
    #[strum(to_string = "KING_SOLOMONS_MINE", message = "King Solomon's Mine")]
    KingSolomonsMine,
    #[strum(to_string = "THE_RAFT", message = "The Raft")]
    TheRaft,
    #[strum(to_string = "HELLS_KITCHEN", message = "Hell's Kitchen")]
    HellKitchen,
    #[strum(to_string = "NAVY_PIER", message = "Navy Pier")]
    NavyPier,
    #[strum(to_string = "HELICARRIER", message = "Helicarrier")]
    Helicarrier,
    #[strum(to_string = "SANCTUM_SANCTORUM", message = "Sanctum Sanctorum")]
    SanctumSanctorum,
    #[strum(to_string = "MCMINNVILLE", message = "McMinnville")]
    McMinnville,
    #[strum(to_string = "POINT_PLEASANT", message = "Point Pleasant")]
    PointPleasant,
    #[strum(to_string = "AZUCHI_CASTLE", message = "Azuchi Castle")]
    AzuchiCastle,
    #[strum(to_string = "GLOBE_THEATRE", message = "Globe Theatre")]
    GlobeTheatre,
    #[strum(to_string = "KAER_MORHEN", message = "Kaer Morhen")]
    KaerMorhen,
}

impl MapCode {
    /// Returns the stable code.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Returns the display name.
    #[instrument]
    pub fn name(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_name() {
        assert_eq!(MapCode::HellKitchen.code(), "HELLS_KITCHEN");
        assert_eq!(MapCode::HellKitchen.name(), "Hell's Kitchen");
        assert_eq!("kaer_morhen".parse::<MapCode>(), Ok(MapCode::KaerMorhen));
    }
}

//! Hero codes.

use strum::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};
use tracing::instrument;

/// A hero that can be drafted.
///
/// The string form (`ALICE`) is the stable code; [`HeroCode::name`]
/// gives the printed name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumIter, EnumMessage, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum HeroCode {
    #[strum(to_string = "ALICE", message = "Alice")]
    Alice,
    #[strum(to_string = "MEDUSA", message = "Medusa")]
    Medusa,
    #[strum(to_string = "SINBAD", message = "Sinbad")]
    Sinbad,
    #[strum(to_string = "ARTHUR", message = "King Arthur")]
    KingArthur,
    #[strum(to_string = "ACHILLES", message = "Achilles")]
    Achilles,
    #[strum(to_string = "YENNENGA", message = "Yennenga")]
    Yennenga,
    #[strum(to_string = "BLOODY_MARY", message = "Bloody Mary")]
    BloodyMary,
    #[strum(to_string = "SUN_WUKONG", message = "Sun Wukong")]
    SunWukong,
    #[strum(to_string = "LOKI", message = "Loki")]
    Loki,
    #[strum(to_string = "PANDORA", message = "Pandora")]
    Pandora,
    #[strum(to_string = "CHUPACABRA", message = "Chupacabra")]
    Chupacabra,
    #[strum(to_string = "BLACKBEARD", message = "Blackbeard")]
    Blackbeard,
    #[strum(to_string = "ROBIN_HOOD", message = "Robin Hood")]
    RobinHood,
    #[strum(to_string = "BIGFOOT", message = "Bigfoot")]
    Bigfoot,
    #[strum(to_string = "BRUCE_LEE", message = "Bruce Lee")]
    BruceLee,
    #[strum(to_string = "DEADPOOL", message = "Deadpool")]
    Deadpool,
    #[strum(to_string = "MULDOON", message = "Robert Muldoon")]
    Muldoon,
    #[strum(to_string = "RAPTORS", message = "Raptors")]
    Raptors,
    #[strum(to_string = "SATTLER", message = "Dr. Ellie Sattler")]
    Sattler,
    #[strum(to_string = "TREX", message = "T. Rex")]
    TRex,
    #[strum(to_string = "BUFFY", message = "Buffy")]
    Buffy,
    #[strum(to_string = "SPIKE", message = "Spike")]
    Spike,
    #[strum(to_string = "WILLOW", message = "Willow")]
    Willow,
    #[strum(to_string = "ANGEL", message = "Angel")]
    Angel,
    #[strum(to_string = "DRACULA", message = "Dracula")]
    Dracula,
    #[strum(to_string = "JEKYLL_HYDE", message = "Dr. Jekyll & Mr. Hyde")]
    JekyllHyde,
    #[strum(to_string = "INVISIBLE_MAN", message = "The Invisible Man")]
    InvisibleMan,
    #[strum(to_string = "SHERLOCK", message = "Sherlock Holmes")]
    Sherlock,
    #[strum(to_string = "LITTLE_RED", message = "Little Red Riding Hood")]
    LittleRed,
    #[strum(to_string = "BEOWULF", message = "Beowulf")]
    Beowulf,
    #[strum(to_string = "HOUDINI", message = "Houdini")]
    Houdini,
    #[strum(to_string = "GENIE", message = "The Genie")]
    Genie,
    #[strum(to_string = "LUKE_CAGE", message = "Luke Cage")]
    LukeCage,
    #[strum(to_string = "ELEKTRA", message = "Elektra")]
    Elektra,
    #[strum(to_string = "GHOST_RIDER", message = "Ghost Rider")]
    GhostRider,
    #[strum(to_string = "MOON_KNIGHT", message = "Moon Knight")]
    MoonKnight,
    #[strum(to_string = "DAREDEVIL", message = "Daredevil")]
    Daredevil,
    #[strum(to_string = "BULLSEYE", message = "Bullseye")]
    Bullseye,
    #[strum(to_string = "MS_MARVEL", message = "Ms. Marvel")]
    MsMarvel,
    #[strum(to_string = "SQUIRREL_GIRL", message = "Squirrel Girl")]
    SquirrelGirl,
    #[strum(to_string = "CLOAK_DAGGER", message = "Cloak & Dagger")]
    CloakDagger,
    #[strum(to_string = "WINTER_SOLDIER", message = "Winter Soldier")]
    WinterSoldier,
    #[strum(to_string = "BLACK_PANTHER", message = "Black Panther")]
    BlackPanther,
    #[strum(to_string = "BLACK_WIDOW", message = "Black Widow")]
    BlackWidow,
    #[strum(to_string = "DOCTOR_STRANGE", message = "Doctor Strange")]
    DoctorStrange,
    #[strum(to_string = "SHE_HULK", message = "She-Hulk")]
    SheHulk,
    #[strum(to_string = "SPIDER_MAN", message = "Spider-Man")]
    SpiderMan,
    #[strum(to_string = "JILL_TRENT", message = "Jill Trent, Science Sleuth")]
    JillTrent,
    #[strum(to_string = "ANNIE_CHRISTMAS", message = "Annie Christmas")]
    AnnieChristmas,
    #[strum(to_string = "GOLDEN_BAT", message = "Golden Bat")]
    GoldenBat,
    #[strum(to_string = "TESLA", message = "Nikola Tesla")]
    Tesla,
    #[strum(to_string = "ODA_NOBUNAGA", message = "Oda Nobunaga")]
    OdaNobunaga,
    #[strum(to_string = "TOMOE_GOZEN", message = "Tomoe Gozen")]
    TomoeGozen,
    #[strum(to_string = "SHAKESPEARE", message = "William Shakespeare")]
    Shakespeare,
    #[strum(to_string = "HAMLET", message = "Hamlet")]
    Hamlet,
    #[strum(to_string = "WAYWARD_SISTERS", message = "The Wayward Sisters")]
    WaywardSisters,
    #[strum(to_string = "EREDIN", message = "Eredin")]
    Eredin,
    #[strum(to_string = "PHILIPPA", message = "Philippa")]
    Philippa,
    #[strum(to_string = "YENNEFER_TRISS", message = "Yennefer & Triss")]
    YenneferTriss,
    #[strum(to_string = "GERALT", message = "Geralt of Rivia")]
    Geralt,
    #[strum(to_string = "CIRI", message = "Ciri")]
    Ciri,
    #[strum(to_string = "LESHEN", message = "Leshen")]
    Leshen,
    #[strum(to_string = "ALI", message = "Muhammad Ali")]
    Ali,
    #[strum(to_string = "SHREDDER", message = "Shredder")]
    Shredder,
    #[strum(to_string = "KRANG", message = "Krang")]
    Krang,
    #[strum(to_string = "LEONARDO", message = "Leonardo")]
    Leonardo,
    #[strum(to_string = "DONATELLO", message = "Donatello")]
    Donatello,
    #[strum(to_string = "MICHELANGELO", message = "Michelangelo")]
    Michelangelo,
    #[strum(to_string = "RAPHAEL", message = "Raphael")]
    Raphael,
}

impl HeroCode {
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
    use strum::IntoEnumIterator;

    #[test]
    fn test_code_and_name() {
        assert_eq!(HeroCode::KingArthur.code(), "ARTHUR");
        assert_eq!(HeroCode::KingArthur.name(), "King Arthur");
        assert_eq!(HeroCode::TRex.to_string(), "TREX");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sun_wukong".parse::<HeroCode>(), Ok(HeroCode::SunWukong));
        assert!("NOBODY".parse::<HeroCode>().is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = HeroCode::iter().map(HeroCode::code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}

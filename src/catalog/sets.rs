//! Sets (boxed products) and what each one contains.

use super::{HeroCode, MapCode};
use derive_new::new;
use strum::{Display, EnumIter, EnumMessage, EnumProperty, EnumString, IntoStaticStr};
use tracing::instrument;

/// Heroes and maps shipped in one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SetContent {
    /// Heroes in box order.
    pub heroes: &'static [HeroCode],
    /// Maps in box order (may be empty).
    pub maps: &'static [MapCode],
}

/// A set that can be toggled on or off for drafting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumIter, EnumMessage, EnumProperty, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum SetCode {
    #[strum(to_string = "VOL1", message = "Battle of Legends, Volume One", props(image = "/sets/volume-one.png"))]
    VolumeOne,
    #[strum(to_string = "VOL2", message = "Battle of Legends, Volume Two", props(image = "/sets/volume-two.png"))]
    VolumeTwo,
    #[strum(to_string = "VOL3", message = "Battle of Legends, Volume Three", props(image = "/sets/volume-three.png"))]
    VolumeThree,
    #[strum(to_string = "RBBF", message = "Robin Hood vs Bigfoot", props(image = "/sets/robin-bigfoot.png"))]
    RobinBigfoot,
    #[strum(to_string = "LEE", message = "Bruce Lee", props(image = "/sets/bruce-lee.png"))]
    BruceLee,
    #[strum(to_string = "JPRPT", message = "Jurassic Park: Ingen vs Raptors", props(image = "/sets/jp-raptors.png"))]
    JurassicParkRaptors,
    #[strum(to_string = "JPREX", message = "Jurassic Park: Sattler vs T-Rex", props(image = "/sets/jp-trex.png"))]
    JurassicParkTRex,
    #[strum(to_string = "BUFFY", message = "Buffy the Vampire Slayer", props(image = "/sets/buffy.png"))]
    Buffy,
    #[strum(to_string = "CBFG", message = "Cobble & Fog", props(image = "/sets/cobble-fog.png"))]
    CobbleAndFog,
    #[strum(to_string = "LRBW", message = "Little Red Riding Hood vs Beowulf", props(image = "/sets/little-red-beowulf.png"))]
    LittleRedBeowulf,
    #[strum(to_string = "HDGN", message = "Houdini vs The Genie", props(image = "/sets/houdini-genie.png"))]
    HoudiniGenie,
    #[strum(to_string = "DPOOL", message = "Deadpool", props(image = "/sets/deadpool.png"))]
    MarvelDeadpool,
    #[strum(to_string = "MVLRR", message = "Redemption Row", props(image = "/sets/redemption-row.png"))]
    MarvelRedemptionRow,
    #[strum(to_string = "MVLHK", message = "Hell Kitchen", props(image = "/sets/hell-kitchen.png"))]
    MarvelHellKitchen,
    #[strum(to_string = "MVLTS", message = "Teen Spirit", props(image = "/sets/teen-spirit.png"))]
    MarvelTeenSpirit,
    #[strum(to_string = "MVLKC", message = "For King and Country", props(image = "/sets/for-king-country.png"))]
    MarvelForKingAndCountry,
    #[strum(to_string = "MVLBB", message = "Brains and Brawn", props(image = "/sets/brains-brawn.png"))]
    MarvelBrainsAndBrawn,
    #[strum(to_string = "TALES", message = "Adventures: Tales to Amaze", props(image = "/sets/tales-to-amaze.png"))]
    TalesToAmaze,
    #[strum(to_string = "SUNS", message = "Sun's Origin", props(image = "/sets/suns-origin.png"))]
    SunsOrigin,
    #[strum(to_string = "SLNG", message = "Slings and Arrows", props(image = "/sets/slings-arrows.png"))]
    SlingsAndArrows,
    #[strum(to_string = "WTCHRF", message = "The Witcher: Realms Fall", props(image = "/sets/witcher-realms-fall.png"))]
    WitcherRealmsFall,
    #[strum(to_string = "WTCHSS", message = "The Witcher: Steel & Silver", props(image = "/sets/witcher-steel-silver.png"))]
    WitcherSteelSilver,
    #[strum(to_string = "ALILEE", message = "Muhammad Ali vs Bruce Lee", props(image = "/sets/ali_lee.webp"))]
    AliLee,
    #[strum(to_string = "SRDKRNG", message = "TMNT: Shredder vs Krang", props(image = "/sets/shredder_krang.webp"))]
    ShredderKrang,
    #[strum(to_string = "TMNT", message = "Adventures: Teenage Mutant Ninja Turtles", props(image = "/sets/tmnt.webp"))]
    TMNT,
}

impl SetCode {
    /// Returns the stable code.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Returns the display name.
    #[instrument]
    pub fn name(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.code())
    }

    /// Returns the path of the box image.
    #[instrument]
    pub fn image(self) -> &'static str {
        self.get_str("image").unwrap_or_default()
    }

    /// Returns the heroes and maps in this set.
    #[instrument]
    pub fn contents(self) -> SetContent {
        use HeroCode as H;
        use MapCode as M;

        match self {
            SetCode::VolumeOne => SetContent::new(&[H::Alice, H::Medusa, H::Sinbad, H::KingArthur], &[M::Sarpedon, M::Marmoreal]),
            SetCode::VolumeTwo => SetContent::new(&[H::Achilles, H::Yennenga, H::BloodyMary, H::SunWukong], &[M::HangingGardens]),
            SetCode::VolumeThree => SetContent::new(&[H::Loki, H::Pandora, H::Chupacabra, H::Blackbeard], &[M::Venice, M::SantasWorkshop]),
            SetCode::RobinBigfoot => SetContent::new(&[H::RobinHood, H::Bigfoot], &[M::Sherwood, M::Yukon]),
            SetCode::BruceLee => SetContent::new(&[H::BruceLee], &[]),
            SetCode::JurassicParkRaptors => SetContent::new(&[H::Muldoon, H::Raptors], &[M::RaptorPaddock]),
            SetCode::JurassicParkTRex => SetContent::new(&[H::Sattler, H::TRex], &[M::TrexPaddock]),
            SetCode::Buffy => SetContent::new(&[H::Buffy, H::Spike, H::Willow, H::Angel], &[M::Sunnydale, M::TheBronze]),
            SetCode::CobbleAndFog => SetContent::new(&[H::Dracula, H::JekyllHyde, H::InvisibleMan, H::Sherlock], &[M::Soho, M::Baskerville]),
            SetCode::LittleRedBeowulf => SetContent::new(&[H::LittleRed, H::Beowulf], &[M::Heorot]),
            SetCode::HoudiniGenie => SetContent::new(&[H::Houdini, H::Genie], &[M::KingSolomonsMine]),
            SetCode::MarvelDeadpool => SetContent::new(&[H::Deadpool], &[]),
            SetCode::MarvelRedemptionRow => SetContent::new(&[H::LukeCage, H::Elektra, H::GhostRider, H::MoonKnight], &[M::TheRaft]),
            SetCode::MarvelHellKitchen => SetContent::new(&[H::Daredevil, H::Elektra, H::Bullseye], &[M::HellKitchen]),
            SetCode::MarvelTeenSpirit => SetContent::new(&[H::MsMarvel, H::SquirrelGirl, H::CloakDagger], &[M::NavyPier]),
            SetCode::MarvelForKingAndCountry => SetContent::new(&[H::WinterSoldier, H::BlackPanther, H::BlackWidow], &[M::Helicarrier]),
            SetCode::MarvelBrainsAndBrawn => SetContent::new(&[H::DoctorStrange, H::SheHulk, H::SpiderMan], &[M::SanctumSanctorum]),
            SetCode::TalesToAmaze => SetContent::new(&[H::JillTrent, H::AnnieChristmas, H::GoldenBat, H::Tesla], &[M::McMinnville, M::PointPleasant]),
            SetCode::SunsOrigin => SetContent::new(&[H::OdaNobunaga, H::TomoeGozen], &[M::AzuchiCastle]),
            SetCode::SlingsAndArrows => SetContent::new(&[H::Shakespeare, H::Hamlet, H::WaywardSisters], &[M::GlobeTheatre]),
            SetCode::WitcherRealmsFall => SetContent::new(&[H::Eredin, H::Philippa, H::YenneferTriss], &[M::KaerMorhen]),
            SetCode::WitcherSteelSilver => SetContent::new(&[H::Geralt, H::Ciri, H::Leshen], &[M::KaerMorhen]),
            SetCode::AliLee => SetContent::new(&[H::BruceLee, H::Ali], &[]),
            SetCode::ShredderKrang => SetContent::new(&[H::Shredder, H::Krang], &[]),
            SetCode::TMNT => SetContent::new(&[H::Leonardo, H::Donatello, H::Michelangelo, H::Raphael], &[]),
        }
    }
}

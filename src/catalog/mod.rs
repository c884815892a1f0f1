//! Static content catalog: sets, heroes and maps.
//!
//! Every code is a closed enum with a stable string form (`VOL1`, `ALICE`,
//! `SARPEDON`). The string form is what gets parsed from user input,
//! persisted, and written into match links.

mod heroes;
mod maps;
mod sets;

pub use heroes::HeroCode;
pub use maps::MapCode;
pub use sets::{SetCode, SetContent};

/// Implements serde for a catalog code enum through its string code.
macro_rules! code_serde {
    ($($ty:ident),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                code.parse().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "unknown {} code: {}",
                        stringify!($ty),
                        code
                    ))
                })
            }
        }
    )*};
}

code_serde!(HeroCode, MapCode, SetCode);

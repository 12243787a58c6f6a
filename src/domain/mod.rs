// ============================================================================
// Domain Models Module
// The three sezimal value types and their configuration
// ============================================================================

/// Serializes a value type as its canonical numeral text and parses it back.
macro_rules! text_serde {
    ($ty:ty) => {
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use text_serde;

pub mod config;
pub mod constants;
pub mod fraction;
pub mod integer;
mod ops;
pub mod sezimal;
mod transcendental;
pub mod value;

#[cfg(test)]
mod proptests;

pub use config::PrecisionContext;
pub use fraction::SezimalFraction;
pub use integer::SezimalInteger;
pub use sezimal::Sezimal;
pub use value::{SezimalInput, SezimalValue};

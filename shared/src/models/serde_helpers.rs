//! Serde helpers for backend number fields
//!
//! The backend stores prices as floats, so `150` may arrive as `150.0`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Integer that also accepts floats without a fractional part
#[derive(Debug, Clone, Copy)]
struct WholeNumber(i64);

impl<'de> Deserialize<'de> for WholeNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WholeVisitor;

        impl Visitor<'_> for WholeVisitor {
            type Value = WholeNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a float with no fractional part")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(WholeNumber(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(WholeNumber)
                    .map_err(|_| E::custom(format!("number out of range: {value}")))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value <= i64::MAX as f64
                {
                    Ok(WholeNumber(value as i64))
                } else {
                    Err(E::custom(format!("expected a whole number, got {value}")))
                }
            }
        }

        deserializer.deserialize_any(WholeVisitor)
    }
}

/// Deserialize an `i64` from an integer or integral float
pub fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    WholeNumber::deserialize(deserializer).map(|n| n.0)
}

/// Like [`whole_number`], treating null as `None`
pub fn option_whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<WholeNumber>::deserialize(deserializer).map(|opt| opt.map(|n| n.0))
}

//! Serializes a [`Duration`] as its text form.
//!
//! [`Duration`] implements `Serialize` and `Deserialize` directly; the free
//! [`serialize`] and [`deserialize`] functions are also usable with
//! `#[serde(with = "interval_duration::serde")]`.

use std::fmt;

use ::serde::{de, ser, Deserialize, Serialize};

use crate::Duration;

pub fn serialize<S>(dur: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: ser::Serializer,
{
    serializer.serialize_str(&dur.to_string())
}

pub struct DurationVisitor;

impl<'de> de::Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string such as `3y6M4d12h30m5.5s`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Duration::parse(v).map_err(|err| E::custom(format_args!("failed to parse duration: {err}")))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let v = std::str::from_utf8(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Bytes(v), &self))?;
        self.visit_str(v)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: de::Deserializer<'de>,
{
    deserializer.deserialize_str(DurationVisitor)
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserialize(deserializer)
    }
}

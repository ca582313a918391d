//! Creation timestamp of a schedule document.

use std::fmt;

use jiff::{civil, tz::TimeZone, Timestamp};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The `created_at` field of a schedule document.
///
/// Documents written by earlier tooling stamp `created_at` as a civil
/// datetime with no UTC offset. Such values are read as UTC and written
/// back in the same offset-less form, so parsing and re-serializing a
/// stored document leaves the field unchanged either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedAt {
    timestamp: Timestamp,
    offsetless: bool,
}

impl CreatedAt {
    /// The instant the record was created.
    pub fn get(&self) -> Timestamp {
        self.timestamp
    }
}

impl From<Timestamp> for CreatedAt {
    fn from(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            offsetless: false,
        }
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offsetless {
            write!(f, "{}", TimeZone::UTC.to_datetime(self.timestamp))
        } else {
            write!(f, "{}", self.timestamp)
        }
    }
}

impl Serialize for CreatedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CreatedAt {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(timestamp) = raw.parse::<Timestamp>() {
            return Ok(Self {
                timestamp,
                offsetless: false,
            });
        }
        let datetime: civil::DateTime = raw
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid timestamp `created_at`: '{raw}'")))?;
        let timestamp = TimeZone::UTC
            .to_timestamp(datetime)
            .map_err(|e| de::Error::custom(format!("invalid timestamp `created_at`: {e}")))?;
        Ok(Self {
            timestamp,
            offsetless: true,
        })
    }
}

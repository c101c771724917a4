use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fixed-format entity identifier: 12 bytes, rendered as 24 lowercase
/// hexadecimal characters on the wire.
///
/// Every identifier entering the system through the HTTP layer or a catalog
/// file is validated through `FromStr`; once an `EntityId` exists it is known
/// to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId([u8; 12]);

impl EntityId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Returns true if `raw` would parse as an `EntityId`.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == 24 && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl FromStr for EntityId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(raw) {
            return Err(CoreError::InvalidId(raw.to_string()));
        }

        let mut bytes = [0u8; 12];
        for (i, chunk) in raw.as_bytes().chunks_exact(2).enumerate() {
            // chunks are guaranteed hex digits by the check above
            let hi = (chunk[0] as char).to_digit(16).unwrap() as u8;
            let lo = (chunk[1] as char).to_digit(16).unwrap() as u8;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an artist, as assigned by the upstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(u32);

impl ArtistId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ArtistId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_id_roundtrip() {
        let id = ArtistId::new(42);
        assert_eq!(id.as_u32(), 42);
        assert_eq!(ArtistId::from(42), id);
    }

    #[test]
    fn test_artist_id_display() {
        assert_eq!(ArtistId::new(7).to_string(), "7");
    }

    #[test]
    fn test_artist_id_is_transparent_in_json() {
        let json = serde_json::to_string(&ArtistId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}

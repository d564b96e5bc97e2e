use serde::{Deserialize, Serialize};

use crate::options::SearchField;

/// One scored hit, tagged by the field it came from.
///
/// Serializes as an object with a `type` key (`artist`, `member`,
/// `creation_date`, `first_album`) alongside the variant's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Match {
    /// The query occurs in the artist's name.
    Artist { artist: String, score: u32 },

    /// The query occurs in one member's name.
    Member {
        artist: String,
        member: String,
        score: u32,
    },

    /// The query occurs in the creation year's digits.
    CreationDate { artist: String, year: i32, score: u32 },

    /// The query occurs in the first album text.
    FirstAlbum {
        artist: String,
        first_album: String,
        score: u32,
    },
}

impl Match {
    /// Name of the artist that owns the matched field.
    #[must_use]
    pub fn artist(&self) -> &str {
        match self {
            Self::Artist { artist, .. }
            | Self::Member { artist, .. }
            | Self::CreationDate { artist, .. }
            | Self::FirstAlbum { artist, .. } => artist,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        match self {
            Self::Artist { score, .. }
            | Self::Member { score, .. }
            | Self::CreationDate { score, .. }
            | Self::FirstAlbum { score, .. } => *score,
        }
    }

    /// Field the match was produced from.
    #[must_use]
    pub const fn field(&self) -> SearchField {
        match self {
            Self::Artist { .. } => SearchField::Name,
            Self::Member { .. } => SearchField::Members,
            Self::CreationDate { .. } => SearchField::CreationDate,
            Self::FirstAlbum { .. } => SearchField::FirstAlbum,
        }
    }

    /// The `type` tag used in serialized output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Artist { .. } => "artist",
            Self::Member { .. } => "member",
            Self::CreationDate { .. } => "creation_date",
            Self::FirstAlbum { .. } => "first_album",
        }
    }
}

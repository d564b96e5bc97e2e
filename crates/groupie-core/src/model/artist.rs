use serde::{Deserialize, Serialize};

use crate::model::ids::ArtistId;

/// A band or musician, as published by the Groupie Tracker catalog.
///
/// Field names follow the catalog's camelCase JSON keys. The `locations`,
/// `concert_dates` and `relations` fields are opaque references to richer
/// records held elsewhere; nothing in this workspace parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,

    #[serde(default)]
    pub image: String,

    /// Member names in declared order. Missing in the source document
    /// means no members.
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the band was formed.
    pub creation_date: i32,

    /// Free text, usually a `dd-mm-yyyy` date.
    #[serde(default)]
    pub first_album: String,

    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

impl Artist {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
            image: String::new(),
            members: Vec::new(),
            creation_date: 0,
            first_album: String::new(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_creation_date(mut self, year: i32) -> Self {
        self.creation_date = year;
        self
    }

    #[must_use]
    pub fn with_first_album(mut self, first_album: impl Into<String>) -> Self {
        self.first_album = first_album.into();
        self
    }
}

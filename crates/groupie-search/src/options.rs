use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::score;

/// An artist field the engine can scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Members,
    CreationDate,
    FirstAlbum,
}

impl SearchField {
    /// Every field, in the order they are checked for each artist.
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::Members,
        Self::CreationDate,
        Self::FirstAlbum,
    ];

    /// Fields searched when the caller does not choose.
    pub const DEFAULT: [Self; 3] = [Self::Name, Self::Members, Self::CreationDate];

    /// Relevance weight of a hit on this field.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Name => score::NAME,
            Self::Members => score::MEMBER,
            Self::CreationDate => score::CREATION_DATE,
            Self::FirstAlbum => score::FIRST_ALBUM,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Members => "members",
            Self::CreationDate => "creation_date",
            Self::FirstAlbum => "first_album",
        }
    }

    /// Comma-separated names of every field, for messages.
    #[must_use]
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" | "artist" => Ok(Self::Name),
            "members" | "member" => Ok(Self::Members),
            "creation_date" | "year" => Ok(Self::CreationDate),
            "first_album" => Ok(Self::FirstAlbum),
            _ => Err(SearchError::UnknownField(s.to_string())),
        }
    }
}

/// Which fields to scan and how many matches to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    fields: Vec<SearchField>,
    limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fields: SearchField::DEFAULT.to_vec(),
            limit: None,
        }
    }
}

impl SearchOptions {
    /// Options with no fields enabled. Add some with [`Self::with_field`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: SearchField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    /// Replace the enabled fields.
    #[must_use]
    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = SearchField>,
    {
        self.fields.clear();
        for field in fields {
            self = self.with_field(field);
        }
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Maximum number of matches returned, applied after ranking.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub fn includes(&self, field: SearchField) -> bool {
        self.fields.contains(&field)
    }

    /// Enabled fields in check order, regardless of the order they were added.
    pub fn fields(&self) -> impl Iterator<Item = SearchField> + '_ {
        SearchField::ALL
            .into_iter()
            .filter(move |field| self.includes(*field))
    }
}

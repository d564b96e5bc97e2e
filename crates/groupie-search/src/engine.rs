//! The search engine.
//!
//! Matching is plain substring containment. Text fields are compared
//! after Unicode lowercasing; the creation year is compared on its
//! decimal digits against the raw query.

use groupie_core::Artist;

use crate::matches::Match;
use crate::options::{SearchField, SearchOptions};

/// Search `artists` for `query` on name, members and creation date.
///
/// An empty query matches nothing. Results are sorted by descending score;
/// equal scores keep the order they were produced in.
#[must_use]
pub fn search(artists: &[Artist], query: &str) -> Vec<Match> {
    SearchEngine::default().search(artists, query)
}

/// A reusable search configuration.
///
/// The engine holds no state between calls, so one instance can serve any
/// number of concurrent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    #[must_use]
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run a search over `artists`.
    ///
    /// Every enabled field of every artist is checked, so one artist can
    /// contribute several matches. The limit, if any, applies after sorting.
    #[must_use]
    pub fn search(&self, artists: &[Artist], query: &str) -> Vec<Match> {
        // Every string contains "", so an empty query would match everything.
        if query.is_empty() {
            return Vec::new();
        }

        let needle = Needle::new(query);
        let mut matches = Vec::new();
        for artist in artists {
            for field in self.options.fields() {
                collect(artist, field, &needle, &mut matches);
            }
        }

        // `sort_by` is stable: ties keep production order.
        matches.sort_by(|a, b| b.score().cmp(&a.score()));

        if let Some(limit) = self.options.limit() {
            matches.truncate(limit);
        }
        matches
    }
}

struct Needle<'q> {
    raw: &'q str,
    folded: String,
}

impl<'q> Needle<'q> {
    fn new(raw: &'q str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    fn in_text(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    fn in_raw(&self, haystack: &str) -> bool {
        haystack.contains(self.raw)
    }
}

fn collect(artist: &Artist, field: SearchField, needle: &Needle<'_>, out: &mut Vec<Match>) {
    let score = field.score();
    match field {
        SearchField::Name => {
            if needle.in_text(&artist.name) {
                out.push(Match::Artist {
                    artist: artist.name.clone(),
                    score,
                });
            }
        }
        SearchField::Members => {
            out.extend(
                artist
                    .members
                    .iter()
                    .filter(|member| needle.in_text(member))
                    .map(|member| Match::Member {
                        artist: artist.name.clone(),
                        member: member.clone(),
                        score,
                    }),
            );
        }
        SearchField::CreationDate => {
            if needle.in_raw(&artist.creation_date.to_string()) {
                out.push(Match::CreationDate {
                    artist: artist.name.clone(),
                    year: artist.creation_date,
                    score,
                });
            }
        }
        SearchField::FirstAlbum => {
            if needle.in_raw(&artist.first_album) {
                out.push(Match::FirstAlbum {
                    artist: artist.name.clone(),
                    first_album: artist.first_album.clone(),
                    score,
                });
            }
        }
    }
}

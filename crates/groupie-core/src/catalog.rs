//! Loading an artist collection from a catalog document.
//!
//! A catalog is the JSON array served by the Groupie Tracker `/artists`
//! endpoint, saved to disk. Fetching it is left to the caller.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Artist;

/// Parse a catalog from a JSON string and validate every record.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the document is not a JSON array of
/// artists, or [`Error::InvalidData`] if a record fails validation.
pub fn from_json(json: &str) -> Result<Vec<Artist>> {
    let artists: Vec<Artist> = serde_json::from_str(json)?;
    validate(&artists)?;
    Ok(artists)
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the same
/// errors as [`from_json`].
pub fn load(path: &Path) -> Result<Vec<Artist>> {
    log::debug!("Reading catalog from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let artists = from_json(&contents)?;

    log::info!(
        "Loaded {} artists from {}",
        artists.len(),
        path.display()
    );
    Ok(artists)
}

/// Check the shape guarantees the search engine relies on.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for the first artist with a blank name
/// or an id already used by an earlier artist.
pub fn validate(artists: &[Artist]) -> Result<()> {
    let mut seen = HashSet::with_capacity(artists.len());
    for artist in artists {
        if artist.name.trim().is_empty() {
            return Err(Error::InvalidData(format!(
                "artist {} has an empty name",
                artist.id
            )));
        }
        if !seen.insert(artist.id) {
            return Err(Error::InvalidData(format!(
                "artist id {} appears more than once",
                artist.id
            )));
        }
    }
    Ok(())
}

//! Scored search for groupie.
//!
//! Scans the name, members and creation year of every artist in a
//! collection for a case-insensitive substring, and returns typed
//! [`Match`]es ordered by descending score. Ties keep the order in which
//! matches were produced: collection order first, then name, members (in
//! declared order), creation date and first album within one artist.
//!
//! ```
//! use groupie_core::Artist;
//! use groupie_search::{search, Match};
//!
//! let artists = vec![Artist::new(1, "Queen").with_creation_date(1970)];
//! let matches = search(&artists, "que");
//! assert_eq!(matches[0].score(), 1000);
//! assert!(matches!(matches[0], Match::Artist { .. }));
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod matches;
pub mod options;
pub mod score;

pub use engine::{search, SearchEngine};
pub use error::SearchError;
pub use matches::Match;
pub use options::{SearchField, SearchOptions};

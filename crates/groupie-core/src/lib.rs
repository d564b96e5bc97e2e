//! Core domain model for groupie.
//!
//! This crate defines the `Artist` record shared by every other crate,
//! the crate error type, and the catalog loader that materializes an
//! artist collection from a JSON document.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Artist, ArtistId};

//! Relevance weights, one per searchable field.
//!
//! A hit on the artist's own name always outranks a hit on a member, which
//! outranks a hit on the creation year. Fields added later sit below all
//! of these.

pub const NAME: u32 = 1000;
pub const MEMBER: u32 = 900;
pub const CREATION_DATE: u32 = 700;
pub const FIRST_ALBUM: u32 = 600;

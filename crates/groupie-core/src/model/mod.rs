pub mod artist;
pub mod ids;

pub use artist::Artist;
pub use ids::ArtistId;

/// Data entities for tracks, lyrics and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Last.fm API client
pub mod lastfm;
/// Musixmatch API client
pub mod musixmatch;

pub use lastfm::LastFmClient;
pub use musixmatch::MusixmatchClient;

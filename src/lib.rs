//! Toptrack - Compose a region's top track with its lyrics and artist image
//!
//! This library queries Last.fm for the top track of a region, looks up its lyrics on
//! Musixmatch and the artist image on Last.fm, and serves the composed result over HTTP.

/// Sequential top track -> lyrics -> artist image pipeline
pub mod aggregator;
/// Client modules for interacting with the upstream APIs
pub mod clients;
/// Process configuration read at start-up
pub mod config;
/// HTTP API exposing the aggregator
pub mod server;

use log::debug;
use serde::Deserialize;

use crate::clients::{
    entities::{Artist, ArtistImages, Track},
    errors::{Error, Result},
};

/// Last.fm web service root, all methods are selected with the `method` query parameter.
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

// Last.fm error payloads ({"error": 6, "message": ..}) carry none of these fields,
// so they decode as empty values rather than failing.
#[derive(Deserialize, Debug, Default)]
struct LastFMAPIArtist {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize, Debug)]
struct LastFMAPITrack {
    #[serde(default)]
    name: String,
    #[serde(default)]
    artist: LastFMAPIArtist,
}

#[derive(Deserialize, Debug, Default)]
struct Tracks {
    #[serde(default)]
    track: Vec<LastFMAPITrack>,
}

#[derive(Deserialize, Debug)]
struct TopTracksResponse {
    #[serde(default)]
    tracks: Tracks,
}

#[derive(Deserialize, Debug)]
struct LastFMAPIImage {
    #[serde(rename = "#text", default)]
    url: String,
}

#[derive(Deserialize, Debug, Default)]
struct LastFMAPIArtistInfo {
    #[serde(default)]
    image: Vec<LastFMAPIImage>,
}

#[derive(Deserialize, Debug)]
struct ArtistInfoResponse {
    #[serde(default)]
    artist: LastFMAPIArtistInfo,
}

pub struct LastFmClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LastFmClient {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        LastFmClient {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    // Fetch the first track of the region's chart
    pub async fn get_top_track(&self, region: &str) -> Result<Track> {
        let body = self
            .call(&[("method", "geo.gettoptracks"), ("country", region)])
            .await?;
        match parse_top_track(&body)? {
            Some(track) => Ok(track),
            None => {
                debug!("Last.fm returned no top tracks for region {region:?}");
                Err(Error::NotFound("No tracks found".into()))
            }
        }
    }

    pub async fn get_artist_images(&self, artist: &Artist) -> Result<ArtistImages> {
        let body = self
            .call(&[("method", "artist.getinfo"), ("artist", artist.name.as_str())])
            .await?;
        parse_artist_images(&body)
    }

    // GET with the shared auth parameters. Returns the raw body whatever the status,
    // Last.fm reports failures inside the JSON.
    async fn call(&self, params: &[(&str, &str)]) -> Result<String> {
        debug!("GET {} with params: {:?}", self.base_url, params);
        let response = self
            .http
            .get(&self.base_url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str()), ("format", "json")])
            .send()
            .await?;
        debug!("Last.fm responded with {}", response.status());
        Ok(response.text().await?)
    }
}

// A `null` document decodes as an empty chart
fn parse_top_track(body: &str) -> Result<Option<Track>> {
    let response: Option<TopTracksResponse> = serde_json::from_str(body)?;
    let tracks = response.map(|r| r.tracks.track).unwrap_or_default();
    Ok(tracks.into_iter().next().map(|t| Track {
        name: t.name,
        artist: Artist {
            name: t.artist.name,
        },
    }))
}

fn parse_artist_images(body: &str) -> Result<ArtistImages> {
    let response: Option<ArtistInfoResponse> = serde_json::from_str(body)?;
    let image = response.map(|r| r.artist.image).unwrap_or_default();
    Ok(ArtistImages {
        urls: image.into_iter().map(|i| i.url).collect(),
    })
}

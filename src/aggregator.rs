use log::{debug, info};

use crate::clients::{
    LastFmClient, MusixmatchClient,
    entities::{ArtistImages, TrackInfo},
    errors::{Error, Result},
};
use crate::config::AppConfig;

// Position of the "extralarge" entry in Last.fm's small..mega image list
const ARTIST_IMAGE_INDEX: usize = 3;

/// Upstream clients used by the [`Aggregator`]
pub struct Config {
    pub lastfm: LastFmClient,
    pub musixmatch: MusixmatchClient,
}

pub struct ConfigBuilder {
    app: AppConfig,
    lastfm: Option<LastFmClient>,
    musixmatch: Option<MusixmatchClient>,
}

impl ConfigBuilder {
    pub fn new(app: AppConfig) -> Self {
        Self {
            app,
            lastfm: None,
            musixmatch: None,
        }
    }

    #[must_use]
    pub fn lastfm(mut self, lastfm: LastFmClient) -> Self {
        self.lastfm = Some(lastfm);
        self
    }

    #[must_use]
    pub fn musixmatch(mut self, musixmatch: MusixmatchClient) -> Self {
        self.musixmatch = Some(musixmatch);
        self
    }

    pub fn build(self) -> Result<Config> {
        // One connection pool shared by both upstream clients
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConfigurationError(format!("cannot build HTTP client: {e}")))?;
        let lastfm = match self.lastfm {
            Some(l) => l,
            None => LastFmClient::new(
                http.clone(),
                self.app.lastfm_api_key,
                self.app.lastfm_base_url,
            ),
        };
        let musixmatch = match self.musixmatch {
            Some(m) => m,
            None => MusixmatchClient::new(
                http,
                self.app.musixmatch_api_key,
                self.app.musixmatch_base_url,
            ),
        };
        Ok(Config { lastfm, musixmatch })
    }
}

/// Composes a region's top track with its lyrics and artist image
pub struct Aggregator {
    config: Config,
}

impl Aggregator {
    pub fn new(config: Config) -> Self {
        Aggregator { config }
    }

    pub fn try_from_app_config(app: AppConfig) -> Result<Self> {
        Ok(Aggregator::new(ConfigBuilder::new(app).build()?))
    }

    /// Top track -> lyrics -> artist image, stopping at the first failing step.
    pub async fn get_top_track_info(&self, region: &str) -> Result<TrackInfo> {
        info!("Fetching top track info for region {region:?} ...");

        let track = self.config.lastfm.get_top_track(region).await?;
        debug!("Top track: {} - {}", track.artist.name, track.name);

        let lyrics = self.config.musixmatch.get_lyrics(&track).await?;
        debug!("Fetched {} bytes of lyrics", lyrics.body.len());

        let images = self.config.lastfm.get_artist_images(&track.artist).await?;
        let image_url = select_image(images)?;

        Ok(TrackInfo::new(track, lyrics, image_url))
    }
}

fn select_image(images: ArtistImages) -> Result<String> {
    let count = images.urls.len();
    images
        .urls
        .into_iter()
        .nth(ARTIST_IMAGE_INDEX)
        .ok_or_else(|| {
            Error::MalformedUpstreamResponse(format!(
                "artist info lists {count} images, expected at least {}",
                ARTIST_IMAGE_INDEX + 1
            ))
        })
}

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
}

/// First entry of a region's top-track chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: Artist, // assume one artist for simplicity
}

/// Lyrics text for a track. Empty when the upstream has none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lyrics {
    pub body: String,
}

/// Image URLs of an artist in the order the upstream lists them (smallest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistImages {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistInfo {
    pub name: String,
    pub image_url: String,
}

/// Composed response of `GET /track/{region}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackInfo {
    pub name: String,
    pub lyrics: String,
    pub artist: ArtistInfo,
}

impl TrackInfo {
    pub fn new(track: Track, lyrics: Lyrics, image_url: String) -> Self {
        TrackInfo {
            name: track.name,
            lyrics: lyrics.body,
            artist: ArtistInfo {
                name: track.artist.name,
                image_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_info_serializes_in_response_shape() {
        let info = TrackInfo::new(
            Track {
                name: "Song A".into(),
                artist: Artist {
                    name: "Artist X".into(),
                },
            },
            Lyrics {
                body: "la la la".into(),
            },
            "http://img/4.jpg".into(),
        );

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Song A","lyrics":"la la la","artist":{"name":"Artist X","image_url":"http://img/4.jpg"}}"#
        );
    }
}

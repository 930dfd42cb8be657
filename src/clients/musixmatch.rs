use log::debug;
use serde::Deserialize;

use crate::clients::{
    entities::{Lyrics, Track},
    errors::Result,
};

pub const DEFAULT_BASE_URL: &str = "https://api.musixmatch.com/ws/1.1";

#[derive(Deserialize, Debug, Default)]
struct MusixmatchAPILyrics {
    #[serde(default)]
    lyrics_body: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct LyricsMatch {
    #[serde(default)]
    lyrics: MusixmatchAPILyrics,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum MessageBody {
    // Musixmatch answers `"body": []` when nothing matched
    NoMatch([(); 0]),
    Match(LyricsMatch),
}

impl Default for MessageBody {
    fn default() -> Self {
        MessageBody::NoMatch([])
    }
}

#[derive(Deserialize, Debug, Default)]
struct Message {
    #[serde(default)]
    body: MessageBody,
}

#[derive(Deserialize, Debug)]
struct LyricsResponse {
    #[serde(default)]
    message: Message,
}

pub struct MusixmatchClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MusixmatchClient {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        MusixmatchClient {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    // Look up lyrics matching the track and artist names
    pub async fn get_lyrics(&self, track: &Track) -> Result<Lyrics> {
        let url = format!("{}/matcher.lyrics.get", self.base_url.trim_end_matches('/'));
        debug!("GET {url} for {} - {}", track.artist.name, track.name);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q_track", track.name.as_str()),
                ("q_artist", track.artist.name.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;
        debug!("Musixmatch responded with {}", response.status());
        let body = response.text().await?;
        parse_lyrics(&body)
    }
}

// Missing levels (and a `null` document) mean no lyrics, wrongly typed ones are malformed.
fn parse_lyrics(body: &str) -> Result<Lyrics> {
    let response: Option<LyricsResponse> = serde_json::from_str(body)?;
    let body = match response.map(|r| r.message.body) {
        Some(MessageBody::Match(m)) => m.lyrics.lyrics_body.unwrap_or_default(),
        Some(MessageBody::NoMatch(_)) | None => String::new(),
    };
    Ok(Lyrics { body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::Error;

    #[test]
    fn lyrics_body_is_extracted() {
        let body = r#"{"message":{"header":{"status_code":200},"body":{"lyrics":{"lyrics_id":1,"lyrics_body":"la la la"}}}}"#;
        assert_eq!(parse_lyrics(body).unwrap().body, "la la la");
    }

    #[test]
    fn unmatched_track_yields_empty_lyrics() {
        let body = r#"{"message":{"header":{"status_code":404},"body":[]}}"#;
        assert_eq!(parse_lyrics(body).unwrap(), Lyrics::default());
    }

    #[test]
    fn missing_message_yields_empty_lyrics() {
        assert_eq!(parse_lyrics("{}").unwrap().body, "");
    }

    #[test]
    fn null_lyrics_body_yields_empty_lyrics() {
        let body = r#"{"message":{"body":{"lyrics":{"lyrics_body":null}}}}"#;
        assert_eq!(parse_lyrics(body).unwrap().body, "");
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_lyrics("not json").unwrap_err();
        assert!(matches!(err, Error::MalformedUpstreamResponse(_)));
    }

    #[test]
    fn wrongly_typed_lyrics_are_malformed() {
        for body in [
            r#"{"message":{"body":{"lyrics":{"lyrics_body":42}}}}"#,
            r#"{"message":"oops"}"#,
            r#"{"message":{"body":[1]}}"#,
            "[1,2]",
        ] {
            let err = parse_lyrics(body).unwrap_err();
            assert!(matches!(err, Error::MalformedUpstreamResponse(_)), "{body}");
        }
    }
}

//! Media-kind records and the exclusive `Media` union
//!
//! `Media` holds at most one [`MediaKind`]. Setting a kind replaces whatever
//! was there before, so a document never carries two media payloads.

use serde::{Deserialize, Serialize};

use super::common::{ContentRating, MediaFile, Person, Rating, Track, UniqueId};

/// XML local names of the media kinds, in detection order
///
/// The reader picks the first of these present under `<media>`.
pub const MEDIA_KIND_ORDER: [&str; 8] = [
    "movie",
    "tvshow",
    "music",
    "audiobook",
    "podcast",
    "anime",
    "musicvideo",
    "video",
];

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub original_title: String,
    #[prost(string, tag = "3")]
    pub sort_title: String,
    #[prost(string, repeated, tag = "4")]
    pub alternate_titles: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub ratings: Vec<Rating>,
    #[prost(float, tag = "6")]
    pub user_rating: f32,
    #[prost(string, tag = "7")]
    pub outline: String,
    #[prost(string, tag = "8")]
    pub plot: String,
    #[prost(string, tag = "9")]
    pub tagline: String,
    /// Minutes
    #[prost(int32, tag = "10")]
    pub runtime: i32,
    #[prost(int32, tag = "11")]
    pub year: i32,
    #[prost(message, repeated, tag = "12")]
    pub banners: Vec<MediaFile>,
    #[prost(message, repeated, tag = "13")]
    pub thumbs: Vec<MediaFile>,
    #[prost(message, repeated, tag = "14")]
    pub fanart: Vec<MediaFile>,
    #[prost(message, repeated, tag = "15")]
    pub content_ratings: Vec<ContentRating>,
    #[prost(message, repeated, tag = "16")]
    pub unique_ids: Vec<UniqueId>,
    #[prost(string, repeated, tag = "17")]
    pub genres: Vec<String>,
    #[prost(string, repeated, tag = "18")]
    pub tags: Vec<String>,
    #[prost(string, tag = "19")]
    pub set_name: String,
    #[prost(string, tag = "20")]
    pub set_overview: String,
    #[prost(string, repeated, tag = "21")]
    pub countries: Vec<String>,
    #[prost(string, repeated, tag = "22")]
    pub production_companies: Vec<String>,
    #[prost(message, repeated, tag = "23")]
    pub actors: Vec<Person>,
    #[prost(message, repeated, tag = "24")]
    pub directors: Vec<Person>,
    #[prost(message, repeated, tag = "25")]
    pub writers: Vec<Person>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TvShow {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub original_title: String,
    #[prost(string, tag = "3")]
    pub sort_title: String,
    #[prost(string, tag = "4")]
    pub plot: String,
    #[prost(int32, tag = "5")]
    pub year: i32,
    #[prost(int32, tag = "6")]
    pub runtime: i32,
    /// "Continuing", "Ended", ...
    #[prost(string, tag = "7")]
    pub status: String,
    #[prost(string, tag = "8")]
    pub premiered: String,
    #[prost(string, repeated, tag = "9")]
    pub studios: Vec<String>,
    #[prost(int32, tag = "10")]
    pub season: i32,
    #[prost(int32, tag = "11")]
    pub episode: i32,
    #[prost(string, repeated, tag = "12")]
    pub genres: Vec<String>,
    #[prost(message, repeated, tag = "13")]
    pub actors: Vec<Person>,
    #[prost(message, repeated, tag = "14")]
    pub ratings: Vec<Rating>,
    #[prost(message, repeated, tag = "15")]
    pub unique_ids: Vec<UniqueId>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Music {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub artist: String,
    #[prost(string, tag = "3")]
    pub album_artist: String,
    #[prost(string, tag = "4")]
    pub album: String,
    #[prost(int32, tag = "5")]
    pub year: i32,
    #[prost(bool, tag = "6")]
    pub compilation: bool,
    #[prost(string, tag = "7")]
    pub label: String,
    /// Release type ("album", "single", "ep", ...)
    #[prost(string, tag = "8")]
    pub r#type: String,
    #[prost(string, repeated, tag = "9")]
    pub genres: Vec<String>,
    #[prost(message, repeated, tag = "10")]
    pub tracks: Vec<Track>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioBook {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub author: String,
    #[prost(string, tag = "3")]
    pub narrator: String,
    #[prost(string, tag = "4")]
    pub publisher: String,
    #[prost(int32, tag = "5")]
    pub year: i32,
    #[prost(string, tag = "6")]
    pub description: String,
    #[prost(int32, tag = "7")]
    pub runtime: i32,
    #[prost(string, tag = "8")]
    pub language: String,
    #[prost(string, tag = "9")]
    pub isbn: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Podcast {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub author: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub language: String,
    /// Written as `<pubDate>`
    #[prost(string, tag = "5")]
    pub pub_date: String,
    #[prost(string, tag = "6")]
    pub link: String,
    #[prost(string, tag = "7")]
    pub copyright: String,
    #[prost(int32, tag = "8")]
    pub duration: i32,
    #[prost(bool, tag = "9")]
    pub explicit: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Anime {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub original_title: String,
    #[prost(string, tag = "3")]
    pub plot: String,
    #[prost(string, tag = "4")]
    pub premiered: String,
    #[prost(string, tag = "5")]
    pub status: String,
    /// Source material ("manga", "light novel", "original", ...)
    #[prost(string, tag = "6")]
    pub source: String,
    #[prost(string, tag = "7")]
    pub r#type: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicVideo {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub artist: String,
    #[prost(string, tag = "3")]
    pub album: String,
    #[prost(int32, tag = "4")]
    pub year: i32,
    #[prost(int32, tag = "5")]
    pub runtime: i32,
    #[prost(string, tag = "6")]
    pub release_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(int32, tag = "3")]
    pub runtime: i32,
    #[prost(string, tag = "4")]
    pub date: String,
}

/// The active media payload of a document
#[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[prost(message, tag = "1")]
    Movie(Movie),
    #[prost(message, tag = "2")]
    TvShow(TvShow),
    #[prost(message, tag = "3")]
    Music(Music),
    #[prost(message, tag = "4")]
    AudioBook(AudioBook),
    #[prost(message, tag = "5")]
    Podcast(Podcast),
    #[prost(message, tag = "6")]
    Anime(Anime),
    #[prost(message, tag = "7")]
    MusicVideo(MusicVideo),
    #[prost(message, tag = "8")]
    Video(Video),
}

impl MediaKind {
    /// XML local name of this kind
    pub fn element_name(&self) -> &'static str {
        match self {
            MediaKind::Movie(_) => "movie",
            MediaKind::TvShow(_) => "tvshow",
            MediaKind::Music(_) => "music",
            MediaKind::AudioBook(_) => "audiobook",
            MediaKind::Podcast(_) => "podcast",
            MediaKind::Anime(_) => "anime",
            MediaKind::MusicVideo(_) => "musicvideo",
            MediaKind::Video(_) => "video",
        }
    }
}

/// Exclusive container for one media kind
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[prost(oneof = "MediaKind", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub kind: Option<MediaKind>,
}

macro_rules! kind_accessors {
    ($($variant:ident => $get:ident, $has:ident;)*) => {
        $(
            pub fn $get(&self) -> Option<&$variant> {
                match &self.kind {
                    Some(MediaKind::$variant(inner)) => Some(inner),
                    _ => None,
                }
            }

            pub fn $has(&self) -> bool {
                matches!(self.kind, Some(MediaKind::$variant(_)))
            }
        )*
    };
}

impl Media {
    /// Replace the active variant
    pub fn set(&mut self, kind: impl Into<MediaKind>) {
        self.kind = Some(kind.into());
    }

    pub fn clear(&mut self) {
        self.kind = None;
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    /// XML local name of the active variant, if any
    pub fn element_name(&self) -> Option<&'static str> {
        self.kind.as_ref().map(MediaKind::element_name)
    }

    kind_accessors! {
        Movie => movie, has_movie;
        TvShow => tvshow, has_tvshow;
        Music => music, has_music;
        AudioBook => audiobook, has_audiobook;
        Podcast => podcast, has_podcast;
        Anime => anime, has_anime;
        MusicVideo => musicvideo, has_musicvideo;
        Video => video, has_video;
    }
}

macro_rules! kind_conversions {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for MediaKind {
                fn from(inner: $variant) -> Self {
                    MediaKind::$variant(inner)
                }
            }

            impl From<$variant> for Media {
                fn from(inner: $variant) -> Self {
                    Media {
                        kind: Some(MediaKind::$variant(inner)),
                    }
                }
            }
        )*
    };
}

kind_conversions!(Movie, TvShow, Music, AudioBook, Podcast, Anime, MusicVideo, Video);

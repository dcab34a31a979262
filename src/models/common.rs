//! Sub-records shared by the media kinds
//!
//! Ratings, artwork, content ratings, external identifiers and people. Each
//! type is a protobuf message (via `prost` derive) so the binary codec can
//! encode it directly; tags are part of the wire format and must not change.

use serde::{Deserialize, Serialize};

/// A score from one rating source (e.g. "imdb", "tmdb", "metacritic")
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// Free-form source identifier
    #[prost(string, tag = "1")]
    pub name: String,

    #[prost(float, tag = "2")]
    pub value: f32,

    /// Zero means no vote count was given
    #[prost(int32, tag = "3")]
    pub votes: i32,

    /// Upper bound of the scale (10, 100, ...)
    #[prost(int32, tag = "4")]
    pub max: i32,

    /// Marks the rating a consumer should prefer
    #[prost(bool, tag = "5")]
    pub default: bool,
}

impl Rating {
    pub fn new(name: impl Into<String>, value: f32, max: i32) -> Self {
        Self {
            name: name.into(),
            value,
            max,
            ..Default::default()
        }
    }
}

/// Artwork reference (banner, thumb, fanart)
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFile {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(int32, tag = "2")]
    pub width: i32,
    #[prost(int32, tag = "3")]
    pub height: i32,
    #[prost(string, tag = "4")]
    pub url: String,
    /// Season the image belongs to, for episodic artwork
    #[prost(string, tag = "5")]
    pub season: String,
    /// Secondary low-resolution preview URL
    #[prost(string, tag = "6")]
    pub preview: String,
}

impl MediaFile {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Age/content classification issued by a ratings board
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRating {
    #[prost(string, tag = "1")]
    pub country: String,
    /// Issuing board ("MPAA", "BBFC", "FSK", ...)
    #[prost(string, tag = "2")]
    pub board: String,
    #[prost(string, tag = "3")]
    pub rating: String,
    /// Optional badge image URL
    #[prost(string, tag = "4")]
    pub image: String,
}

/// Identifier of the item in an external database
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct UniqueId {
    /// Provider of the identifier ("imdb", "tmdb", "tvdb", ...)
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(bool, tag = "3")]
    pub default: bool,
}

impl UniqueId {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            r#type: kind.into(),
            value: value.into(),
            default: false,
        }
    }
}

/// Cast or crew member
///
/// `order == 0` is indistinguishable from "no order given".
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[prost(string, tag = "1")]
    pub name: String,
    /// Character name for actors, job description for crew
    #[prost(string, tag = "2")]
    pub role: String,
    #[prost(int32, tag = "3")]
    pub order: i32,
    #[prost(string, tag = "4")]
    pub thumb: String,
    #[prost(string, tag = "5")]
    pub bio: String,
    #[prost(string, tag = "6")]
    pub url: String,
    #[prost(string, tag = "7")]
    pub birthdate: String,
    #[prost(string, tag = "8")]
    pub birthplace: String,
    #[prost(string, tag = "9")]
    pub deathdate: String,
    #[prost(string, tag = "10")]
    pub deathplace: String,
}

impl Person {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// One track of a music release
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    #[prost(int32, tag = "1")]
    pub position: i32,
    #[prost(string, tag = "2")]
    pub title: String,
    /// Length in seconds
    #[prost(int32, tag = "3")]
    pub duration: i32,
    #[prost(string, tag = "4")]
    pub artist: String,
}

//! Record model for NFOStandard documents
//!
//! One [`NfoRoot`] per document: an optional [`Media`] union plus any
//! number of [`LibraryMetadata`] blocks. The same types back the XML
//! reader/writer, the binary codec and the JSON bridge.

pub mod common;
pub mod media;
pub mod root;

// Re-export commonly used types
pub use common::{ContentRating, MediaFile, Person, Rating, Track, UniqueId};
pub use media::{
    Anime, AudioBook, Media, MediaKind, Movie, Music, MusicVideo, Podcast, TvShow, Video,
    MEDIA_KIND_ORDER,
};
pub use root::{LibraryMetadata, NfoRoot, Property};

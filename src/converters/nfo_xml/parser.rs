//! XML parsing layer for NFOStandard documents
//!
//! Wraps roxmltree. Elements are matched by local name, preferring the
//! `NFOStandard` namespace when a document mixes qualified and unqualified
//! children, so unprefixed or differently-prefixed files read the same way.
//! Only a broken document or a wrong top-level element is an error; every
//! missing or malformed field falls back to its zero value.

use roxmltree::{Document, Node, ParsingOptions};

use super::NFO_NAMESPACE;
use crate::converters::coerce::{coerce_bool, coerce_float, coerce_int};
use crate::converters::errors::{ConvertError, Result};
use crate::models::{
    Anime, AudioBook, ContentRating, LibraryMetadata, Media, MediaFile, MediaKind, Movie, Music,
    MusicVideo, NfoRoot, Person, Podcast, Rating, Track, TvShow, UniqueId, Video,
    MEDIA_KIND_ORDER,
};

/// Parse NFOStandard XML text into a record
pub fn parse(xml: &str) -> Result<NfoRoot> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ConvertError::MalformedDocument(format!("XML parse error: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "root" {
        return Err(ConvertError::MalformedDocument(
            "root element not found".to_string(),
        ));
    }
    let root = ElementNode::new(root);

    let media = root.child("media").map(parse_media);
    let library = root.records("library", parse_library);

    Ok(NfoRoot { media, library })
}

// ============================================================================
// ELEMENT WRAPPER
// ============================================================================

/// Wrapper around an element node with typed field lookups
#[derive(Clone, Copy)]
pub struct ElementNode<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> ElementNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// First child with the given local name
    pub fn child(&self, name: &str) -> Option<ElementNode<'a, 'input>> {
        get_child(self.node, name).map(ElementNode::new)
    }

    /// Text of the first matching child, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.child(name).map(|c| c.inner_text()).unwrap_or_default()
    }

    pub fn int(&self, name: &str) -> i32 {
        coerce_int(self.child(name).map(|c| c.inner_text()).as_deref())
    }

    pub fn float(&self, name: &str) -> f32 {
        coerce_float(self.child(name).map(|c| c.inner_text()).as_deref())
    }

    pub fn flag(&self, name: &str) -> bool {
        coerce_bool(self.child(name).map(|c| c.inner_text()).as_deref())
    }

    /// Text of every matching child, in document order
    pub fn texts(&self, name: &str) -> Vec<String> {
        get_children(self.node, name)
            .into_iter()
            .map(|n| ElementNode::new(n).inner_text())
            .collect()
    }

    /// Every matching child mapped through `parse`, in document order
    pub fn records<T>(&self, name: &str, parse: fn(ElementNode<'a, 'input>) -> T) -> Vec<T> {
        get_children(self.node, name)
            .into_iter()
            .map(|n| parse(ElementNode::new(n)))
            .collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    pub fn attr_text(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    pub fn attr_int(&self, name: &str) -> i32 {
        coerce_int(self.attr(name))
    }

    pub fn attr_flag(&self, name: &str) -> bool {
        coerce_bool(self.attr(name))
    }

    /// Concatenated text of all descendants
    pub fn inner_text(&self) -> String {
        self.node
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    pub fn local_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// Child elements in document order, regardless of name
    pub fn elements(&self) -> impl Iterator<Item = ElementNode<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(ElementNode::new)
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn is_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn in_nfo_namespace(node: &Node) -> bool {
    node.tag_name().namespace() == Some(NFO_NAMESPACE)
}

/// Get first child element with given local name
///
/// A child in the NFOStandard namespace wins over an earlier one outside it.
pub fn get_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    let mut fallback = None;
    for child in node.children().filter(|n| is_named(n, name)) {
        if in_nfo_namespace(&child) {
            return Some(child);
        }
        fallback.get_or_insert(child);
    }
    fallback
}

/// Get all child elements with given local name
///
/// If any of them is in the NFOStandard namespace, only those are returned.
pub fn get_children<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    let matching: Vec<Node<'a, 'input>> =
        node.children().filter(|n| is_named(n, name)).collect();

    if matching.iter().any(|n| in_nfo_namespace(n)) {
        matching.into_iter().filter(|n| in_nfo_namespace(n)).collect()
    } else {
        matching
    }
}

// ============================================================================
// MEDIA DISPATCH
// ============================================================================

fn parse_media(el: ElementNode) -> Media {
    let mut present = MEDIA_KIND_ORDER
        .iter()
        .filter_map(|name| el.child(name).map(|node| (*name, node)));

    let Some((name, node)) = present.next() else {
        log::debug!("<media> has no recognised media kind");
        return Media::default();
    };

    let ignored: Vec<&str> = present.map(|(n, _)| n).collect();
    if ignored.is_empty() {
        log::debug!("media kind: <{}>", name);
    } else {
        log::debug!("media kind: <{}>, ignoring {:?}", name, ignored);
    }

    Media {
        kind: parse_kind(name, node),
    }
}

fn parse_kind(name: &str, node: ElementNode) -> Option<MediaKind> {
    let kind = match name {
        "movie" => MediaKind::Movie(parse_movie(node)),
        "tvshow" => MediaKind::TvShow(parse_tvshow(node)),
        "music" => MediaKind::Music(parse_music(node)),
        "audiobook" => MediaKind::AudioBook(parse_audiobook(node)),
        "podcast" => MediaKind::Podcast(parse_podcast(node)),
        "anime" => MediaKind::Anime(parse_anime(node)),
        "musicvideo" => MediaKind::MusicVideo(parse_musicvideo(node)),
        "video" => MediaKind::Video(parse_video(node)),
        _ => return None,
    };
    Some(kind)
}

// ============================================================================
// MEDIA KINDS
// ============================================================================

fn parse_movie(el: ElementNode) -> Movie {
    Movie {
        title: el.text("title"),
        original_title: el.text("originaltitle"),
        sort_title: el.text("sorttitle"),
        alternate_titles: el.texts("alternatetitle"),
        ratings: el.records("rating", parse_rating),
        user_rating: el.float("userrating"),
        outline: el.text("outline"),
        plot: el.text("plot"),
        tagline: el.text("tagline"),
        runtime: el.int("runtime"),
        year: el.int("year"),
        banners: el.records("banner", parse_media_file),
        thumbs: el.records("thumb", parse_media_file),
        fanart: el.records("fanart", parse_media_file),
        content_ratings: el.records("contentrating", parse_content_rating),
        unique_ids: el.records("uniqueid", parse_unique_id),
        genres: el.texts("genre"),
        tags: el.texts("tag"),
        set_name: el.text("setname"),
        set_overview: el.text("setoverview"),
        countries: el.texts("country"),
        production_companies: el.texts("productioncompany"),
        actors: el.records("actor", parse_person),
        directors: el.records("director", parse_person),
        writers: el.records("writer", parse_person),
    }
}

fn parse_tvshow(el: ElementNode) -> TvShow {
    TvShow {
        title: el.text("title"),
        original_title: el.text("originaltitle"),
        sort_title: el.text("sorttitle"),
        plot: el.text("plot"),
        year: el.int("year"),
        runtime: el.int("runtime"),
        status: el.text("status"),
        premiered: el.text("premiered"),
        studios: el.texts("studio"),
        season: el.int("season"),
        episode: el.int("episode"),
        genres: el.texts("genre"),
        actors: el.records("actor", parse_person),
        ratings: el.records("rating", parse_rating),
        unique_ids: el.records("uniqueid", parse_unique_id),
    }
}

fn parse_music(el: ElementNode) -> Music {
    Music {
        title: el.text("title"),
        artist: el.text("artist"),
        album_artist: el.text("albumartist"),
        album: el.text("album"),
        year: el.int("year"),
        compilation: el.flag("compilation"),
        label: el.text("label"),
        r#type: el.text("type"),
        genres: el.texts("genre"),
        tracks: el.records("track", parse_track),
    }
}

fn parse_audiobook(el: ElementNode) -> AudioBook {
    AudioBook {
        title: el.text("title"),
        author: el.text("author"),
        narrator: el.text("narrator"),
        publisher: el.text("publisher"),
        year: el.int("year"),
        description: el.text("description"),
        runtime: el.int("runtime"),
        language: el.text("language"),
        isbn: el.text("isbn"),
    }
}

fn parse_podcast(el: ElementNode) -> Podcast {
    Podcast {
        title: el.text("title"),
        author: el.text("author"),
        description: el.text("description"),
        language: el.text("language"),
        pub_date: el.text("pubDate"),
        link: el.text("link"),
        copyright: el.text("copyright"),
        duration: el.int("duration"),
        explicit: el.flag("explicit"),
    }
}

fn parse_anime(el: ElementNode) -> Anime {
    Anime {
        title: el.text("title"),
        original_title: el.text("originaltitle"),
        plot: el.text("plot"),
        premiered: el.text("premiered"),
        status: el.text("status"),
        source: el.text("source"),
        r#type: el.text("type"),
    }
}

fn parse_musicvideo(el: ElementNode) -> MusicVideo {
    MusicVideo {
        title: el.text("title"),
        artist: el.text("artist"),
        album: el.text("album"),
        year: el.int("year"),
        runtime: el.int("runtime"),
        release_date: el.text("releasedate"),
    }
}

fn parse_video(el: ElementNode) -> Video {
    Video {
        title: el.text("title"),
        description: el.text("description"),
        runtime: el.int("runtime"),
        date: el.text("date"),
    }
}

// ============================================================================
// SUB-RECORDS
// ============================================================================

fn parse_rating(el: ElementNode) -> Rating {
    Rating {
        name: el.attr_text("name"),
        value: el.float("value"),
        votes: el.int("votes"),
        max: el.attr_int("max"),
        default: el.attr_flag("default"),
    }
}

fn parse_media_file(el: ElementNode) -> MediaFile {
    MediaFile {
        r#type: el.attr_text("type"),
        width: el.attr_int("width"),
        height: el.attr_int("height"),
        url: el
            .attr("url")
            .map(str::to_string)
            .unwrap_or_else(|| el.inner_text()),
        season: el.attr_text("season"),
        preview: el.attr_text("preview"),
    }
}

fn parse_content_rating(el: ElementNode) -> ContentRating {
    ContentRating {
        country: el.attr_text("country"),
        board: el.attr_text("board"),
        rating: el.text("rating"),
        image: el.text("image"),
    }
}

fn parse_unique_id(el: ElementNode) -> UniqueId {
    UniqueId {
        r#type: el.attr_text("type"),
        value: el.inner_text(),
        default: el.attr_flag("default"),
    }
}

fn parse_person(el: ElementNode) -> Person {
    Person {
        name: el.text("name"),
        role: el.text("role"),
        order: el.int("order"),
        thumb: el.text("thumb"),
        bio: el.text("bio"),
        url: el.text("url"),
        birthdate: el.text("birthdate"),
        birthplace: el.text("birthplace"),
        deathdate: el.text("deathdate"),
        deathplace: el.text("deathplace"),
    }
}

fn parse_track(el: ElementNode) -> Track {
    Track {
        position: el.int("position"),
        title: el.text("title"),
        duration: el.int("duration"),
        artist: el.text("artist"),
    }
}

fn parse_library(el: ElementNode) -> LibraryMetadata {
    let mut library = LibraryMetadata::new(el.attr_text("type"));
    for prop in el.elements() {
        library.insert(prop.local_name(), prop.inner_text());
    }
    library
}

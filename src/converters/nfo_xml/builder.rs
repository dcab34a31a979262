//! XML writer for NFOStandard documents
//!
//! Sparse output: empty strings, zero numbers and false flags are left out
//! entirely. Repeated values are always written (an empty entry becomes a
//! self-closing element) so collection lengths survive a round trip.
//! Attribute vs. child placement mirrors the parser field for field.
//!
//! Characters XML 1.0 cannot carry at all (C0 controls other than tab, LF
//! and CR, plus U+FFFE and U+FFFF) are dropped from written values. Carriage
//! returns, and tabs and newlines inside attributes, are written as character
//! references so the reader's whitespace normalization leaves them intact.

use std::borrow::Cow;

use quick_xml::escape::escape;

use super::{is_valid_element_name, NFO_NAMESPACE, SCHEMA_LOCATION, XSI_NAMESPACE};
use crate::converters::coerce::{format_bool, format_float, format_int};
use crate::models::{
    Anime, AudioBook, ContentRating, LibraryMetadata, Media, MediaFile, MediaKind, Movie, Music,
    MusicVideo, NfoRoot, Person, Podcast, Rating, Track, TvShow, UniqueId, Video,
};

/// Attributes for one element, skipping default values
#[derive(Default)]
pub struct AttrList {
    attrs: Vec<(&'static str, String)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn text(self, name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.raw(name, value)
        }
    }

    pub fn int(self, name: &'static str, value: i32) -> Self {
        if value == 0 {
            self
        } else {
            self.raw(name, &format_int(value))
        }
    }

    pub fn flag(self, name: &'static str, value: bool) -> Self {
        if value {
            self.raw(name, format_bool(value))
        } else {
            self
        }
    }

    fn write_to(&self, buffer: &mut String) {
        for (name, value) in &self.attrs {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            buffer.push_str(&escape_value(value, true));
            buffer.push('"');
        }
    }
}

/// Whether `c` may appear in an XML 1.0 document
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape a text or attribute value for output
pub fn escape_value(value: &str, in_attribute: bool) -> String {
    let cleaned: Cow<str> = if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        log::debug!("dropping non-XML characters from {:?}", value);
        Cow::Owned(value.chars().filter(|c| is_xml_char(*c)).collect())
    };

    let escaped = escape(cleaned.as_ref());
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\r' => out.push_str("&#13;"),
            '\t' if in_attribute => out.push_str("&#9;"),
            '\n' if in_attribute => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
    out
}

/// Indenting string builder for NFO XML
pub struct NfoXmlBuilder {
    buffer: String,
    indent: usize,
    depth: usize,
}

impl NfoXmlBuilder {
    pub fn new(indent: usize) -> Self {
        Self {
            buffer: String::new(),
            indent,
            depth: 0,
        }
    }

    fn pad(&mut self) {
        for _ in 0..self.depth * self.indent {
            self.buffer.push(' ');
        }
    }

    fn start_tag(&mut self, name: &str, attrs: &AttrList) {
        self.pad();
        self.buffer.push('<');
        self.buffer.push_str(name);
        attrs.write_to(&mut self.buffer);
    }

    /// Element with nested children; collapses to `<name/>` when `body` writes nothing
    pub fn element<F>(&mut self, name: &str, attrs: AttrList, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.start_tag(name, &attrs);
        self.buffer.push_str(">\n");
        let body_start = self.buffer.len();

        self.depth += 1;
        body(self);
        self.depth -= 1;

        if self.buffer.len() == body_start {
            self.buffer.truncate(body_start - 2);
            self.buffer.push_str("/>\n");
        } else {
            self.pad();
            self.buffer.push_str("</");
            self.buffer.push_str(name);
            self.buffer.push_str(">\n");
        }
    }

    /// Element whose content is a single text value
    pub fn leaf(&mut self, name: &str, attrs: AttrList, value: &str) {
        self.start_tag(name, &attrs);
        if value.is_empty() {
            self.buffer.push_str("/>\n");
        } else {
            self.buffer.push('>');
            self.buffer.push_str(&escape_value(value, false));
            self.buffer.push_str("</");
            self.buffer.push_str(name);
            self.buffer.push_str(">\n");
        }
    }

    pub fn text(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.leaf(name, AttrList::new(), value);
        }
    }

    pub fn int(&mut self, name: &str, value: i32) {
        if value != 0 {
            self.leaf(name, AttrList::new(), &format_int(value));
        }
    }

    pub fn float(&mut self, name: &str, value: f32) {
        if value != 0.0 {
            self.leaf(name, AttrList::new(), &format_float(value));
        }
    }

    pub fn flag(&mut self, name: &str, value: bool) {
        if value {
            self.leaf(name, AttrList::new(), format_bool(value));
        }
    }

    /// One element per entry, empty entries included
    pub fn texts(&mut self, name: &str, values: &[String]) {
        for value in values {
            self.leaf(name, AttrList::new(), value);
        }
    }

    pub fn records<T>(&mut self, name: &str, items: &[T], write: fn(&mut Self, &str, &T)) {
        for item in items {
            write(self, name, item);
        }
    }

    /// Finalize and return the complete document
    pub fn finalize(self) -> String {
        let mut xml = String::with_capacity(self.buffer.len() + 64);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&self.buffer);
        xml
    }
}

/// Write a record as a complete NFOStandard document
pub fn write_document(root: &NfoRoot, indent: usize) -> String {
    let mut builder = NfoXmlBuilder::new(indent);

    let attrs = AttrList::new()
        .raw("xmlns", NFO_NAMESPACE)
        .raw("xmlns:xsi", XSI_NAMESPACE)
        .raw("xsi:schemaLocation", SCHEMA_LOCATION);

    builder.element("root", attrs, |b| {
        if let Some(media) = &root.media {
            write_media(b, media);
        }
        for library in &root.library {
            write_library(b, library);
        }
    });

    builder.finalize()
}

fn write_media(b: &mut NfoXmlBuilder, media: &Media) {
    let Some(kind) = &media.kind else {
        return;
    };

    b.element("media", AttrList::new(), |b| {
        let name = kind.element_name();
        match kind {
            MediaKind::Movie(movie) => write_movie(b, name, movie),
            MediaKind::TvShow(show) => write_tvshow(b, name, show),
            MediaKind::Music(music) => write_music(b, name, music),
            MediaKind::AudioBook(book) => write_audiobook(b, name, book),
            MediaKind::Podcast(podcast) => write_podcast(b, name, podcast),
            MediaKind::Anime(anime) => write_anime(b, name, anime),
            MediaKind::MusicVideo(video) => write_musicvideo(b, name, video),
            MediaKind::Video(video) => write_video(b, name, video),
        }
    });
}

// ============================================================================
// MEDIA KINDS
// ============================================================================

fn write_movie(b: &mut NfoXmlBuilder, name: &str, movie: &Movie) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &movie.title);
        b.text("originaltitle", &movie.original_title);
        b.text("sorttitle", &movie.sort_title);
        b.texts("alternatetitle", &movie.alternate_titles);
        b.records("rating", &movie.ratings, write_rating);
        b.float("userrating", movie.user_rating);
        b.text("outline", &movie.outline);
        b.text("plot", &movie.plot);
        b.text("tagline", &movie.tagline);
        b.int("runtime", movie.runtime);
        b.int("year", movie.year);
        b.records("banner", &movie.banners, write_media_file);
        b.records("thumb", &movie.thumbs, write_media_file);
        b.records("fanart", &movie.fanart, write_media_file);
        b.records("contentrating", &movie.content_ratings, write_content_rating);
        b.records("uniqueid", &movie.unique_ids, write_unique_id);
        b.texts("genre", &movie.genres);
        b.texts("tag", &movie.tags);
        b.text("setname", &movie.set_name);
        b.text("setoverview", &movie.set_overview);
        b.texts("country", &movie.countries);
        b.texts("productioncompany", &movie.production_companies);
        b.records("actor", &movie.actors, write_person);
        b.records("director", &movie.directors, write_person);
        b.records("writer", &movie.writers, write_person);
    });
}

fn write_tvshow(b: &mut NfoXmlBuilder, name: &str, show: &TvShow) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &show.title);
        b.text("originaltitle", &show.original_title);
        b.text("sorttitle", &show.sort_title);
        b.records("rating", &show.ratings, write_rating);
        b.text("plot", &show.plot);
        b.int("year", show.year);
        b.int("runtime", show.runtime);
        b.text("status", &show.status);
        b.text("premiered", &show.premiered);
        b.texts("studio", &show.studios);
        b.int("season", show.season);
        b.int("episode", show.episode);
        b.records("uniqueid", &show.unique_ids, write_unique_id);
        b.texts("genre", &show.genres);
        b.records("actor", &show.actors, write_person);
    });
}

fn write_music(b: &mut NfoXmlBuilder, name: &str, music: &Music) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &music.title);
        b.text("artist", &music.artist);
        b.text("albumartist", &music.album_artist);
        b.text("album", &music.album);
        b.int("year", music.year);
        b.flag("compilation", music.compilation);
        b.text("label", &music.label);
        b.text("type", &music.r#type);
        b.texts("genre", &music.genres);
        b.records("track", &music.tracks, write_track);
    });
}

fn write_audiobook(b: &mut NfoXmlBuilder, name: &str, book: &AudioBook) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &book.title);
        b.text("author", &book.author);
        b.text("narrator", &book.narrator);
        b.text("publisher", &book.publisher);
        b.int("year", book.year);
        b.text("description", &book.description);
        b.int("runtime", book.runtime);
        b.text("language", &book.language);
        b.text("isbn", &book.isbn);
    });
}

fn write_podcast(b: &mut NfoXmlBuilder, name: &str, podcast: &Podcast) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &podcast.title);
        b.text("author", &podcast.author);
        b.text("description", &podcast.description);
        b.text("language", &podcast.language);
        b.text("pubDate", &podcast.pub_date);
        b.text("link", &podcast.link);
        b.text("copyright", &podcast.copyright);
        b.int("duration", podcast.duration);
        b.flag("explicit", podcast.explicit);
    });
}

fn write_anime(b: &mut NfoXmlBuilder, name: &str, anime: &Anime) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &anime.title);
        b.text("originaltitle", &anime.original_title);
        b.text("plot", &anime.plot);
        b.text("premiered", &anime.premiered);
        b.text("status", &anime.status);
        b.text("source", &anime.source);
        b.text("type", &anime.r#type);
    });
}

fn write_musicvideo(b: &mut NfoXmlBuilder, name: &str, video: &MusicVideo) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &video.title);
        b.text("artist", &video.artist);
        b.text("album", &video.album);
        b.int("year", video.year);
        b.int("runtime", video.runtime);
        b.text("releasedate", &video.release_date);
    });
}

fn write_video(b: &mut NfoXmlBuilder, name: &str, video: &Video) {
    b.element(name, AttrList::new(), |b| {
        b.text("title", &video.title);
        b.text("description", &video.description);
        b.int("runtime", video.runtime);
        b.text("date", &video.date);
    });
}

// ============================================================================
// SUB-RECORDS
// ============================================================================

fn write_rating(b: &mut NfoXmlBuilder, name: &str, rating: &Rating) {
    let attrs = AttrList::new()
        .text("name", &rating.name)
        .int("max", rating.max)
        .flag("default", rating.default);
    b.element(name, attrs, |b| {
        b.float("value", rating.value);
        b.int("votes", rating.votes);
    });
}

fn write_media_file(b: &mut NfoXmlBuilder, name: &str, file: &MediaFile) {
    let attrs = AttrList::new()
        .text("type", &file.r#type)
        .int("width", file.width)
        .int("height", file.height)
        .text("season", &file.season)
        .text("preview", &file.preview);
    b.leaf(name, attrs, &file.url);
}

fn write_content_rating(b: &mut NfoXmlBuilder, name: &str, rating: &ContentRating) {
    let attrs = AttrList::new()
        .text("country", &rating.country)
        .text("board", &rating.board);
    b.element(name, attrs, |b| {
        b.text("rating", &rating.rating);
        b.text("image", &rating.image);
    });
}

fn write_unique_id(b: &mut NfoXmlBuilder, name: &str, id: &UniqueId) {
    let attrs = AttrList::new()
        .text("type", &id.r#type)
        .flag("default", id.default);
    b.leaf(name, attrs, &id.value);
}

fn write_person(b: &mut NfoXmlBuilder, name: &str, person: &Person) {
    b.element(name, AttrList::new(), |b| {
        b.text("name", &person.name);
        b.text("role", &person.role);
        b.int("order", person.order);
        b.text("thumb", &person.thumb);
        b.text("bio", &person.bio);
        b.text("url", &person.url);
        b.text("birthdate", &person.birthdate);
        b.text("birthplace", &person.birthplace);
        b.text("deathdate", &person.deathdate);
        b.text("deathplace", &person.deathplace);
    });
}

fn write_track(b: &mut NfoXmlBuilder, name: &str, track: &Track) {
    b.element(name, AttrList::new(), |b| {
        b.int("position", track.position);
        b.text("title", &track.title);
        b.int("duration", track.duration);
        b.text("artist", &track.artist);
    });
}

fn write_library(b: &mut NfoXmlBuilder, library: &LibraryMetadata) {
    let attrs = AttrList::new().text("type", &library.r#type);
    b.element("library", attrs, |b| {
        for (key, value) in library.iter() {
            if is_valid_element_name(key) {
                b.leaf(key, AttrList::new(), value);
            } else {
                log::warn!("skipping library property {:?}: not a valid element name", key);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("a<b & \"c\"", false), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_value("one\r\ntwo\tthree", false), "one&#13;\ntwo\tthree");
        assert_eq!(escape_value("one\r\ntwo\tthree", true), "one&#13;&#10;two&#9;three");
        assert_eq!(escape_value("A\u{1}B\u{FFFF}", false), "AB");
        assert!(!is_xml_char('\u{0}'));
        assert!(is_xml_char('\u{1F600}'));
    }

    #[test]
    fn test_empty_element_collapses() {
        let mut b = NfoXmlBuilder::new(2);
        b.element("actor", AttrList::new(), |b| b.text("name", ""));
        assert_eq!(b.finalize(), "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<actor/>\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut b = NfoXmlBuilder::new(2);
        b.element("movie", AttrList::new(), |b| {
            b.text("title", "Heat");
            b.int("year", 1995);
        });
        let xml = b.finalize();
        assert!(xml.contains("<movie>\n  <title>Heat</title>\n  <year>1995</year>\n</movie>\n"));
    }

    #[test]
    fn test_attr_list_skips_defaults() {
        let mut b = NfoXmlBuilder::new(0);
        let attrs = AttrList::new()
            .text("name", "imdb")
            .int("max", 0)
            .flag("default", false);
        b.leaf("rating", attrs, "");
        assert!(b.finalize().contains("<rating name=\"imdb\"/>"));
    }

    #[test]
    fn test_text_and_attribute_escaping() {
        let mut b = NfoXmlBuilder::new(0);
        b.leaf("uniqueid", AttrList::new().text("type", "a\"b"), "Tom & <Jerry>");
        let xml = b.finalize();
        assert!(xml.contains("type=\"a&quot;b\""));
        assert!(xml.contains("Tom &amp; &lt;Jerry&gt;"));
    }
}

//! Soft-invariant checks
//!
//! Nothing here rejects a record. Issues are returned (and logged) so a
//! caller can decide whether to warn, repair or ignore.

use serde::{Deserialize, Serialize};

use super::nfo_xml::is_valid_element_name;
use crate::models::{MediaKind, NfoRoot, Rating, UniqueId};

/// A soft-invariant violation found in a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// More than one rating is flagged `default`
    MultipleDefaultRatings { media: String, count: usize },

    /// More than one unique ID is flagged `default`
    MultipleDefaultUniqueIds { media: String, count: usize },

    /// `media` is present but holds no media kind
    EmptyMedia,

    /// Library property key cannot be written as an XML element
    InvalidLibraryKey { library: String, key: String },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MultipleDefaultRatings { media, count } => {
                write!(f, "{} has {} ratings marked default", media, count)
            }
            ValidationIssue::MultipleDefaultUniqueIds { media, count } => {
                write!(f, "{} has {} unique IDs marked default", media, count)
            }
            ValidationIssue::EmptyMedia => write!(f, "media element has no media kind"),
            ValidationIssue::InvalidLibraryKey { library, key } => {
                write!(f, "library {:?} has invalid property key {:?}", library, key)
            }
        }
    }
}

/// Check the soft invariants of a record
pub fn validate(root: &NfoRoot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(media) = &root.media {
        match &media.kind {
            Some(kind) => check_defaults(kind, &mut issues),
            None => issues.push(ValidationIssue::EmptyMedia),
        }
    }

    for library in &root.library {
        for (key, _) in library.iter() {
            if !is_valid_element_name(key) {
                issues.push(ValidationIssue::InvalidLibraryKey {
                    library: library.r#type.clone(),
                    key: key.to_string(),
                });
            }
        }
    }

    for issue in &issues {
        log::warn!("NFO validation: {}", issue);
    }

    issues
}

fn check_defaults(kind: &MediaKind, issues: &mut Vec<ValidationIssue>) {
    let (ratings, unique_ids): (&[Rating], &[UniqueId]) = match kind {
        MediaKind::Movie(movie) => (movie.ratings.as_slice(), movie.unique_ids.as_slice()),
        MediaKind::TvShow(show) => (show.ratings.as_slice(), show.unique_ids.as_slice()),
        _ => return,
    };
    let media = kind.element_name().to_string();

    let count = ratings.iter().filter(|r| r.default).count();
    if count > 1 {
        issues.push(ValidationIssue::MultipleDefaultRatings {
            media: media.clone(),
            count,
        });
    }

    let count = unique_ids.iter().filter(|u| u.default).count();
    if count > 1 {
        issues.push(ValidationIssue::MultipleDefaultUniqueIds { media, count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn default_rating(name: &str) -> Rating {
        Rating {
            default: true,
            ..Rating::new(name, 7.0, 10)
        }
    }

    #[test]
    fn test_clean_record_has_no_issues() {
        let root = NfoRoot::with_media(Movie {
            ratings: vec![default_rating("imdb"), Rating::new("tmdb", 7.5, 10)],
            ..Default::default()
        });
        assert!(validate(&root).is_empty());
    }

    #[test]
    fn test_multiple_defaults_reported() {
        let mut imdb = UniqueId::new("imdb", "tt1");
        imdb.default = true;
        let mut tmdb = UniqueId::new("tmdb", "1");
        tmdb.default = true;

        let root = NfoRoot::with_media(TvShow {
            ratings: vec![default_rating("imdb"), default_rating("tvdb"), default_rating("tmdb")],
            unique_ids: vec![imdb, tmdb],
            ..Default::default()
        });

        let issues = validate(&root);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MultipleDefaultRatings {
                    media: "tvshow".to_string(),
                    count: 3
                },
                ValidationIssue::MultipleDefaultUniqueIds {
                    media: "tvshow".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_empty_media_and_bad_keys() {
        let mut lib = LibraryMetadata::new("custom");
        lib.insert("ok", "1");
        lib.insert("not ok", "2");
        let root = NfoRoot {
            media: Some(Media::default()),
            library: vec![lib],
        };

        let issues = validate(&root);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], ValidationIssue::EmptyMedia);
        assert_eq!(
            issues[1].to_string(),
            "library \"custom\" has invalid property key \"not ok\""
        );
    }
}

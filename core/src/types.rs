//! Domain DTOs for the character API.
//!
//! # Design
//! These types mirror the API's JSON schema but are defined independently from
//! the mock-server crate; integration tests catch schema drift. Records are
//! passed through as received: apart from `id`, a field that is missing or
//! `null` takes its empty value and unknown fields are ignored, so one sparse
//! record never fails the page it arrived in.

use serde::{Deserialize, Deserializer, Serialize};

/// Marker in a thumbnail path that means the API has no image.
pub const IMAGE_NOT_AVAILABLE: &str = "image_not_available";

/// Treat `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single character returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: Thumbnail,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comics: ResourceList<Summary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: ResourceList<Summary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stories: ResourceList<StorySummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: ResourceList<Summary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<CharacterUrl>,
}

/// Image reference split into path and extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thumbnail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extension: String,
}

impl Thumbnail {
    pub fn is_available(&self) -> bool {
        !self.path.is_empty() && !self.path.contains(IMAGE_NOT_AVAILABLE)
    }

    /// Full-size image URL, `None` for the API's placeholder image.
    pub fn image_url(&self) -> Option<String> {
        self.is_available()
            .then(|| format!("{}.{}", self.path, self.extension))
    }

    /// URL of a sized rendition such as `standard_xlarge` or `portrait_uncanny`.
    pub fn variant_url(&self, variant: &str) -> Option<String> {
        self.is_available()
            .then(|| format!("{}/{variant}.{}", self.path, self.extension))
    }
}

/// A count plus a server-truncated sample of related items.
///
/// `available` routinely exceeds `items.len()`; that is truncation, not an
/// inconsistency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResourceList<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> ResourceList<T> {
    pub fn is_truncated(&self) -> bool {
        self.available as usize > self.items.len()
    }
}

/// Comic, series or event reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "resourceURI", default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
}

/// Story reference; stories additionally carry a free-form type tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "resourceURI", default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
}

/// External link attached to a character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterUrl {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl CharacterUrl {
    /// Display label for the link. `kind` is an open set; unknown tags get
    /// their first character upper-cased.
    pub fn label(&self) -> String {
        match self.kind.as_str() {
            "detail" => "Details".to_string(),
            "wiki" => "Wiki".to_string(),
            "comiclink" => "Comics".to_string(),
            other => {
                let mut chars = other.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Outer wrapper around every API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: serde_json::Value,
    #[serde(default)]
    pub status: String,
    pub data: DataContainer<T>,
}

/// Pagination metadata plus the page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataContainer<T> {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    pub results: Vec<T>,
}

/// One page of `listCharacters` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub results: Vec<Character>,
    /// Number of characters matching the filter, across all pages.
    pub total: u32,
    pub offset: u32,
    pub limit: u32,
    pub count: u32,
}

impl From<DataContainer<Character>> for CharacterPage {
    fn from(data: DataContainer<Character>) -> Self {
        Self {
            results: data.results,
            total: data.total,
            offset: data.offset,
            limit: data.limit,
            count: data.count,
        }
    }
}

/// Outcome of a successful lookup by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterLookup {
    Found(Character),
    /// The API answered, but knows no character with that id.
    NotFound,
}

impl CharacterLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, CharacterLookup::Found(_))
    }

    pub fn into_option(self) -> Option<Character> {
        match self {
            CharacterLookup::Found(character) => Some(character),
            CharacterLookup::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_character_parses_with_defaults() {
        let character: Character =
            serde_json::from_str(r#"{"id":1011334,"name":"3-D Man","modified":"2014-04-29"}"#).unwrap();
        assert_eq!(character.id, 1011334);
        assert!(character.description.is_empty());
        assert_eq!(character.comics.available, 0);
        assert!(character.urls.is_empty());
        assert_eq!(character.thumbnail.image_url(), None);
    }

    #[test]
    fn null_fields_take_empty_values() {
        let character: Character = serde_json::from_str(
            r#"{"id":7,"name":null,"description":null,"thumbnail":null,"comics":null,
                "series":{"available":null,"items":null},"stories":{"items":[{"name":null,"type":null}]},
                "events":null,"urls":[{"type":"wiki","url":null}]}"#,
        )
        .unwrap();
        assert_eq!(character.id, 7);
        assert!(character.name.is_empty());
        assert!(character.description.is_empty());
        assert_eq!(character.thumbnail, Thumbnail::default());
        assert_eq!(character.comics, ResourceList::default());
        assert_eq!(character.series.available, 0);
        assert_eq!(character.stories.items[0], StorySummary::default());
        assert_eq!(character.urls[0].label(), "Wiki");
        assert!(character.urls[0].url.is_empty());
    }

    #[test]
    fn missing_id_is_still_rejected() {
        assert!(serde_json::from_str::<Character>(r#"{"name":"Nobody"}"#).is_err());
    }

    #[test]
    fn image_url_joins_path_and_extension() {
        let thumb = Thumbnail {
            path: "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55".to_string(),
            extension: "jpg".to_string(),
        };
        assert_eq!(
            thumb.image_url().as_deref(),
            Some("http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55.jpg")
        );
        assert_eq!(
            thumb.variant_url("standard_xlarge").as_deref(),
            Some("http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55/standard_xlarge.jpg")
        );
    }

    #[test]
    fn placeholder_image_is_not_available() {
        let thumb = Thumbnail {
            path: "http://i.annihil.us/u/prod/marvel/i/mg/b/40/image_not_available".to_string(),
            extension: "jpg".to_string(),
        };
        assert!(!thumb.is_available());
        assert_eq!(thumb.image_url(), None);
        assert_eq!(thumb.variant_url("portrait_uncanny"), None);
    }

    #[test]
    fn truncated_resource_list_is_not_an_error() {
        let list: ResourceList<Summary> =
            serde_json::from_str(r#"{"available":2607,"items":[{"name":"Iron Man (1968) #1"}]}"#).unwrap();
        assert!(list.is_truncated());
        assert_eq!(list.items[0].resource_uri, None);
    }

    #[test]
    fn story_type_is_read_from_type_field() {
        let story: StorySummary = serde_json::from_str(r#"{"name":"Cover #3880","type":"cover"}"#).unwrap();
        assert_eq!(story.kind, "cover");
    }

    #[test]
    fn known_url_types_have_fixed_labels() {
        let link = |kind: &str| CharacterUrl {
            kind: kind.to_string(),
            url: "http://marvel.com".to_string(),
        };
        assert_eq!(link("detail").label(), "Details");
        assert_eq!(link("wiki").label(), "Wiki");
        assert_eq!(link("comiclink").label(), "Comics");
    }

    #[test]
    fn unknown_url_type_is_capitalized() {
        let link = CharacterUrl {
            kind: "purchase".to_string(),
            url: "http://marvel.com".to_string(),
        };
        assert_eq!(link.label(), "Purchase");

        let empty = CharacterUrl {
            kind: String::new(),
            url: "http://marvel.com".to_string(),
        };
        assert_eq!(empty.label(), "");
    }

    #[test]
    fn lookup_into_option() {
        assert_eq!(CharacterLookup::NotFound.into_option(), None);
        assert!(!CharacterLookup::NotFound.is_found());
    }
}

//! Response shapes shared across endpoint groups.
//!
//! Every field the provider may omit or null out is an `Option` with
//! `#[serde(default)]`; the pipeline's null-normalization pass guarantees
//! both spellings decode identically.

use std::collections::HashMap;

use serde::Deserialize;

/// One page of a paginated listing.
///
/// The explicit bound keeps the derive from also demanding `T: Default`
/// for the defaulted `results` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    /// 1-based page number.
    pub page: u32,
    /// Results on this page.
    #[serde(default)]
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results across all pages.
    pub total_results: u32,
}

/// A movie or TV genre.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre id.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// Response of the genre list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenresResponse {
    /// Official genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// The collection a movie belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Collection {
    /// Collection id.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop path, when available.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// A production company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionCompany {
    /// Company id.
    pub id: u64,
    /// Logo path, when available.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Company name.
    pub name: String,
    /// ISO 3166-1 code of the company's home country.
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// A production country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// A spoken language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpokenLanguage {
    /// English name of the language.
    pub english_name: String,
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// Native name of the language.
    pub name: String,
}

/// A keyword attached to a movie or TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keyword {
    /// Keyword id.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// One image (backdrop, logo, poster, profile or still).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    /// Width / height ratio.
    pub aspect_ratio: f64,
    /// Image height in pixels.
    pub height: u32,
    /// Language of the image, when language-specific.
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Relative path; feed it to the image URL builder.
    pub file_path: String,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,
    /// Image width in pixels.
    pub width: u32,
}

/// Image sets of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageCollection {
    /// Id of the owning movie/series (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Backdrop images.
    #[serde(default)]
    pub backdrops: Vec<Image>,
    /// Logo images.
    #[serde(default)]
    pub logos: Vec<Image>,
    /// Poster images.
    #[serde(default)]
    pub posters: Vec<Image>,
}

/// A trailer, teaser, clip or featurette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Language of the video.
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Country of the video.
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// Video title.
    pub name: String,
    /// Site-specific key (e.g. the YouTube video id).
    pub key: String,
    /// Hosting site (e.g. `YouTube`).
    pub site: String,
    /// Vertical resolution (e.g. 1080).
    #[serde(default)]
    pub size: Option<u32>,
    /// Video kind (`Trailer`, `Teaser`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the video is official.
    #[serde(default)]
    pub official: Option<bool>,
    /// Publication timestamp.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Video id.
    pub id: String,
}

/// Video list of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoCollection {
    /// Id of the owning movie/series (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Videos.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A cast credit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cast {
    /// Adult flag of the person.
    #[serde(default)]
    pub adult: bool,
    /// Gender (1 = female, 2 = male), when specified.
    #[serde(default)]
    pub gender: Option<u8>,
    /// Person id.
    pub id: u64,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Person name.
    pub name: String,
    /// Original (non-localized) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Profile image path, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Cast credit id (movie credits only).
    #[serde(default)]
    pub cast_id: Option<u64>,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Credit id.
    pub credit_id: String,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
}

/// A crew credit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Crew {
    /// Adult flag of the person.
    #[serde(default)]
    pub adult: bool,
    /// Gender (1 = female, 2 = male), when specified.
    #[serde(default)]
    pub gender: Option<u8>,
    /// Person id.
    pub id: u64,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Person name.
    pub name: String,
    /// Original (non-localized) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Profile image path, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Credit id.
    pub credit_id: String,
    /// Department of this credit.
    #[serde(default)]
    pub department: Option<String>,
    /// Job of this credit.
    #[serde(default)]
    pub job: Option<String>,
}

/// Cast and crew of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credits {
    /// Id of the owning movie/series (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<Cast>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<Crew>,
}

/// External service ids of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ExternalIds {
    /// Id of the owning movie/series (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// IMDb id.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Wikidata id.
    #[serde(default)]
    pub wikidata_id: Option<String>,
    /// TheTVDB id (TV only).
    #[serde(default)]
    pub tvdb_id: Option<u64>,
    /// Facebook id.
    #[serde(default)]
    pub facebook_id: Option<String>,
    /// Instagram id.
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter id.
    #[serde(default)]
    pub twitter_id: Option<String>,
}

/// A localized alternative title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlternativeTitle {
    /// ISO 3166-1 code of the title's country.
    pub iso_3166_1: String,
    /// The alternative title.
    pub title: String,
    /// Title kind (e.g. `working title`), when specified.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Translated fields of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct TranslationData {
    /// Translated homepage.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Translated overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Runtime in the translation's locale.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Translated tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Translated title (movies).
    #[serde(default)]
    pub title: Option<String>,
    /// Translated name (TV).
    #[serde(default)]
    pub name: Option<String>,
}

/// One translation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// Native name of the language.
    pub name: String,
    /// English name of the language.
    pub english_name: String,
    /// Translated fields.
    #[serde(default)]
    pub data: TranslationData,
}

/// Translation list of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translations {
    /// Id of the owning movie/series (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Translations.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Author block of a user review.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AuthorDetails {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account username.
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar path, when set.
    #[serde(default)]
    pub avatar_path: Option<String>,
    /// Score the author gave (0-10).
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A user review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    /// Author display name.
    pub author: String,
    /// Author details.
    #[serde(default)]
    pub author_details: Option<AuthorDetails>,
    /// Review body.
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Review id.
    pub id: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Canonical URL of the review.
    #[serde(default)]
    pub url: Option<String>,
}

/// One streaming, rental or purchase provider (data by JustWatch).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchProvider {
    /// Logo path, when available.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Provider id.
    pub provider_id: u64,
    /// Provider name.
    pub provider_name: String,
    /// Display ordering hint.
    #[serde(default)]
    pub display_priority: Option<u32>,
}

/// Providers available in one country, grouped by monetization.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct CountryWatchProviders {
    /// JustWatch deep link for this title and country.
    #[serde(default)]
    pub link: Option<String>,
    /// Subscription providers.
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    /// Rental providers.
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    /// Purchase providers.
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
    /// Free (no-ads) providers.
    #[serde(default)]
    pub free: Vec<WatchProvider>,
    /// Ad-supported providers.
    #[serde(default)]
    pub ads: Vec<WatchProvider>,
}

/// Watch providers of a movie or TV series, keyed by ISO 3166-1 code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchProviders {
    /// Id of the owning movie/series.
    #[serde(default)]
    pub id: Option<u64>,
    /// Per-country provider groups.
    #[serde(default)]
    pub results: HashMap<String, CountryWatchProviders>,
}

/// Change history of a movie or TV series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Changes {
    /// Changes grouped by the edited key.
    #[serde(default)]
    pub changes: Vec<ChangeGroup>,
}

/// All edits of one key within the requested window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeGroup {
    /// Edited key (e.g. `overview`, `images`).
    pub key: String,
    /// Individual edits.
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

/// One edit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeItem {
    /// Edit id.
    pub id: String,
    /// Action performed (`added`, `updated`, `deleted`).
    #[serde(default)]
    pub action: Option<String>,
    /// Edit timestamp.
    #[serde(default)]
    pub time: Option<String>,
    /// Language the edit applies to.
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Country the edit applies to.
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// New value; its shape depends on the edited key.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Previous value, present on updates.
    #[serde(default)]
    pub original_value: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::{MovieResultItem, TvResultItem};

    #[test]
    fn test_page_decodes_for_item_types_without_default() {
        // Arrange: neither result-item type implements Default; the page
        // container must decode regardless.
        let json = r#"{
            "page": 1,
            "results": [{"id": 550, "title": "Fight Club"}],
            "total_pages": 1,
            "total_results": 1
        }"#;

        // Act
        let page: PaginatedResponse<MovieResultItem> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.results[0].id, 550);
        assert_eq!(page.results[0].title, "Fight Club");
    }

    #[test]
    fn test_page_missing_results_key_decodes_as_empty() {
        // Arrange
        let json = r#"{"page": 1, "total_pages": 0, "total_results": 0}"#;

        // Act
        let page: PaginatedResponse<TvResultItem> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(page.results.is_empty());
    }
}

//! Movie response shapes.

use serde::Deserialize;

use super::common::{
    AlternativeTitle, Collection, Credits, ExternalIds, Genre, ImageCollection, Keyword,
    PaginatedResponse, ProductionCompany, ProductionCountry, SpokenLanguage, Translations,
    VideoCollection,
};

/// A movie as it appears in search results and listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieResultItem {
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Backdrop path, when available.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Genre ids.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Movie id.
    pub id: u64,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Original (non-localized) title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date (`YYYY-MM-DD`), when known.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Localized title.
    pub title: String,
    /// Whether this entry is a video release.
    #[serde(default)]
    pub video: bool,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,
}

/// Top-level movie details.
///
/// The trailing `Option` fields are only populated when the matching
/// [`MovieAppend`](crate::endpoints::MovieAppend) was requested via
/// `append_to_response`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetails {
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Backdrop path, when available.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Collection the movie belongs to, if any.
    #[serde(default)]
    pub belongs_to_collection: Option<Collection>,
    /// Budget in US dollars (0 when unknown).
    #[serde(default)]
    pub budget: u64,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Official homepage, when set.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Movie id.
    pub id: u64,
    /// IMDb id, when linked.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Origin country codes.
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Original (non-localized) title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Release date (`YYYY-MM-DD`), when known.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Revenue in US dollars (0 when unknown).
    #[serde(default)]
    pub revenue: u64,
    /// Runtime in minutes; some movies have none set.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Release status (`Released`, `Post Production`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Tagline, when set.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Localized title.
    pub title: String,
    /// Whether this entry is a video release.
    #[serde(default)]
    pub video: bool,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,

    /// Appended alternative titles.
    #[serde(default)]
    pub alternative_titles: Option<MovieAlternativeTitles>,
    /// Appended credits.
    #[serde(default)]
    pub credits: Option<Credits>,
    /// Appended external ids.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    /// Appended images.
    #[serde(default)]
    pub images: Option<ImageCollection>,
    /// Appended keywords.
    #[serde(default)]
    pub keywords: Option<MovieKeywords>,
    /// Appended recommendations page.
    #[serde(default)]
    pub recommendations: Option<PaginatedResponse<MovieResultItem>>,
    /// Appended release dates.
    #[serde(default)]
    pub release_dates: Option<MovieReleaseDates>,
    /// Appended similar-movies page.
    #[serde(default)]
    pub similar: Option<PaginatedResponse<MovieResultItem>>,
    /// Appended translations.
    #[serde(default)]
    pub translations: Option<Translations>,
    /// Appended videos.
    #[serde(default)]
    pub videos: Option<VideoCollection>,
}

/// Alternative titles of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieAlternativeTitles {
    /// Movie id (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Alternative titles.
    #[serde(default)]
    pub titles: Vec<AlternativeTitle>,
}

/// Keywords of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieKeywords {
    /// Movie id (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Keywords.
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// Release dates and certifications, grouped by country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieReleaseDates {
    /// Movie id (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Per-country groups.
    #[serde(default)]
    pub results: Vec<ReleaseDatesByCountry>,
}

/// Release dates of one country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseDatesByCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Releases in this country.
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

/// One release of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseDate {
    /// Age certification, when assigned.
    #[serde(default)]
    pub certification: Option<String>,
    /// Language of this release, when specific.
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Free-form note (e.g. festival name).
    #[serde(default)]
    pub note: Option<String>,
    /// Release timestamp.
    pub release_date: String,
    /// Release kind (1 = premiere ... 6 = TV).
    #[serde(rename = "type")]
    pub kind: u32,
}

//! TV series response shapes.

use serde::Deserialize;

use super::common::{
    Credits, ExternalIds, Genre, ImageCollection, Keyword, PaginatedResponse, ProductionCompany,
    ProductionCountry, SpokenLanguage, VideoCollection,
};

/// A TV series as it appears in search results and listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvResultItem {
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Backdrop path, when available.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// First air date (`YYYY-MM-DD`), when known.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Genre ids.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Series id.
    pub id: u64,
    /// Localized series name.
    pub name: String,
    /// Origin country codes.
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Original (non-localized) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,
}

/// A series creator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedBy {
    /// Person id.
    pub id: u64,
    /// Credit id.
    pub credit_id: String,
    /// Person name.
    pub name: String,
    /// Original (non-localized) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Gender (1 = female, 2 = male), when specified.
    #[serde(default)]
    pub gender: Option<u8>,
    /// Profile image path, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A broadcasting network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    /// Network id.
    pub id: u64,
    /// Logo path, when available.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Network name.
    pub name: String,
    /// ISO 3166-1 code of the network's home country.
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// A season as listed inside series details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Season {
    /// First air date of the season, when known.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Number of episodes.
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// Season id.
    pub id: u64,
    /// Season name.
    pub name: String,
    /// Season overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// An episode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Episode {
    /// Air date, when known.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode kind (`standard`, `finale`, ...), when classified.
    #[serde(default)]
    pub episode_type: Option<String>,
    /// Episode id.
    pub id: u64,
    /// Episode name.
    #[serde(default)]
    pub name: Option<String>,
    /// Episode overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Production code.
    #[serde(default)]
    pub production_code: Option<String>,
    /// Runtime in minutes, when known.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Season number.
    pub season_number: u32,
    /// Id of the owning series.
    #[serde(default)]
    pub show_id: Option<u64>,
    /// Still image path, when available.
    #[serde(default)]
    pub still_path: Option<String>,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,
}

/// Keywords of a TV series (the provider keys them as `results`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TvKeywords {
    /// Series id (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Keywords.
    #[serde(default)]
    pub results: Vec<Keyword>,
}

/// Top-level TV series details.
///
/// The trailing `Option` fields are only populated when the matching
/// [`TvAppend`](crate::endpoints::TvAppend) was requested via
/// `append_to_response`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvDetails {
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Backdrop path, when available.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Series creators.
    #[serde(default)]
    pub created_by: Vec<CreatedBy>,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// First air date, when known.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Official homepage, when set.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Series id.
    pub id: u64,
    /// Whether the series is in production.
    #[serde(default)]
    pub in_production: bool,
    /// Language codes used in the series.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Most recent air date, when known.
    #[serde(default)]
    pub last_air_date: Option<String>,
    /// Most recently aired episode.
    #[serde(default)]
    pub last_episode_to_air: Option<Episode>,
    /// Localized series name.
    pub name: String,
    /// Next episode to air, when scheduled.
    #[serde(default)]
    pub next_episode_to_air: Option<Episode>,
    /// Broadcasting networks.
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Origin country codes.
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Original (non-localized) name.
    #[serde(default)]
    pub original_name: Option<String>,
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
    /// Season list.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Series status (`Returning Series`, `Ended`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Tagline, when set.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Series kind (`Scripted`, `Documentary`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,

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
    pub keywords: Option<TvKeywords>,
    /// Appended recommendations page.
    #[serde(default)]
    pub recommendations: Option<PaginatedResponse<TvResultItem>>,
    /// Appended similar-series page.
    #[serde(default)]
    pub similar: Option<PaginatedResponse<TvResultItem>>,
    /// Appended videos.
    #[serde(default)]
    pub videos: Option<VideoCollection>,
}

/// One character a person played across a series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CastRole {
    /// Credit id.
    pub credit_id: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Episodes with this role.
    #[serde(default)]
    pub episode_count: Option<u32>,
}

/// One job a person held across a series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrewJob {
    /// Credit id.
    pub credit_id: String,
    /// Job title.
    #[serde(default)]
    pub job: Option<String>,
    /// Episodes with this job.
    #[serde(default)]
    pub episode_count: Option<u32>,
}

/// A cast member aggregated across all episodes of a series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregateCast {
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
    /// Characters played, one entry per role.
    #[serde(default)]
    pub roles: Vec<CastRole>,
    /// Episodes the person appears in, across all roles.
    #[serde(default)]
    pub total_episode_count: Option<u32>,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
}

/// A crew member aggregated across all episodes of a series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregateCrew {
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
    /// Jobs held, one entry per job.
    #[serde(default)]
    pub jobs: Vec<CrewJob>,
    /// Department of this credit.
    #[serde(default)]
    pub department: Option<String>,
    /// Episodes the person worked on, across all jobs.
    #[serde(default)]
    pub total_episode_count: Option<u32>,
}

/// Cast and crew aggregated across all episodes and seasons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregateCredits {
    /// Series id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Aggregated cast credits.
    #[serde(default)]
    pub cast: Vec<AggregateCast>,
    /// Aggregated crew credits.
    #[serde(default)]
    pub crew: Vec<AggregateCrew>,
}

/// Age rating of one country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentRating {
    /// Rating descriptors (violence, language, ...), when provided.
    #[serde(default)]
    pub descriptors: Vec<String>,
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// The rating itself (e.g. `TV-MA`).
    pub rating: String,
}

/// Content ratings of a TV series, by country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentRatings {
    /// Series id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Per-country ratings.
    #[serde(default)]
    pub results: Vec<ContentRating>,
}

/// An alternative episode grouping (DVD order, absolute order, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EpisodeGroupSummary {
    /// Group description.
    #[serde(default)]
    pub description: Option<String>,
    /// Episodes in the group.
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// Sub-groups in the group.
    #[serde(default)]
    pub group_count: Option<u32>,
    /// Group id.
    pub id: String,
    /// Group name.
    pub name: String,
    /// Network the grouping belongs to, if any.
    #[serde(default)]
    pub network: Option<Network>,
    /// Group kind (1 = original air date ... 7 = production).
    #[serde(rename = "type")]
    pub kind: u32,
}

/// Episode groups of a TV series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EpisodeGroups {
    /// Series id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Available groupings.
    #[serde(default)]
    pub results: Vec<EpisodeGroupSummary>,
}

/// A season with its full episode list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvSeason {
    /// Internal season object id.
    #[serde(default, rename = "_id")]
    pub object_id: Option<String>,
    /// First air date of the season, when known.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Episodes of the season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// Season id.
    pub id: u64,
    /// Season name.
    pub name: String,
    /// Season overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster path, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Average vote.
    #[serde(default)]
    pub vote_average: Option<f64>,
}

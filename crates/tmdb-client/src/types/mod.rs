//! Typed response shapes for all endpoint groups.
//!
//! Types are compile-time declarations of the provider's JSON; decoding
//! them with serde is the only validation performed at the boundary.

mod common;
mod configuration;
mod movies;
mod tv;

pub use common::{
    AlternativeTitle, AuthorDetails, Cast, ChangeGroup, ChangeItem, Changes, Collection,
    CountryWatchProviders, Credits, Crew, ExternalIds, Genre, GenresResponse, Image,
    ImageCollection, Keyword, PaginatedResponse, ProductionCompany, ProductionCountry, Review,
    SpokenLanguage, Translation, TranslationData, Translations, Video, VideoCollection,
    WatchProvider, WatchProviders,
};
pub use configuration::{ApiConfiguration, Country, ImageConfiguration, Job, LanguageItem, Timezone};
pub use movies::{
    MovieAlternativeTitles, MovieDetails, MovieKeywords, MovieReleaseDates, MovieResultItem,
    ReleaseDate, ReleaseDatesByCountry,
};
pub use tv::{
    AggregateCast, AggregateCredits, AggregateCrew, CastRole, ContentRating, ContentRatings,
    CreatedBy, CrewJob, Episode, EpisodeGroupSummary, EpisodeGroups, Network, Season, TvDetails,
    TvKeywords, TvResultItem, TvSeason,
};

//! Typed client library for the TMDB v3 API.
//!
//! All endpoints are read-only HTTPS GETs authenticated with a bearer
//! access token. Construct a [`Tmdb`] once (with optional client-wide
//! defaults such as language and region), then call endpoint groups
//! through its accessors:
//!
//! ```no_run
//! use tmdb_client::{SearchMovieParams, Tmdb, TmdbOptions};
//!
//! # async fn run() -> Result<(), tmdb_client::TmdbError> {
//! let tmdb = Tmdb::builder()
//!     .access_token("<token>")
//!     .options(TmdbOptions::new().language("it-IT").region("IT"))
//!     .build()?;
//!
//! let page = tmdb.search().movie(SearchMovieParams::new("Fight Club")).await?;
//! println!("{} results", page.total_results);
//! # Ok(())
//! # }
//! ```
//!
//! Every fallible call resolves to either the endpoint's typed payload or
//! a [`TmdbError`]; there is no third outcome. The library performs no
//! retries, caching or rate limiting.

mod client;
pub mod endpoints;
mod error;
pub mod images;
mod options;
mod tmdb;
pub mod types;

pub use endpoints::{
    MovieAppend, MovieDetailsParams, MovieListParams, SearchMovieParams, SearchTvParams, TvAppend,
    TvDetailsParams, TvListParams,
};
pub use error::{
    CatalogEntry, LIBRARY_ERROR_CODE, NO_HTTP_STATUS, Result, TmdbError, TmdbErrorResponse,
    catalog_entry,
};
pub use images::{BackdropSize, ImageUrls, LogoSize, PosterSize, ProfileSize, StillSize};
pub use options::{ApplyDefaults, ImagesConfig, TmdbOptions};
pub use tmdb::{Tmdb, TmdbBuilder};

//! Endpoint façades.
//!
//! Each group is a thin, copyable borrow of the client: it merges the
//! client-wide defaults into the call parameters, builds the query and
//! performs exactly one pipeline call with a literal path.

mod configuration;
mod genres;
mod movie_lists;
mod movies;
mod search;
mod tv_series;
mod tv_series_lists;

pub use configuration::Configuration;
pub use genres::Genres;
pub use movie_lists::{MovieListParams, MovieLists};
pub use movies::{MovieAppend, MovieDetailsParams, Movies};
pub use search::{Search, SearchMovieParams, SearchTvParams};
pub use tv_series::{TvAppend, TvDetailsParams, TvSeries};
pub use tv_series_lists::{TvListParams, TvSeriesLists};

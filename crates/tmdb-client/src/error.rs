//! `TmdbError` - the single error surface of the library.

use serde::Deserialize;
use thiserror::Error;

/// Result alias with [`TmdbError`] as the default error type.
pub type Result<T, E = TmdbError> = std::result::Result<T, E>;

/// Sentinel TMDB status code for errors that did not originate from a
/// structured provider error body (transport failures, unparsable bodies,
/// decode failures, construction-time misuse).
pub const LIBRARY_ERROR_CODE: i32 = -1;

/// Sentinel HTTP status code used when no HTTP response was received.
pub const NO_HTTP_STATUS: u16 = 0;

/// Error returned by every fallible operation of this library.
///
/// Carries the provider's `status_message` and `status_code` when the API
/// answered with a structured error body, and falls back to
/// [`LIBRARY_ERROR_CODE`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("TMDB API error (HTTP {http_status_code}): code={tmdb_status_code}, message={message}")]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbError {
    /// Human-readable description. Provider `status_message` when
    /// available, otherwise the HTTP reason phrase or transport error.
    pub message: String,
    /// HTTP status code of the response, or [`NO_HTTP_STATUS`] when the
    /// request never completed.
    pub http_status_code: u16,
    /// Provider status code, or [`LIBRARY_ERROR_CODE`] when the error is
    /// library-originated.
    pub tmdb_status_code: i32,
}

impl TmdbError {
    /// Creates an error from a structured provider error body.
    #[must_use]
    pub const fn api(message: String, http_status_code: u16, tmdb_status_code: i32) -> Self {
        Self {
            message,
            http_status_code,
            tmdb_status_code,
        }
    }

    /// Creates a library-originated error tied to an HTTP status
    /// (unparsable error body, response decode failure).
    #[must_use]
    pub const fn http(message: String, http_status_code: u16) -> Self {
        Self {
            message,
            http_status_code,
            tmdb_status_code: LIBRARY_ERROR_CODE,
        }
    }

    /// Creates a library-originated error with no HTTP response at all
    /// (transport failure, construction-time misuse).
    #[must_use]
    pub const fn library(message: String) -> Self {
        Self {
            message,
            http_status_code: NO_HTTP_STATUS,
            tmdb_status_code: LIBRARY_ERROR_CODE,
        }
    }

    /// Whether this error carries a structured provider status code.
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        self.tmdb_status_code != LIBRARY_ERROR_CODE
    }
}

/// Structured error body returned by the TMDB API on failures.
#[derive(Debug, Deserialize)]
pub struct TmdbErrorResponse {
    /// Always `false` for error responses.
    #[serde(default)]
    pub success: bool,
    /// Provider status code.
    pub status_code: i32,
    /// Provider status message.
    pub status_message: String,
}

/// One entry of the documented TMDB error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical message for this provider code.
    pub message: &'static str,
    /// HTTP status the provider pairs with this code.
    pub http_status: u16,
}

/// Looks up the documented catalog entry for a TMDB status code.
///
/// Covers the provider's published codes 1-34. Useful for asserting on
/// expected failures, e.g. code 6 ("Invalid id") maps to HTTP 404.
///
/// Reference: <https://developer.themoviedb.org/docs/errors>
#[must_use]
pub const fn catalog_entry(tmdb_status_code: i32) -> Option<CatalogEntry> {
    let (message, http_status): (&'static str, u16) = match tmdb_status_code {
        1 => ("Success", 200),
        2 => ("Invalid service: this service does not exist.", 501),
        3 => (
            "Authentication failed: You do not have permissions to access the service.",
            401,
        ),
        4 => ("Invalid format: This service doesn't exist in that format.", 405),
        5 => ("Invalid parameters: Your request parameters are incorrect.", 422),
        6 => ("Invalid id: The pre-requisite id is invalid or not found.", 404),
        7 => ("Invalid API key: You must be granted a valid key.", 401),
        8 => ("Duplicate entry: The data you tried to submit already exists.", 403),
        9 => (
            "Service offline: This service is temporarily offline, try again later.",
            503,
        ),
        10 => (
            "Suspended API key: Access to your account has been suspended, contact TMDB.",
            401,
        ),
        11 => ("Internal error: Something went wrong, contact TMDB.", 500),
        12 => ("The item/record was updated successfully.", 201),
        13 => ("The item/record was deleted successfully.", 200),
        14 => ("Authentication failed.", 401),
        15 => ("Failed", 500),
        16 => ("Device denied.", 401),
        17 => ("Session denied.", 401),
        18 => ("Validation failed.", 400),
        19 => ("Invalid accept header.", 406),
        20 => ("Invalid date range: Should be a range no longer than 14 days.", 422),
        21 => ("Entry not found: The item you are trying to edit cannot be found.", 200),
        22 => (
            "Invalid page: Pages start at 1 and max at 500. They are expected to be an integer.",
            400,
        ),
        23 => ("Invalid date: Format needs to be YYYY-MM-DD.", 400),
        24 => ("Your request to the backend server timed out. Try again.", 504),
        25 => ("Your request count (#) is over the allowed limit of (40).", 429),
        26 => ("You must provide a username and password.", 400),
        27 => (
            "Too many append to response objects: The maximum number of remote calls is 20.",
            400,
        ),
        28 => (
            "Invalid timezone: Please consult the documentation for a valid timezone.",
            400,
        ),
        29 => ("You must provide a valid session_id.", 400),
        30 => ("Invalid username and/or password: You did not provide a valid login.", 401),
        31 => ("Account disabled: Your account is no longer active. Contact TMDB if this is an error.", 401),
        32 => ("Email not verified: Your email address has not been verified.", 401),
        33 => ("Invalid request token: The request token is either expired or invalid.", 401),
        34 => ("The resource you requested could not be found.", 404),
        _ => return None,
    };
    Some(CatalogEntry {
        message,
        http_status,
    })
}

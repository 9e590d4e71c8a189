//! Client-wide default options and the param-defaulting rule.

use crate::images::{BackdropSize, LogoSize, PosterSize, ProfileSize, StillSize};

/// Client-wide defaults applied to every request whose parameters leave
/// the matching field unset.
///
/// Immutable after client construction; shared read-only across all
/// in-flight requests, so no synchronization is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TmdbOptions {
    /// Default language (ISO 639-1 tag, e.g. `it-IT`).
    pub language: Option<String>,
    /// Default region (ISO 3166-1 code, e.g. `IT`). Affects release
    /// dates, certifications and region-filtered lists.
    pub region: Option<String>,
    /// Default timezone used by endpoints that compute "today"
    /// (e.g. TV airing today).
    pub timezone: Option<String>,
    /// Image URL building configuration.
    pub images: ImagesConfig,
}

impl TmdbOptions {
    /// Creates empty options (nothing defaulted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the default region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the default timezone.
    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the image configuration.
    #[must_use]
    pub fn images(mut self, images: ImagesConfig) -> Self {
        self.images = images;
        self
    }
}

/// Image URL configuration: secure-vs-insecure base and per-category
/// default sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagesConfig {
    /// Use the HTTPS image base URL (default: `true`).
    pub secure_base_url: bool,
    /// Default backdrop size.
    pub backdrop_size: Option<BackdropSize>,
    /// Default logo size.
    pub logo_size: Option<LogoSize>,
    /// Default poster size.
    pub poster_size: Option<PosterSize>,
    /// Default profile size.
    pub profile_size: Option<ProfileSize>,
    /// Default still size.
    pub still_size: Option<StillSize>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            secure_base_url: true,
            backdrop_size: None,
            logo_size: None,
            poster_size: None,
            profile_size: None,
            still_size: None,
        }
    }
}

impl ImagesConfig {
    /// Toggles the secure image base URL.
    #[must_use]
    pub const fn secure_base_url(mut self, secure: bool) -> Self {
        self.secure_base_url = secure;
        self
    }

    /// Sets the default backdrop size.
    #[must_use]
    pub const fn backdrop_size(mut self, size: BackdropSize) -> Self {
        self.backdrop_size = Some(size);
        self
    }

    /// Sets the default logo size.
    #[must_use]
    pub const fn logo_size(mut self, size: LogoSize) -> Self {
        self.logo_size = Some(size);
        self
    }

    /// Sets the default poster size.
    #[must_use]
    pub const fn poster_size(mut self, size: PosterSize) -> Self {
        self.poster_size = Some(size);
        self
    }

    /// Sets the default profile size.
    #[must_use]
    pub const fn profile_size(mut self, size: ProfileSize) -> Self {
        self.profile_size = Some(size);
        self
    }

    /// Sets the default still size.
    #[must_use]
    pub const fn still_size(mut self, size: StillSize) -> Self {
        self.still_size = Some(size);
        self
    }
}

/// The defaulting rule shared by all request parameter types.
///
/// An explicitly supplied field always wins; a field left unset falls back
/// to the same-named field of [`TmdbOptions`]; fields present in neither
/// stay unset and are never serialized. Implementations are pure (the
/// options are untouched) and therefore idempotent.
pub trait ApplyDefaults: Sized {
    /// Returns these parameters with unset fields filled from `defaults`.
    #[must_use]
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self;
}

/// Fallback for a single optional field: keep the explicit value, else the
/// configured default.
pub(crate) fn or_default(explicit: Option<String>, configured: Option<&String>) -> Option<String> {
    explicit.or_else(|| configured.cloned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_explicit_value_wins() {
        // Arrange
        let configured = Some(String::from("it-IT"));

        // Act
        let merged = or_default(Some(String::from("en")), configured.as_ref());

        // Assert
        assert_eq!(merged.as_deref(), Some("en"));
    }

    #[test]
    fn test_unset_falls_back_to_configured() {
        // Arrange
        let configured = Some(String::from("it-IT"));

        // Act
        let merged = or_default(None, configured.as_ref());

        // Assert
        assert_eq!(merged.as_deref(), Some("it-IT"));
    }

    #[test]
    fn test_unset_everywhere_stays_unset() {
        // Arrange & Act
        let merged = or_default(None, None);

        // Assert
        assert!(merged.is_none());
    }

    #[test]
    fn test_options_builder_chain() {
        // Arrange & Act
        let options = TmdbOptions::new()
            .language("it-IT")
            .region("IT")
            .timezone("Europe/Rome");

        // Assert
        assert_eq!(options.language.as_deref(), Some("it-IT"));
        assert_eq!(options.region.as_deref(), Some("IT"));
        assert_eq!(options.timezone.as_deref(), Some("Europe/Rome"));
        assert!(options.images.secure_base_url);
    }
}

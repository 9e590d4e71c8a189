//! Image URL building and the per-category size vocabularies.
//!
//! TMDB serves images from a dedicated host; a full URL is
//! `base(secure) + size + path` where `path` is the relative path found in
//! API payloads (e.g. `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`).

use crate::options::ImagesConfig;

/// Plain HTTP image base URL.
pub const IMAGE_BASE_URL: &str = "http://image.tmdb.org/t/p/";

/// HTTPS image base URL.
pub const IMAGE_SECURE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

macro_rules! image_size {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Returns the URL path token for this size.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

image_size!(
    /// Valid sizes for backdrop images.
    BackdropSize {
        W300 => "w300",
        W780 => "w780",
        W1280 => "w1280",
        Original => "original",
    }
);

image_size!(
    /// Valid sizes for logo images.
    LogoSize {
        W45 => "w45",
        W92 => "w92",
        W154 => "w154",
        W185 => "w185",
        W300 => "w300",
        W500 => "w500",
        Original => "original",
    }
);

image_size!(
    /// Valid sizes for poster images.
    PosterSize {
        W92 => "w92",
        W154 => "w154",
        W185 => "w185",
        W342 => "w342",
        W500 => "w500",
        W780 => "w780",
        Original => "original",
    }
);

image_size!(
    /// Valid sizes for profile images.
    ProfileSize {
        W45 => "w45",
        W185 => "w185",
        H632 => "h632",
        Original => "original",
    }
);

image_size!(
    /// Valid sizes for episode still images.
    StillSize {
        W92 => "w92",
        W185 => "w185",
        W300 => "w300",
        Original => "original",
    }
);

/// Builds fully-qualified image URLs from relative paths.
///
/// Pure and local: never performs I/O. Explicit sizes win over the sizes
/// configured in [`ImagesConfig`], which win over the library defaults
/// (`w780` backdrops, `w185` logos, `w500` posters, `w185` profiles,
/// `w300` stills).
#[derive(Debug, Clone, Copy)]
pub struct ImageUrls<'a> {
    config: &'a ImagesConfig,
}

impl<'a> ImageUrls<'a> {
    /// Creates a builder over the given image configuration.
    #[must_use]
    pub const fn new(config: &'a ImagesConfig) -> Self {
        Self { config }
    }

    fn build(&self, size: &str, path: &str) -> String {
        let base = if self.config.secure_base_url {
            IMAGE_SECURE_BASE_URL
        } else {
            IMAGE_BASE_URL
        };
        format!("{base}{size}{path}")
    }

    /// URL for a backdrop image.
    #[must_use]
    pub fn backdrop(&self, path: &str, size: Option<BackdropSize>) -> String {
        let size = size
            .or(self.config.backdrop_size)
            .unwrap_or(BackdropSize::W780);
        self.build(size.as_str(), path)
    }

    /// URL for a logo image.
    #[must_use]
    pub fn logo(&self, path: &str, size: Option<LogoSize>) -> String {
        let size = size.or(self.config.logo_size).unwrap_or(LogoSize::W185);
        self.build(size.as_str(), path)
    }

    /// URL for a poster image.
    #[must_use]
    pub fn poster(&self, path: &str, size: Option<PosterSize>) -> String {
        let size = size.or(self.config.poster_size).unwrap_or(PosterSize::W500);
        self.build(size.as_str(), path)
    }

    /// URL for a person profile image.
    #[must_use]
    pub fn profile(&self, path: &str, size: Option<ProfileSize>) -> String {
        let size = size
            .or(self.config.profile_size)
            .unwrap_or(ProfileSize::W185);
        self.build(size.as_str(), path)
    }

    /// URL for an episode still image.
    #[must_use]
    pub fn still(&self, path: &str, size: Option<StillSize>) -> String {
        let size = size.or(self.config.still_size).unwrap_or(StillSize::W300);
        self.build(size.as_str(), path)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const PATH: &str = "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg";

    #[test]
    fn test_poster_with_library_default_size() {
        // Arrange
        let config = ImagesConfig::default();
        let images = ImageUrls::new(&config);

        // Act
        let url = images.poster(PATH, None);

        // Assert
        assert_eq!(url, format!("https://image.tmdb.org/t/p/w500{PATH}"));
    }

    #[test]
    fn test_explicit_size_wins_over_configured_default() {
        // Arrange
        let config = ImagesConfig::default().poster_size(PosterSize::W92);
        let images = ImageUrls::new(&config);

        // Act
        let url = images.poster(PATH, Some(PosterSize::Original));

        // Assert
        assert_eq!(url, format!("https://image.tmdb.org/t/p/original{PATH}"));
    }

    #[test]
    fn test_configured_default_wins_over_library_default() {
        // Arrange
        let config = ImagesConfig::default().backdrop_size(BackdropSize::W1280);
        let images = ImageUrls::new(&config);

        // Act
        let url = images.backdrop(PATH, None);

        // Assert
        assert_eq!(url, format!("https://image.tmdb.org/t/p/w1280{PATH}"));
    }

    #[test]
    fn test_insecure_base_url() {
        // Arrange
        let config = ImagesConfig::default().secure_base_url(false);
        let images = ImageUrls::new(&config);

        // Act
        let url = images.still(PATH, None);

        // Assert
        assert!(url.starts_with("http://image.tmdb.org/t/p/w300"));
    }

    #[test]
    fn test_each_category_uses_its_own_default() {
        // Arrange
        let config = ImagesConfig::default();
        let images = ImageUrls::new(&config);

        // Act & Assert
        assert!(images.backdrop(PATH, None).contains("/w780/"));
        assert!(images.logo(PATH, None).contains("/w185/"));
        assert!(images.profile(PATH, None).contains("/w185/"));
        assert!(images.still(PATH, None).contains("/w300/"));
    }

    #[test]
    fn test_size_tokens() {
        // Arrange & Act & Assert
        assert_eq!(BackdropSize::W300.as_str(), "w300");
        assert_eq!(LogoSize::W500.as_str(), "w500");
        assert_eq!(ProfileSize::H632.as_str(), "h632");
        assert_eq!(StillSize::Original.as_str(), "original");
    }
}

//! Error types for geowall
//!
//! All modules use `GeowallResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for geowall operations
pub type GeowallResult<T> = Result<T, GeowallError>;

/// All errors that can occur in geowall
#[derive(Error, Debug)]
pub enum GeowallError {
    // Environment errors
    #[error("Unsupported platform: {0}. geowall supports Windows, macOS and Linux.")]
    UnsupportedPlatform(String),

    // Network errors
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    // Image errors
    #[error("Failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // Wallpaper errors
    #[error("Wallpaper file not found: {0}")]
    WallpaperMissing(PathBuf),

    #[error("Failed to set wallpaper to {path}: {reason}")]
    WallpaperApply { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeowallError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch error for a URL
    pub fn fetch(url: impl Into<String>, source: ureq::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Fetch { .. } => Some("Check your internet connection"),
            Self::ConfigInvalid { .. } => Some("Run: geowall config init --force"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeowallError::UnsupportedPlatform("freebsd".to_string());
        assert!(err.to_string().contains("Unsupported platform: freebsd"));
    }

    #[test]
    fn error_hint() {
        let err = GeowallError::Fetch {
            url: "https://example.com/image.jpg".to_string(),
            source: Box::new(ureq::Error::Io(std::io::Error::other("connection refused"))),
        };
        assert_eq!(err.hint(), Some("Check your internet connection"));
    }

    #[test]
    fn wallpaper_errors_carry_the_path() {
        let err = GeowallError::WallpaperMissing(PathBuf::from("/tmp/edited.jpg"));
        assert!(err.to_string().contains("/tmp/edited.jpg"));
    }
}

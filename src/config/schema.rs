//! Configuration schema for geowall
//!
//! Configuration is stored at `~/.config/geowall/config.toml`. Every
//! field has a default, so a missing file or a partial file both work;
//! the defaults point at the GOES-19 full-disk GEOCOLOR feed.

use crate::compose::Geometry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote endpoints
    pub source: SourceConfig,

    /// Screen geometry the wallpaper is composed for
    pub screen: ScreenConfig,

    /// On-disk cache settings
    pub cache: CacheConfig,

    /// Polling settings
    pub poll: PollConfig,
}

/// Remote image and digest endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the full image resource
    pub image_url: String,

    /// URL of the digest resource published next to the image
    pub digest_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            image_url: "https://cdn.star.nesdis.noaa.gov/GOES19/ABI/FD/GEOCOLOR/5424x5424.jpg"
                .to_string(),
            digest_url:
                "https://cdn.star.nesdis.noaa.gov/GOES19/ABI/FD/GEOCOLOR/GOES19-ABI-FD-GEOCOLOR-10848x10848.tif.sha256"
                    .to_string(),
        }
    }
}

/// Screen geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen width in pixels
    pub width: u32,

    /// Screen height in pixels
    pub height: u32,

    /// Pixels kept free at the top of the screen
    pub top_margin: u32,

    /// Pixels kept free at the bottom of the screen
    pub bottom_margin: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            top_margin: 50,
            bottom_margin: 100,
        }
    }
}

impl ScreenConfig {
    /// Geometry for the compositor
    pub fn geometry(&self) -> Geometry {
        Geometry {
            screen_width: self.width,
            screen_height: self.height,
            top_margin: self.top_margin,
            bottom_margin: self.bottom_margin,
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory (defaults to the platform cache dir)
    pub dir: Option<PathBuf>,

    /// Maximum number of retained original/edited pairs
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            max_entries: 10,
        }
    }
}

impl CacheConfig {
    /// Resolve the cache directory, falling back to the platform default
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("geowall")
                .join("images")
        })
    }
}

/// Polling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds to wait after each cycle completes
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

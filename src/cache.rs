//! Bounded on-disk image cache
//!
//! Each successful cycle stores a pair of files keyed by a creation
//! timestamp: the original download (`original_<ts>.jpg`) and the
//! letterboxed wallpaper (`edited_<ts>.jpg`). The timestamp format sorts
//! lexicographically in chronological order, so eviction is a plain sort.
//! A crash between the two writes can leave an orphaned original; eviction
//! tolerates a missing edited counterpart.

use crate::error::{GeowallError, GeowallResult};
use chrono::NaiveDateTime;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Timestamp format embedded in cache filenames (lexicographic == chronological)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const ORIGINAL_PREFIX: &str = "original_";
const EDITED_PREFIX: &str = "edited_";

/// JPEG quality for the edited wallpaper
const JPEG_QUALITY: u8 = 95;

/// Paths of a stored original/edited pair
#[derive(Debug, Clone)]
pub struct StoredPair {
    pub original: PathBuf,
    pub edited: PathBuf,
}

/// Cache of original/edited image pairs in a single directory
#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    /// Open a cache rooted at `dir`, creating the directory if absent
    pub fn open(dir: impl Into<PathBuf>) -> GeowallResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| GeowallError::io(format!("creating cache directory {}", dir.display()), e))?;
        Ok(Self { dir })
    }

    /// The cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the downloaded bytes verbatim as `original_<ts>.jpg`
    ///
    /// The driver calls this before decoding, so a decode failure still
    /// leaves the download on disk (the orphan is evicted normally).
    pub fn store_original(
        &self,
        bytes: &[u8],
        timestamp: NaiveDateTime,
    ) -> GeowallResult<PathBuf> {
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let original = self.dir.join(format!("{ORIGINAL_PREFIX}{stamp}.jpg"));

        fs::write(&original, bytes)
            .map_err(|e| GeowallError::io(format!("writing {}", original.display()), e))?;

        debug!("Stored original {}", stamp);
        Ok(original)
    }

    /// Encode the letterboxed image as `edited_<ts>.jpg`
    pub fn store_edited(
        &self,
        edited: &RgbImage,
        timestamp: NaiveDateTime,
    ) -> GeowallResult<PathBuf> {
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let edited_path = self.dir.join(format!("{EDITED_PREFIX}{stamp}.jpg"));

        let file = File::create(&edited_path)
            .map_err(|e| GeowallError::io(format!("creating {}", edited_path.display()), e))?;
        let writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
        edited
            .write_with_encoder(encoder)
            .map_err(|source| GeowallError::Encode {
                path: edited_path.clone(),
                source,
            })?;

        debug!("Stored edited {}", stamp);
        Ok(edited_path)
    }

    /// Delete the oldest pairs until at most `max_entries` originals remain
    ///
    /// A missing edited counterpart is skipped silently. Calling this
    /// again without an intervening store deletes nothing.
    pub fn enforce_limit(&self, max_entries: usize) -> GeowallResult<()> {
        let mut originals = self.list_originals()?;
        if originals.len() <= max_entries {
            return Ok(());
        }

        originals.sort();
        let excess = originals.len() - max_entries;
        for name in originals.into_iter().take(excess) {
            let original = self.dir.join(&name);
            fs::remove_file(&original)
                .map_err(|e| GeowallError::io(format!("deleting {}", original.display()), e))?;

            let edited = self.dir.join(name.replacen(ORIGINAL_PREFIX, EDITED_PREFIX, 1));
            if edited.is_file() {
                fs::remove_file(&edited)
                    .map_err(|e| GeowallError::io(format!("deleting {}", edited.display()), e))?;
            }
            info!("Evicted cached image {}", name);
        }
        Ok(())
    }

    /// Filenames of all original images currently in the cache
    pub fn list_originals(&self) -> GeowallResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| GeowallError::io(format!("listing {}", self.dir.display()), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| GeowallError::io(format!("listing {}", self.dir.display()), e))?;
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if name.starts_with(ORIGINAL_PREFIX) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

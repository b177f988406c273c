//! Cycle orchestration
//!
//! One `Driver` owns all cross-cycle state: the change detector, the
//! cache, and the latest-wallpaper pointer. Each call to `run_cycle`
//! performs one full fetch/detect/compose/store/evict/apply pass and
//! returns what happened; the caller decides how to report it and when
//! to run the next cycle. Errors never advance the stored digest.

use crate::cache::{ImageCache, StoredPair};
use crate::compose::{compose, Geometry};
use crate::detect::{Change, ChangeDetector};
use crate::error::GeowallResult;
use crate::fetch::ImageSource;
use crate::wallpaper::WallpaperTarget;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a single cycle did
#[derive(Debug)]
pub enum CycleOutcome {
    /// Remote digest matched the last-seen one; nothing downloaded
    Unchanged,
    /// A new image was stored and the wallpaper pointer advanced
    Updated {
        pair: StoredPair,
        /// Whether the OS wallpaper call succeeded. The stored pair and
        /// the pointer are kept either way.
        applied: Result<(), crate::error::GeowallError>,
    },
}

/// Per-process state machine driving the fetch/compose/store/apply pipeline
pub struct Driver<S, W> {
    source: S,
    target: W,
    cache: ImageCache,
    geometry: Geometry,
    max_cache_entries: usize,
    detector: ChangeDetector,
    latest_wallpaper: Option<PathBuf>,
}

impl<S: ImageSource, W: WallpaperTarget> Driver<S, W> {
    pub fn new(
        source: S,
        target: W,
        cache: ImageCache,
        geometry: Geometry,
        max_cache_entries: usize,
    ) -> Self {
        Self {
            source,
            target,
            cache,
            geometry,
            max_cache_entries,
            detector: ChangeDetector::new(),
            latest_wallpaper: None,
        }
    }

    /// Path of the most recently produced edited image, if any
    pub fn latest_wallpaper(&self) -> Option<&PathBuf> {
        self.latest_wallpaper.as_ref()
    }

    /// Run one cycle at the current local time
    pub fn run_cycle(&mut self) -> GeowallResult<CycleOutcome> {
        self.run_cycle_at(Local::now().naive_local())
    }

    /// Run one cycle, stamping any stored pair with `now`
    ///
    /// Any error propagates without having advanced the detector, so the
    /// next cycle retries from scratch.
    pub fn run_cycle_at(&mut self, now: NaiveDateTime) -> GeowallResult<CycleOutcome> {
        let digest = self.source.fetch_digest()?;
        if self.detector.is_changed(&digest) == Change::Unchanged {
            debug!("Remote digest unchanged, skipping download");
            return Ok(CycleOutcome::Unchanged);
        }

        let raw = self.source.fetch_image()?;
        info!(bytes = raw.len(), "Downloaded new image");

        // Persist the download before decoding; a decode failure leaves
        // the original on disk for inspection
        let original = self.cache.store_original(&raw, now)?;
        let edited_image = compose(&raw, &self.geometry)?;
        let edited = self.cache.store_edited(&edited_image, now)?;
        let pair = StoredPair { original, edited };
        self.cache.enforce_limit(self.max_cache_entries)?;

        // The pipeline succeeded: commit the digest and advance the
        // pointer before attempting to apply. An apply failure is partial
        // success, never a rollback.
        self.detector.commit(digest);
        self.latest_wallpaper = Some(pair.edited.clone());

        let applied = self.target.apply(&pair.edited);
        if let Err(ref e) = applied {
            warn!("Wallpaper apply failed: {e}");
        }

        Ok(CycleOutcome::Updated { pair, applied })
    }
}

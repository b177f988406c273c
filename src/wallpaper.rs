//! Desktop wallpaper application
//!
//! Thin wrapper over the `wallpaper` crate. The OS call is opaque: its
//! failure text is surfaced unchanged. `WallpaperTarget` is the driver's
//! second test seam next to `ImageSource`.

use crate::error::{GeowallError, GeowallResult};
use std::path::Path;

/// Applies a local file as the desktop background
pub trait WallpaperTarget {
    /// Set the desktop background to the image at `path`
    fn apply(&self, path: &Path) -> GeowallResult<()>;
}

/// The real desktop, via the `wallpaper` crate
#[derive(Debug, Default)]
pub struct Desktop;

impl WallpaperTarget for Desktop {
    fn apply(&self, path: &Path) -> GeowallResult<()> {
        if !path.exists() {
            return Err(GeowallError::WallpaperMissing(path.to_path_buf()));
        }

        let path_str = path.display().to_string();
        wallpaper::set_from_path(&path_str).map_err(|e| GeowallError::WallpaperApply {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Fail fast on hosts where no wallpaper mechanism exists
///
/// This is the only fatal error class: everything else fails a single
/// cycle and retries on the next one.
pub fn ensure_supported() -> GeowallResult<()> {
    match std::env::consts::OS {
        "windows" | "macos" | "linux" => Ok(()),
        other => Err(GeowallError::UnsupportedPlatform(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_rejected_before_the_os_call() {
        let missing = PathBuf::from("/definitely/not/here/edited.jpg");
        let err = Desktop.apply(&missing).unwrap_err();
        assert!(matches!(err, GeowallError::WallpaperMissing(_)));
    }

    #[test]
    fn supported_platforms_pass_the_gate() {
        // CI hosts are always one of the supported three
        assert!(ensure_supported().is_ok());
    }
}

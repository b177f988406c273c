//! geowall - Live satellite Earth wallpaper
//!
//! Polls the GOES-19 full-disk GEOCOLOR feed, letterboxes each new frame
//! to the screen, keeps a bounded on-disk cache of originals and edits,
//! and sets the desktop background.

pub mod cache;
pub mod cli;
pub mod compose;
pub mod config;
pub mod detect;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod wallpaper;

pub use error::{GeowallError, GeowallResult};

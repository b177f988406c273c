//! HTTP fetching of the digest and image resources
//!
//! Two fixed endpoints, one blocking GET each, no retry: the driver's
//! fixed inter-cycle wait is the only backoff. Non-success statuses
//! surface as the client's default error. `ImageSource` is the trait the
//! driver is generic over, so tests can substitute canned bytes.

use crate::error::{GeowallError, GeowallResult};
use ureq::Agent;

/// Full-disk GEOCOLOR frames are a few MB; leave generous headroom
const IMAGE_BODY_LIMIT: u64 = 64 * 1024 * 1024;

/// Provider of the remote digest and image bytes
pub trait ImageSource {
    /// Fetch the digest resource (opaque bytes, equality only)
    fn fetch_digest(&self) -> GeowallResult<Vec<u8>>;

    /// Fetch the full image resource
    fn fetch_image(&self) -> GeowallResult<Vec<u8>>;
}

/// `ImageSource` backed by HTTP GETs against the configured URLs
pub struct HttpSource {
    agent: Agent,
    digest_url: String,
    image_url: String,
}

impl HttpSource {
    /// Create a source for the given endpoints
    pub fn new(digest_url: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            digest_url: digest_url.into(),
            image_url: image_url.into(),
        }
    }

    fn get(&self, url: &str, limit: u64) -> GeowallResult<Vec<u8>> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| GeowallError::fetch(url, e))?;
        response
            .body_mut()
            .with_config()
            .limit(limit)
            .read_to_vec()
            .map_err(|e| GeowallError::fetch(url, e))
    }
}

impl ImageSource for HttpSource {
    fn fetch_digest(&self) -> GeowallResult<Vec<u8>> {
        // Digest resources are tiny; the default-sized cap is plenty
        self.get(&self.digest_url, 64 * 1024)
    }

    fn fetch_image(&self) -> GeowallResult<Vec<u8>> {
        self.get(&self.image_url, IMAGE_BODY_LIMIT)
    }
}

//! Digest-based change detection
//!
//! The remote publishes a small digest resource next to the full image.
//! The digest is opaque: it is compared byte-for-byte and never parsed,
//! so a malformed or empty body still works as an identity value.

/// Outcome of comparing a fetched digest against the last-seen one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The digest differs (or no digest was seen yet)
    Changed,
    /// Byte-identical to the last-seen digest
    Unchanged,
}

/// Tracks the last-seen digest across cycles
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_seen: Option<Vec<u8>>,
}

impl ChangeDetector {
    /// Create a detector with no prior digest (first observation is always `Changed`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare without committing
    pub fn is_changed(&self, digest: &[u8]) -> Change {
        match &self.last_seen {
            Some(seen) if seen.as_slice() == digest => Change::Unchanged,
            _ => Change::Changed,
        }
    }

    /// Store `digest` as the new last-seen value
    ///
    /// The driver calls this only once the cycle has everything it needs,
    /// so a failed image download does not advance the stored digest.
    pub fn commit(&mut self, digest: Vec<u8>) {
        self.last_seen = Some(digest);
    }

    /// Compare and commit in one step
    ///
    /// On `Changed` the new digest replaces the stored one; on `Unchanged`
    /// the stored digest is left as-is (it is byte-identical anyway).
    pub fn observe(&mut self, digest: Vec<u8>) -> Change {
        let change = self.is_changed(&digest);
        if change == Change::Changed {
            self.commit(digest);
        }
        change
    }
}

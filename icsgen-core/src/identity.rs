//! Identity tokens for model values.
//!
//! Collections of attendees and events reject duplicates by identity rather
//! than by value: two attendees with the same name and email are distinct
//! unless one was cloned from the other.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique token assigned when a model value is constructed.
/// Clones carry the token of their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(u64);

impl Identity {
    pub fn next() -> Self {
        Identity(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::next()
    }
}

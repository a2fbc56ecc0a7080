//! Latest-value media slot
//!
//! Each media stream owns exactly one `MediaSlot`: a single-item holder for
//! the most recent payload the device uploaded, stamped at store time.
//! There is no history; a successful store replaces whatever was there.

use std::time::{Duration, Instant};

use bytes::Bytes;
use chrono::{DateTime, Local};
use tokio::sync::RwLock;

use crate::error::{RelayError, Result};

/// Which media stream a slot, counter, or session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Camera frames (expected JPEG, not validated)
    Video,
    /// Microphone chunks (expected 16-bit PCM, not validated)
    Audio,
}

impl StreamKind {
    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Video => "video",
            StreamKind::Audio => "audio",
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consistent point-in-time view of a slot's contents
///
/// The payload is reference-counted, so cloning a snapshot (or handing it
/// to many viewers) never copies the device's bytes.
#[derive(Debug, Clone)]
pub struct SlotSnapshot {
    /// The stored payload
    pub payload: Bytes,
    /// Elapsed time since the payload was stored
    pub age: Duration,
    /// Wall-clock store time, for status display
    pub stored_at: DateTime<Local>,
}

/// Payload plus timestamps, replaced as a unit on every store
struct Stored {
    payload: Bytes,
    stored_instant: Instant,
    stored_at: DateTime<Local>,
}

/// Single-producer, many-consumer holder for the latest media payload
///
/// Readers take the lock shared and never serialize against each other;
/// only a store excludes readers, and only for the duration of the pointer
/// swap. Payload and timestamps are replaced together under the write
/// guard, so a snapshot can never pair an old payload with a new timestamp.
pub struct MediaSlot {
    kind: StreamKind,
    current: RwLock<Option<Stored>>,
}

impl MediaSlot {
    /// Create an empty slot for the given stream
    pub fn new(kind: StreamKind) -> Self {
        Self {
            kind,
            current: RwLock::new(None),
        }
    }

    /// Which stream this slot holds
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Store a payload, replacing any previous value
    ///
    /// An empty payload is a client input error: the slot is left untouched
    /// and `RelayError::EmptyPayload` is returned for the ingress handler
    /// to surface as a 400.
    pub async fn store(&self, payload: Bytes) -> Result<()> {
        if payload.is_empty() {
            return Err(RelayError::EmptyPayload);
        }

        let bytes = payload.len();
        {
            let mut current = self.current.write().await;
            *current = Some(Stored {
                payload,
                stored_instant: Instant::now(),
                stored_at: Local::now(),
            });
        }

        tracing::debug!(stream = %self.kind, bytes, "Payload stored");
        Ok(())
    }

    /// Take a consistent snapshot of the current value, if any
    ///
    /// `None` means the device has never uploaded to this slot, which is a
    /// distinct state from "uploaded but stale"; callers classify the age
    /// separately via [`is_fresh`](super::freshness::is_fresh).
    pub async fn snapshot(&self) -> Option<SlotSnapshot> {
        let current = self.current.read().await;
        current.as_ref().map(|stored| SlotSnapshot {
            payload: stored.payload.clone(),
            age: stored.stored_instant.elapsed(),
            stored_at: stored.stored_at,
        })
    }
}

//! Process-wide relay state
//!
//! Constructed once at startup and passed by `Arc` to every handler and
//! session; nothing in the relay is a global. The two slots and the two
//! counters are independently synchronized, so video and audio never
//! contend with each other and status reads never queue behind stream
//! writes.

use std::sync::Arc;

use super::clients::ClientCounter;
use super::config::RelayConfig;
use super::slot::{MediaSlot, StreamKind};
use super::status::StatusSnapshot;

/// Shared state for the relay: one slot and one viewer counter per stream
pub struct RelayState {
    config: RelayConfig,
    video: MediaSlot,
    audio: MediaSlot,
    video_clients: Arc<ClientCounter>,
    audio_clients: Arc<ClientCounter>,
}

impl RelayState {
    /// Create empty relay state with the given configuration
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            video: MediaSlot::new(StreamKind::Video),
            audio: MediaSlot::new(StreamKind::Audio),
            video_clients: Arc::new(ClientCounter::new(StreamKind::Video)),
            audio_clients: Arc::new(ClientCounter::new(StreamKind::Audio)),
        }
    }

    /// The relay configuration
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The video frame slot
    pub fn video(&self) -> &MediaSlot {
        &self.video
    }

    /// The audio chunk slot
    pub fn audio(&self) -> &MediaSlot {
        &self.audio
    }

    /// Counter of connected video viewers
    pub fn video_clients(&self) -> &Arc<ClientCounter> {
        &self.video_clients
    }

    /// Counter of connected audio viewers
    pub fn audio_clients(&self) -> &Arc<ClientCounter> {
        &self.audio_clients
    }

    /// Compute a fresh status report; never cached
    pub async fn status(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self).await
    }
}

impl Default for RelayState {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[tokio::test]
    async fn test_slots_are_independent() {
        let state = RelayState::default();

        state.video().store(Bytes::from_static(b"frame")).await.unwrap();

        assert!(state.video().snapshot().await.is_some());
        assert!(state.audio().snapshot().await.is_none());
    }

    #[test]
    fn test_counters_are_independent() {
        let state = RelayState::default();

        let _video = state.video_clients().acquire();
        assert_eq!(state.video_clients().count(), 1);
        assert_eq!(state.audio_clients().count(), 0);
    }
}

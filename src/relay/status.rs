//! Status aggregation
//!
//! Snapshots both slots' freshness and the viewer counters into one JSON
//! document for the status endpoint. Computed fresh on every request;
//! concurrent status reads never interfere with each other or with
//! ingress/egress.

use std::time::Duration;

use serde::Serialize;

use super::freshness::is_fresh;
use super::state::RelayState;

/// Classification of one media feed, with "never received" and
/// "received but stale" modeled as distinct states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// The device has never uploaded to this slot
    NeverReceived,
    /// A value exists but its age exceeds the expiry threshold
    Stale {
        /// Whole seconds since the last upload
        age_secs: u64,
    },
    /// A fresh value is available
    Live,
}

impl FeedState {
    /// Classify a slot's age against its expiry threshold
    pub fn classify(age: Option<Duration>, threshold: Duration) -> Self {
        match age {
            None => FeedState::NeverReceived,
            Some(age) if is_fresh(age, threshold) => FeedState::Live,
            Some(age) => FeedState::Stale {
                age_secs: age.as_secs(),
            },
        }
    }

    /// Camera status text, as shown on the viewer page
    pub fn camera_text(&self) -> String {
        match self {
            FeedState::NeverReceived => "No frames received yet".to_string(),
            FeedState::Stale { age_secs } => {
                format!("Camera offline (last frame {age_secs}s ago)")
            }
            FeedState::Live => "Online".to_string(),
        }
    }

    /// Microphone status text, as shown on the viewer page
    pub fn microphone_text(&self) -> String {
        match self {
            FeedState::NeverReceived => "No audio received yet".to_string(),
            FeedState::Stale { age_secs } => {
                format!("Microphone offline (last audio {age_secs}s ago)")
            }
            FeedState::Live => "Receiving audio".to_string(),
        }
    }
}

/// One point-in-time status report
///
/// Field names are the wire format of `GET /status`; upload devices and
/// viewer pages both parse them.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// Camera feed status text
    pub status: String,
    /// Connected video viewers
    pub clients: u32,
    /// Connected audio viewers
    pub audio_clients: u32,
    /// Wall-clock time of the last frame (`HH:MM:SS`), or `"Never"`
    pub last_frame: String,
    /// Microphone feed status text
    pub audio_status: String,
}

impl StatusSnapshot {
    /// Read both slots and both counters and build a report
    ///
    /// Each slot snapshot is internally consistent; the report as a whole
    /// is a best-effort point in time, not a cross-slot transaction.
    pub async fn capture(state: &RelayState) -> Self {
        let config = state.config();

        let video = state.video().snapshot().await;
        let audio = state.audio().snapshot().await;

        let camera = FeedState::classify(video.as_ref().map(|s| s.age), config.video_expiry);
        let microphone = FeedState::classify(audio.as_ref().map(|s| s.age), config.audio_expiry);

        let last_frame = video
            .as_ref()
            .map(|s| s.stored_at.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "Never".to_string());

        Self {
            status: camera.camera_text(),
            clients: state.video_clients().count(),
            audio_clients: state.audio_clients().count(),
            last_frame,
            audio_status: microphone.microphone_text(),
        }
    }
}

//! Relay engine configuration

use std::time::Duration;

/// Expiry thresholds and fan-out cadences for both media streams
///
/// These are fixed per process; viewers do not negotiate them.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Age beyond which a stored frame counts as stale
    pub video_expiry: Duration,

    /// Age beyond which a stored audio chunk counts as stale
    pub audio_expiry: Duration,

    /// Cadence of the per-viewer video pull loop (~20 fps ceiling)
    pub video_interval: Duration,

    /// Cadence of the per-viewer audio pull loop (~10 Hz)
    pub audio_interval: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            video_expiry: Duration::from_secs(10),
            audio_expiry: Duration::from_secs(5),
            video_interval: Duration::from_millis(50),
            audio_interval: Duration::from_millis(100),
        }
    }
}

impl RelayConfig {
    /// Set the video expiry threshold
    pub fn video_expiry(mut self, threshold: Duration) -> Self {
        self.video_expiry = threshold;
        self
    }

    /// Set the audio expiry threshold
    pub fn audio_expiry(mut self, threshold: Duration) -> Self {
        self.audio_expiry = threshold;
        self
    }

    /// Set the video pull cadence
    pub fn video_interval(mut self, interval: Duration) -> Self {
        self.video_interval = interval;
        self
    }

    /// Set the audio pull cadence
    pub fn audio_interval(mut self, interval: Duration) -> Self {
        self.audio_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();

        assert_eq!(config.video_expiry, Duration::from_secs(10));
        assert_eq!(config.audio_expiry, Duration::from_secs(5));
        assert_eq!(config.video_interval, Duration::from_millis(50));
        assert_eq!(config.audio_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_builder_chaining() {
        let config = RelayConfig::default()
            .video_expiry(Duration::from_secs(30))
            .audio_expiry(Duration::from_secs(2))
            .video_interval(Duration::from_millis(100))
            .audio_interval(Duration::from_millis(250));

        assert_eq!(config.video_expiry, Duration::from_secs(30));
        assert_eq!(config.audio_expiry, Duration::from_secs(2));
        assert_eq!(config.video_interval, Duration::from_millis(100));
        assert_eq!(config.audio_interval, Duration::from_millis(250));
    }
}

//! Audio fan-out over server-sent events
//!
//! Fresh chunks are delivered as `data: {"audio":"<base64>"}` events. When
//! the slot is stale or empty the loop sends a heartbeat event carrying
//! the current wall-clock time instead, so a viewer can tell an idle
//! connection from a dead one.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::response::sse::Event;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures::stream::{unfold, Stream};
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::relay::{is_fresh, ClientGuard, RelayState, SlotSnapshot};

/// Epoch seconds with sub-second precision, as upload devices report time
fn wall_clock_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Build the JSON body for one loop iteration
fn render_event(snapshot: Option<&SlotSnapshot>, threshold: Duration) -> String {
    match snapshot {
        Some(snap) if is_fresh(snap.age, threshold) => {
            serde_json::json!({ "audio": BASE64.encode(&snap.payload) }).to_string()
        }
        _ => serde_json::json!({ "heartbeat": wall_clock_secs() }).to_string(),
    }
}

/// Per-viewer loop state; dropping it releases the viewer's counter slot
struct AudioSession {
    state: Arc<RelayState>,
    ticker: Interval,
    _guard: ClientGuard,
}

/// Open an infinite SSE event stream for one viewer
pub fn audio_stream(state: Arc<RelayState>) -> impl Stream<Item = Result<Event, Infallible>> {
    let guard = state.audio_clients().acquire();
    let mut ticker = interval(state.config().audio_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    unfold(
        AudioSession {
            state,
            ticker,
            _guard: guard,
        },
        |mut session| async move {
            session.ticker.tick().await;

            let snapshot = session.state.audio().snapshot().await;
            let threshold = session.state.config().audio_expiry;
            let body = render_event(snapshot.as_ref(), threshold);

            Some((Ok::<_, Infallible>(Event::default().data(body)), session))
        },
    )
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::Local;
    use futures::StreamExt;

    use crate::relay::RelayConfig;

    use super::*;

    fn snapshot_aged(payload: &'static [u8], age: Duration) -> SlotSnapshot {
        SlotSnapshot {
            payload: Bytes::from_static(payload),
            age,
            stored_at: Local::now(),
        }
    }

    #[test]
    fn test_fresh_snapshot_renders_base64_audio() {
        let snap = snapshot_aged(b"\x01\x02\x03\x04", Duration::from_secs(1));
        let body = render_event(Some(&snap), Duration::from_secs(5));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let encoded = value["audio"].as_str().unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), b"\x01\x02\x03\x04");
        assert!(value.get("heartbeat").is_none());
    }

    #[test]
    fn test_stale_snapshot_renders_heartbeat() {
        let snap = snapshot_aged(b"pcm", Duration::from_secs(6));
        let body = render_event(Some(&snap), Duration::from_secs(5));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value.get("audio").is_none());
        assert!(value["heartbeat"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_boundary_age_renders_heartbeat() {
        let snap = snapshot_aged(b"pcm", Duration::from_secs(5));
        let body = render_event(Some(&snap), Duration::from_secs(5));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value.get("audio").is_none());
    }

    #[test]
    fn test_missing_snapshot_renders_heartbeat() {
        let body = render_event(None, Duration::from_secs(5));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value.get("heartbeat").is_some());
    }

    #[tokio::test]
    async fn test_stream_holds_counter_until_dropped() {
        let state = Arc::new(RelayState::new(
            RelayConfig::default().audio_interval(Duration::from_millis(1)),
        ));

        let mut stream = Box::pin(audio_stream(Arc::clone(&state)));
        assert_eq!(state.audio_clients().count(), 1);

        let event = stream.next().await.unwrap();
        assert!(event.is_ok());

        drop(stream);
        assert_eq!(state.audio_clients().count(), 0);
        assert_eq!(state.video_clients().count(), 0);
    }

    #[tokio::test]
    async fn test_silent_device_yields_only_heartbeats() {
        let state = Arc::new(RelayState::new(
            RelayConfig::default().audio_interval(Duration::from_millis(1)),
        ));

        // No audio ever stored; every rendered body must be a heartbeat.
        for _ in 0..3 {
            let snapshot = state.audio().snapshot().await;
            let body = render_event(snapshot.as_ref(), state.config().audio_expiry);
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert!(value.get("heartbeat").is_some());
            assert!(value.get("audio").is_none());
        }
    }
}

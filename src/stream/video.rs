//! MJPEG multipart fan-out
//!
//! Frames viewers as `multipart/x-mixed-replace` parts with the fixed
//! boundary `frame`. When the slot is stale or empty the part carries no
//! payload, which keeps the multipart stream (and the viewer's `<img>`)
//! alive through device outages.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::{unfold, Stream};
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::relay::{is_fresh, ClientGuard, RelayState, SlotSnapshot};

/// Response content type for the MJPEG endpoint
pub const MJPEG_CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

const PART_HEADER: &[u8] = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n";
const PART_TRAILER: &[u8] = b"\r\n";

/// Encode one multipart part around `payload` (empty when stale/absent)
fn frame_part(payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(PART_HEADER.len() + payload.len() + PART_TRAILER.len());
    buf.put_slice(PART_HEADER);
    buf.put_slice(payload);
    buf.put_slice(PART_TRAILER);
    buf.freeze()
}

/// Pick the bytes for one loop iteration from a slot snapshot
fn render_frame(snapshot: Option<&SlotSnapshot>, threshold: Duration) -> Bytes {
    match snapshot {
        Some(snap) if is_fresh(snap.age, threshold) => frame_part(&snap.payload),
        _ => frame_part(&[]),
    }
}

/// Per-viewer loop state; dropping it releases the viewer's counter slot
struct VideoSession {
    state: Arc<RelayState>,
    ticker: Interval,
    _guard: ClientGuard,
}

/// Open an infinite MJPEG part stream for one viewer
///
/// Registers the viewer with the video client counter; the registration is
/// released when the transport drops the stream, whichever way the
/// connection ends.
pub fn video_stream(state: Arc<RelayState>) -> impl Stream<Item = Result<Bytes, Infallible>> {
    let guard = state.video_clients().acquire();
    let mut ticker = interval(state.config().video_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    unfold(
        VideoSession {
            state,
            ticker,
            _guard: guard,
        },
        |mut session| async move {
            session.ticker.tick().await;

            let snapshot = session.state.video().snapshot().await;
            let threshold = session.state.config().video_expiry;
            let chunk = render_frame(snapshot.as_ref(), threshold);

            Some((Ok::<_, Infallible>(chunk), session))
        },
    )
}

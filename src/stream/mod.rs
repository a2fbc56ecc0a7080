//! Per-viewer fan-out stream producers
//!
//! Each connected viewer gets its own infinite pull loop: snapshot the
//! slot, classify freshness, emit one framed unit, wait out the cadence.
//! The loop never ends on its own; it stops when the transport drops the
//! stream, and the viewer counter is released at that moment through the
//! guard owned by the stream state.
//!
//! A slow transport only throttles its own loop — the write must complete
//! before the next tick — so one stalled viewer can never hold up the
//! device's uploads or any other viewer.

pub mod audio;
pub mod video;

pub use audio::audio_stream;
pub use video::{video_stream, MJPEG_CONTENT_TYPE};

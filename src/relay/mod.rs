//! Latest-value relay engine
//!
//! The engine keeps exactly one slot per media stream (video, audio) holding
//! the most recent payload the device uploaded, and fans that value out to
//! any number of independently-paced viewers.
//!
//! # Architecture
//!
//! ```text
//!                         Arc<RelayState>
//!                ┌───────────────────────────────┐
//!                │ video: MediaSlot              │
//!                │ audio: MediaSlot              │
//!                │ video_clients: ClientCounter  │
//!                │ audio_clients: ClientCounter  │
//!                └──────────────┬────────────────┘
//!                               │
//!        ┌──────────────────────┼──────────────────────┐
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//!   [Ingress]              [Viewer]                [Viewer]
//!   slot.store()           slot.snapshot()         slot.snapshot()
//!        │                 every 50/100 ms         every 50/100 ms
//!        └── last write wins; each viewer paces itself
//! ```
//!
//! # Zero-Copy Design
//!
//! Payloads are `bytes::Bytes`, so a snapshot hands each viewer a
//! reference-counted view of the same allocation; storing a new payload
//! never waits for viewers and viewers never copy the device's bytes.

pub mod clients;
pub mod config;
pub mod freshness;
pub mod slot;
pub mod state;
pub mod status;

pub use clients::{ClientCounter, ClientGuard};
pub use config::RelayConfig;
pub use freshness::is_fresh;
pub use slot::{MediaSlot, SlotSnapshot, StreamKind};
pub use state::RelayState;
pub use status::{FeedState, StatusSnapshot};

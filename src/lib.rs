//! # camrelay
//!
//! Latest-value HTTP relay for embedded camera and microphone devices.
//!
//! A single sensor device POSTs its newest camera frame and microphone
//! chunk to the relay; any number of viewers watch over long-lived HTTP
//! connections — MJPEG multipart for video, server-sent events for audio.
//! Only the most recent payload per stream is ever retained: viewers that
//! poll slower than the device simply skip frames, and a device that goes
//! silent is surfaced as stale rather than as an error.
//!
//! ```no_run
//! use camrelay::{RelayServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> camrelay::Result<()> {
//!     let server = RelayServer::new(ServerConfig::default());
//!     server.run().await
//! }
//! ```

pub mod error;
pub mod relay;
pub mod server;
pub mod stream;

pub use error::{RelayError, Result};
pub use relay::{MediaSlot, RelayConfig, RelayState, StatusSnapshot, StreamKind};
pub use server::{RelayServer, ServerConfig};

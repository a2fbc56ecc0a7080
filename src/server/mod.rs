//! HTTP boundary
//!
//! Everything outside the relay core: route wiring, request decoding,
//! response framing glue, and the listener. Handlers only ever deposit
//! bytes into a slot or consume a fan-out stream; they hold no state of
//! their own.

pub mod config;
pub mod listener;
pub mod routes;

pub use config::ServerConfig;
pub use listener::RelayServer;
pub use routes::build_router;

//! Viewer connection accounting
//!
//! Each stream type keeps its own counter of currently connected viewers.
//! A session holds a [`ClientGuard`] for its whole lifetime; the guard
//! decrements the counter in `Drop`, so every exit path (client disconnect,
//! transport error, server shutdown) releases exactly once.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use super::slot::StreamKind;

/// Counter of currently connected viewers for one stream type
#[derive(Debug)]
pub struct ClientCounter {
    kind: StreamKind,
    active: AtomicU32,
}

impl ClientCounter {
    /// Create a counter at zero
    pub fn new(kind: StreamKind) -> Self {
        Self {
            kind,
            active: AtomicU32::new(0),
        }
    }

    /// Which stream this counter tracks
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Current number of connected viewers
    pub fn count(&self) -> u32 {
        self.active.load(Ordering::Relaxed)
    }

    /// Register a new viewer session
    ///
    /// Increments the counter and logs the connection; the returned guard
    /// decrements on drop.
    pub fn acquire(self: &Arc<Self>) -> ClientGuard {
        let now = self.active.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(stream = %self.kind, clients = now, "Viewer connected");
        ClientGuard {
            counter: Arc::clone(self),
        }
    }
}

/// RAII handle for one viewer's place in a [`ClientCounter`]
///
/// Owned by the session's stream state, so dropping the stream — however
/// the connection ended — runs the decrement exactly once.
pub struct ClientGuard {
    counter: Arc<ClientCounter>,
}

impl Drop for ClientGuard {
    fn drop(&mut self) {
        let prev = self.counter.active.fetch_sub(1, Ordering::Relaxed);
        tracing::info!(
            stream = %self.counter.kind,
            clients = prev.saturating_sub(1),
            "Viewer disconnected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = ClientCounter::new(StreamKind::Video);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_acquire_increments_and_drop_decrements() {
        let counter = Arc::new(ClientCounter::new(StreamKind::Video));

        let guard = counter.acquire();
        assert_eq!(counter.count(), 1);

        drop(guard);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_guards_are_independent() {
        let counter = Arc::new(ClientCounter::new(StreamKind::Audio));

        let first = counter.acquire();
        let second = counter.acquire();
        let third = counter.acquire();
        assert_eq!(counter.count(), 3);

        drop(second);
        assert_eq!(counter.count(), 2);

        drop(first);
        drop(third);
        assert_eq!(counter.count(), 0);
    }
}

//! A bounded pool of idle connections.

use std::collections::VecDeque;

use log::debug;
use tokio::sync::Mutex;

/// A bounded store of idle, reusable connections.
///
/// The pool is a best-effort cache, not a limiter: it bounds how many idle
/// connections are kept alive, never how many are active. [`ConnPool::get`]
/// does not block waiting for an entry and does not open connections
/// itself; a caller that misses simply proceeds without one.
///
/// Dropping a connection closes it, so "close" below means "drop".
pub struct ConnPool<C> {
    idle: Mutex<VecDeque<C>>,
    capacity: usize,
}

impl<C> ConnPool<C> {
    /// Create a pool that keeps at most `capacity` idle connections.
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Pop an idle connection, if any is queued.
    pub async fn get(&self) -> Option<C> {
        self.idle.lock().await.pop_front()
    }

    /// Return a connection to the pool.
    ///
    /// If the pool is already holding `capacity` idle connections, the
    /// returned connection is closed instead; that is not an error.
    pub async fn put(&self, conn: C) {
        let mut idle = self.idle.lock().await;
        if idle.len() < self.capacity {
            idle.push_back(conn);
        } else {
            debug!(
                "Pool at capacity ({capacity}), closing surplus connection",
                capacity = self.capacity
            );
        }
    }

    /// Close every idle connection and leave the pool empty.
    ///
    /// Called once during shutdown. Connections currently in use by
    /// in-flight tasks are unaffected.
    pub async fn drain(&self) {
        let mut idle = self.idle.lock().await;
        let drained = idle.len();
        idle.clear();
        if drained > 0 {
            debug!("Drained {drained} idle connections");
        }
    }

    /// The number of idle connections currently queued.
    pub async fn idle_count(&self) -> usize {
        self.idle.lock().await.len()
    }
}

//! Process-wide registry of live connections (spec §4.10's `ConnSet`).
//!
//! The teacher tracks in-flight work with a `JoinSet` in `main.rs`; this
//! is the same idea turned into a lookup table keyed by broker address
//! so the supervisor can batch-close every connection pointed at a
//! given broker (e.g. when a broker is decommissioned) without tearing
//! down the whole proxy.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Handle a registered connection leaves behind so it can be asked to
/// shut down from outside its own task.
#[derive(Clone)]
pub struct ConnHandle {
    pub id: u64,
    pub peer_addr: SocketAddr,
    pub broker_address: (String, u16),
    close: CancellationToken,
}

impl ConnHandle {
    /// Requests that this connection's pumps stop forwarding and the
    /// sockets be closed. Idempotent.
    pub fn close(&self) {
        self.close.cancel();
    }

    pub fn close_token(&self) -> CancellationToken {
        self.close.clone()
    }
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<u64, ConnHandle>,
    by_broker: HashMap<(String, u16), Vec<u64>>,
}

/// Registry of every connection currently being proxied, indexed both
/// by a unique id and by the broker address it targets.
pub struct ConnSet {
    inner: Mutex<Inner>,
    next_id: AtomicU64,
}

impl ConnSet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(Inner::default()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Registers a connection and returns the handle the caller must
    /// hold onto and deregister with on shutdown.
    pub fn register(&self, peer_addr: SocketAddr, broker_address: (String, u16)) -> ConnHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let handle = ConnHandle {
            id,
            peer_addr,
            broker_address: broker_address.clone(),
            close: CancellationToken::new(),
        };
        let mut inner = self.inner.lock();
        inner.by_id.insert(id, handle.clone());
        inner.by_broker.entry(broker_address).or_default().push(id);
        handle
    }

    pub fn deregister(&self, handle: &ConnHandle) {
        let mut inner = self.inner.lock();
        inner.by_id.remove(&handle.id);
        if let Some(ids) = inner.by_broker.get_mut(&handle.broker_address) {
            ids.retain(|&id| id != handle.id);
            if ids.is_empty() {
                inner.by_broker.remove(&handle.broker_address);
            }
        }
    }

    /// Requests every connection currently dialed to `broker_address`
    /// close. Returns how many were signalled.
    pub fn close_all_for_broker(&self, broker_address: &(String, u16)) -> usize {
        let inner = self.inner.lock();
        let Some(ids) = inner.by_broker.get(broker_address) else {
            return 0;
        };
        let mut count = 0;
        for id in ids {
            if let Some(handle) = inner.by_id.get(id) {
                handle.close();
                count += 1;
            }
        }
        count
    }

    /// Requests every registered connection close. Used during process
    /// shutdown alongside the supervisor's own cancellation token.
    pub fn close_all(&self) -> usize {
        let inner = self.inner.lock();
        for handle in inner.by_id.values() {
            handle.close();
        }
        inner.by_id.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

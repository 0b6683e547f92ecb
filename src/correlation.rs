//! The correlation table (spec §4.4): remembers which `api_key` and
//! `api_version` went out under each `correlation_id` so the response
//! pump — which only ever sees a bare `correlation_id` on the wire, per
//! [`crate::kafka_protocol::response_header`] — knows which schema to
//! walk when the matching response comes back.
//!
//! Bounded by a semaphore sized to `max_open_requests`: a downstream
//! client that floods requests without reading responses blocks on
//! `reserve` before its bytes are even forwarded upstream, which is the
//! backpressure spec §5 asks for rather than growing the table
//! unbounded.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::error::{ProxyError, ProxyResult};

#[derive(Debug, Clone, Copy)]
pub struct PendingRequest {
    pub api_key: i16,
    pub api_version: i16,
}

struct Inner {
    table: HashMap<i32, PendingRequest>,
}

/// Per-connection table of in-flight requests, bounded by a semaphore.
pub struct CorrelationTable {
    inner: Mutex<Inner>,
    permits: Semaphore,
}

/// A reservation held by the request pump between forwarding a request
/// and inserting its correlation entry. Dropping it without calling
/// [`CorrelationTable::insert`] releases the permit without leaving an
/// entry behind, which is what happens if the downstream write fails
/// partway through.
pub struct Reservation<'a> {
    _permit: SemaphorePermit<'a>,
}

impl CorrelationTable {
    pub fn new(max_open_requests: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                table: HashMap::new(),
            }),
            permits: Semaphore::new(max_open_requests),
        }
    }

    /// Blocks until a slot is free. Call before forwarding a request
    /// upstream; the returned reservation must be consumed by
    /// [`Self::insert`] once the correlation id is known to be unique.
    pub async fn reserve(&self) -> ProxyResult<Reservation<'_>> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ProxyError::Protocol("correlation table closed".to_string()))?;
        Ok(Reservation { _permit: permit })
    }

    /// Records that `correlation_id` is now in flight. Consumes the
    /// reservation so the held permit is accounted for until the entry
    /// is later removed by [`Self::remove`].
    pub fn insert(
        &self,
        reservation: Reservation<'_>,
        correlation_id: i32,
        pending: PendingRequest,
    ) -> ProxyResult<()> {
        let mut inner = self.inner.lock();
        if inner.table.contains_key(&correlation_id) {
            drop(reservation);
            return Err(ProxyError::Protocol(format!(
                "duplicate correlation id {correlation_id}"
            )));
        }
        inner.table.insert(correlation_id, pending);
        // The reservation's permit is intentionally leaked here: it is
        // returned to the semaphore only when `remove` takes the entry
        // back out, not when this borrow ends.
        std::mem::forget(reservation);
        Ok(())
    }

    /// Removes and returns the pending request for `correlation_id`, if
    /// any, releasing its semaphore permit back to the pool.
    pub fn remove(&self, correlation_id: i32) -> Option<PendingRequest> {
        let removed = self.inner.lock().table.remove(&correlation_id);
        if removed.is_some() {
            self.permits.add_permits(1);
        }
        removed
    }

    pub fn in_flight(&self) -> usize {
        self.inner.lock().table.len()
    }
}

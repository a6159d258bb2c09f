/*
[INPUT]:  Wall clock time and the previously issued nonce
[OUTPUT]: Strictly increasing nonces for authenticated requests
[POS]:    Auth layer - replay protection for signed payloads
[UPDATE]: When changing nonce resolution or source
*/

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of nonces for signed requests
///
/// The exchange rejects repeated or decreasing nonces per API key, so every
/// implementation must hand out strictly increasing values, including across
/// threads sharing one client.
pub trait NonceSource: Send + Sync + fmt::Debug {
    fn next_nonce(&self) -> u64;
}

/// Millisecond timestamp nonce, bumped by one when the clock has not advanced
#[derive(Debug, Default)]
pub struct MonotonicNonce {
    last: AtomicU64,
}

impl MonotonicNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for MonotonicNonce {
    fn next_nonce(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

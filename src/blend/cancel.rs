//! Cooperative cancellation for long-running reassembly
//!
//! A token is cloned into whatever owns the work and flipped from any
//! thread. The reassembly loop polls it at strip and tile boundaries and
//! abandons the remaining work with a `Cancelled` error.

use crate::io::error::{Result, TilingError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag polled between units of work
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; visible to every clone of this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Bail out of the current operation if cancellation was requested
    ///
    /// # Errors
    ///
    /// Returns `TilingError::Cancelled` when the token has been
    /// cancelled.
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(TilingError::Cancelled);
        }
        Ok(())
    }
}

//! Fan-out metrics for observability
//!
//! Counters shared by a [`FanoutLogger`](crate::FanoutLogger) and every entry
//! it creates, so callers can see how many entries went out and how often
//! children asked for termination.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for fan-out flushes
///
/// # Example
///
/// ```
/// use rust_fanout_logger::FanoutMetrics;
///
/// let metrics = FanoutMetrics::new();
/// metrics.record_entry_flushed();
/// metrics.record_child_flush();
/// metrics.record_child_flush();
///
/// assert_eq!(metrics.entries_flushed(), 1);
/// assert_eq!(metrics.child_flushes(), 2);
/// ```
#[derive(Debug)]
pub struct FanoutMetrics {
    /// Fan-out entries flushed
    entries_flushed: AtomicU64,

    /// Individual child flush calls
    child_flushes: AtomicU64,

    /// Children that returned or raised a panic signal
    panic_signals: AtomicU64,

    /// Aggregated panic signals returned to callers
    panics_raised: AtomicU64,

    /// Children that unwound instead of returning a signal
    caught_panics: AtomicU64,

    /// Exit directives passed through to callers
    exit_directives: AtomicU64,
}

impl FanoutMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            entries_flushed: AtomicU64::new(0),
            child_flushes: AtomicU64::new(0),
            panic_signals: AtomicU64::new(0),
            panics_raised: AtomicU64::new(0),
            caught_panics: AtomicU64::new(0),
            exit_directives: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_flushed(&self) -> u64 {
        self.entries_flushed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn child_flushes(&self) -> u64 {
        self.child_flushes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn panic_signals(&self) -> u64 {
        self.panic_signals.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn panics_raised(&self) -> u64 {
        self.panics_raised.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn caught_panics(&self) -> u64 {
        self.caught_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn exit_directives(&self) -> u64 {
        self.exit_directives.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_entry_flushed(&self) -> u64 {
        self.entries_flushed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_child_flush(&self) -> u64 {
        self.child_flushes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_panic_signal(&self) -> u64 {
        self.panic_signals.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_panic_raised(&self) -> u64 {
        self.panics_raised.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_caught_panic(&self) -> u64 {
        self.caught_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_exit_directive(&self) -> u64 {
        self.exit_directives.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.entries_flushed.store(0, Ordering::Relaxed);
        self.child_flushes.store(0, Ordering::Relaxed);
        self.panic_signals.store(0, Ordering::Relaxed);
        self.panics_raised.store(0, Ordering::Relaxed);
        self.caught_panics.store(0, Ordering::Relaxed);
        self.exit_directives.store(0, Ordering::Relaxed);
    }
}

impl Default for FanoutMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FanoutMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_flushed: AtomicU64::new(self.entries_flushed()),
            child_flushes: AtomicU64::new(self.child_flushes()),
            panic_signals: AtomicU64::new(self.panic_signals()),
            panics_raised: AtomicU64::new(self.panics_raised()),
            caught_panics: AtomicU64::new(self.caught_panics()),
            exit_directives: AtomicU64::new(self.exit_directives()),
        }
    }
}

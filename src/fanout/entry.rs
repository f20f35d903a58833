//! Fan-out entry: one child entry per backend, driven in lock-step

use crate::core::{Entry, FanoutMetrics, LogContext, LogLevel, Termination};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

/// Entry returned by [`FanoutLogger`](super::FanoutLogger)
///
/// Every builder call is replayed on each child in creation order. `flush`
/// flushes every child even after one of them signalled a panic, then
/// reports at most one panic to the caller.
pub struct FanoutEntry {
    level: LogLevel,
    children: Vec<Box<dyn Entry>>,
    metrics: Arc<FanoutMetrics>,
}

impl FanoutEntry {
    pub(crate) fn new(
        level: LogLevel,
        children: Vec<Box<dyn Entry>>,
        metrics: Arc<FanoutMetrics>,
    ) -> Self {
        Self {
            level,
            children,
            metrics,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Replace every child, in order, with the result of `apply`
    fn broadcast<F>(mut self: Box<Self>, apply: F) -> Box<dyn Entry>
    where
        F: Fn(Box<dyn Entry>) -> Box<dyn Entry>,
    {
        self.children = std::mem::take(&mut self.children)
            .into_iter()
            .map(apply)
            .collect();
        self
    }
}

impl Entry for FanoutEntry {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn add_fields(self: Box<Self>, fields: &LogContext) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_fields(fields))
    }

    fn add_err(self: Box<Self>, err: &(dyn Error + 'static)) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_err(err))
    }

    fn add_error(self: Box<Self>, key: &str, err: &(dyn Error + 'static)) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_error(key, err))
    }

    fn add_bool(self: Box<Self>, key: &str, val: bool) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_bool(key, val))
    }

    fn add_int(self: Box<Self>, key: &str, val: i64) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_int(key, val))
    }

    fn add_str(self: Box<Self>, key: &str, val: &str) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_str(key, val))
    }

    fn add_time(self: Box<Self>, key: &str, val: DateTime<Utc>) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_time(key, val))
    }

    fn add_dur(self: Box<Self>, key: &str, val: Duration) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_dur(key, val))
    }

    fn add_any(self: Box<Self>, key: &str, val: serde_json::Value) -> Box<dyn Entry> {
        self.broadcast(|child| child.add_any(key, val.clone()))
    }

    /// Flush every child with the same message
    ///
    /// A child that returns [`Termination::Panic`], or unwinds while
    /// flushing, does not stop the loop; only the fact that it happened is
    /// kept. A child that returns [`Termination::Exit`] ends the loop at once
    /// and the directive is handed back: children after it are not flushed.
    fn flush(self: Box<Self>, message: &str) -> Result<(), Termination> {
        let FanoutEntry {
            children, metrics, ..
        } = *self;
        metrics.record_entry_flushed();

        let mut panicked = false;
        for (idx, child) in children.into_iter().enumerate() {
            metrics.record_child_flush();
            let outcome = panic::catch_unwind(AssertUnwindSafe(move || child.flush(message)));

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(Termination::Panic { .. })) => {
                    metrics.record_panic_signal();
                    panicked = true;
                }
                Ok(Err(exit @ Termination::Exit { .. })) => {
                    metrics.record_exit_directive();
                    return Err(exit);
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Child #{} panicked during flush: {}. \
                         Remaining children are still flushed.",
                        idx, panic_msg
                    );
                    metrics.record_caught_panic();
                    metrics.record_panic_signal();
                    panicked = true;
                }
            }
        }

        if panicked {
            metrics.record_panic_raised();
            Err(Termination::panic(message))
        } else {
            Ok(())
        }
    }
}

//! Fan-out combinator
//!
//! [`FanoutLogger`] broadcasts every logger operation to an ordered list of
//! child loggers, and [`FanoutEntry`] does the same for entry operations.
//! Flushing a fan-out entry flushes every child, collapses any number of
//! panic signals into one, and hands a fatal exit directive straight back.

pub mod builder;
pub mod entry;
pub mod logger;

pub use builder::FanoutBuilder;
pub use entry::FanoutEntry;
pub use logger::FanoutLogger;

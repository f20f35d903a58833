//! Termination signals produced by flushing at the two highest levels
//!
//! A flush at `Panic` asks the caller to unwind, a flush at `Fatal` asks the
//! caller to exit the process. Backends never do either themselves: they
//! return a [`Termination`] and the outermost caller decides, usually through
//! [`enforce`] or [`Termination::raise`].

use super::log_level::LogLevel;

/// Exit code requested by a fatal flush
pub const FATAL_EXIT_CODE: i32 = 1;

/// Control-flow directive returned by [`Entry::flush`](crate::Entry::flush)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Termination {
    /// Abnormal termination requested by a panic-level flush
    #[error("logger called at panic level with message: {message}")]
    Panic { message: String },

    /// Process exit requested by a fatal-level flush
    #[error("logger called at fatal level, exiting with code {code}")]
    Exit { code: i32 },
}

impl Termination {
    pub fn panic(message: impl Into<String>) -> Self {
        Termination::Panic {
            message: message.into(),
        }
    }

    pub fn exit(code: i32) -> Self {
        Termination::Exit { code }
    }

    /// The directive a flush at `level` produces, if any
    pub fn for_level(level: LogLevel, message: &str) -> Option<Self> {
        match level {
            LogLevel::Panic => Some(Termination::panic(message)),
            LogLevel::Fatal => Some(Termination::exit(FATAL_EXIT_CODE)),
            _ => None,
        }
    }

    /// Turn the directive into a real unwind or process exit
    pub fn raise(self) -> ! {
        match self {
            Termination::Exit { code } => std::process::exit(code),
            panic => std::panic::panic_any(panic.to_string()),
        }
    }
}

/// Apply a flush result at the composition root
///
/// Returns normally for `Ok`, otherwise raises the termination.
pub fn enforce(result: Result<(), Termination>) {
    if let Err(termination) = result {
        termination.raise();
    }
}

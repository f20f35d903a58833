//! Stack text derived from an error's `source()` chain

use std::error::Error;

/// Render an error and all of its sources, outermost first, one per line
///
/// ```
/// use rust_fanout_logger::core::error_stack;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// assert_eq!(error_stack(&err), "disk full");
/// ```
pub fn error_stack(err: &(dyn Error + 'static)) -> String {
    let mut lines = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    lines.join("\n")
}

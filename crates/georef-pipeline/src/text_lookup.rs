//! Injectable diagnostic text lookup.

use log::debug;

/// Pluggable lookup for user-visible text.
///
/// The only implementation shipped here is the inert [`NullTextLookup`];
/// the seam exists so an application can inject a real catalog without the
/// solvers or pipeline components depending on one.
pub trait TextLookup {
    /// Look up a replacement for `text` in the given `context`.
    ///
    /// Returns `None` when no translation is available.
    fn lookup(&self, context: &str, text: &str) -> Option<String>;
}

/// Null-object lookup for development tracing.
///
/// Records every request in the debug log and always reports that no
/// translation is available, so it can be left injected without affecting
/// behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTextLookup;

impl TextLookup for NullTextLookup {
    fn lookup(&self, context: &str, text: &str) -> Option<String> {
        debug!("text lookup: {context} / {text}");
        None
    }
}

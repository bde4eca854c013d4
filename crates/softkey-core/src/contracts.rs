//! Capability traits between the engine and its host collaborators.
//!
//! The engine never renders, never touches assets, and never talks to a
//! platform input-method service; these traits are the whole surface it
//! needs from the outside world. All calls happen synchronously on the
//! single dispatch path, and implementations must not re-enter the engine.

use crate::layout::Layout;

/// Ranked phonetic decoder behind the composing session.
///
/// Implementations keep an internal search cursor: `search` positions it on
/// a buffer, `choose` consumes from the last search, `reset` drops it.
/// `reset` must be safe to call repeatedly and while no search is active.
pub trait Dictionary {
    /// Ranked candidates for `buffer`, at most `max` entries.
    fn search(&mut self, buffer: &str, max: usize) -> Vec<String>;

    /// Mark candidate `index` of the last search as used, returning its text.
    fn choose(&mut self, index: usize) -> String;

    /// Drop any internal search state.
    fn reset(&mut self);
}

/// Whatever the host considers "the text". Two primitives only; cursor and
/// selection semantics stay on the host side.
pub trait CommitTarget {
    /// Insert `text` at the cursor.
    fn insert(&mut self, text: &str);

    /// Delete the character before the cursor, if any.
    fn delete_last(&mut self);
}

/// Candidate display owned by the host UI.
///
/// Showing an empty list is equivalent to `clear`. Clicks are reported back
/// through `KeyboardEngine::select_candidate`, never by calling into the
/// engine from inside `show`.
pub trait CandidateSink {
    fn show(&mut self, candidates: &[String]);

    fn clear(&mut self);
}

/// Receives the accepted layout after every `set_layout`, e.g. so the host
/// can flip text direction when the Arabic key-map comes up.
pub trait LayoutObserver {
    fn layout_changed(&mut self, layout: Layout);
}

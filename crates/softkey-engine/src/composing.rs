//! Pinyin composing session and the strategy seam the engine dispatches to.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use softkey_core::{CandidateSink, CommitTarget, Dictionary};

/// Composing-path strategy consulted by the engine for the key classes that
/// may be intercepted. The consumed results tell dispatch whether to fall
/// back to plain text-field behavior, so dispatch stays total either way.
///
/// [`ComposingSession`] is the built-in implementation; hosts can install
/// their own with `KeyboardEngine::set_composer`.
pub trait Composer {
    /// A literal key while the phonetic layout is active.
    fn on_char(&mut self, ch: &str);

    /// Backspace. `false` means nothing was composing and the event should
    /// fall through to the text field.
    fn on_backspace(&mut self) -> bool;

    /// Space. Consuming implementations commit something to `target`.
    fn on_space(&mut self, target: &mut dyn CommitTarget) -> bool;

    /// Candidate `index` clicked in the host UI.
    fn select(&mut self, index: usize, target: &mut dyn CommitTarget) -> bool;

    /// Discard composing state. Idempotent.
    fn clear(&mut self);

    fn is_composing(&self) -> bool;
}

/// Owns the phonetic input buffer, drives the dictionary and the candidate
/// display, and commits through whatever target the engine passes in.
pub struct ComposingSession {
    dict: Rc<RefCell<dyn Dictionary>>,
    sink: Rc<RefCell<dyn CandidateSink>>,
    buffer: String,
    /// Length of the last list pushed to the sink; bounds click indices.
    shown: usize,
    max_candidates: usize,
}

impl ComposingSession {
    pub fn new(
        dict: Rc<RefCell<dyn Dictionary>>,
        sink: Rc<RefCell<dyn CandidateSink>>,
        max_candidates: usize,
    ) -> Self {
        Self {
            dict,
            sink,
            buffer: String::new(),
            shown: 0,
            max_candidates,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append one phonetic character and refresh the candidate display.
    pub fn append_char(&mut self, ch: &str) {
        self.buffer.push_str(ch);
        self.refresh();
    }

    /// Pop the last phonetic character. `false` if the buffer was empty.
    pub fn remove_last(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        self.buffer.pop();
        self.refresh();
        true
    }

    /// Commit the top-ranked candidate, falling back to the raw buffer text
    /// when the dictionary has nothing. `false` if the buffer was empty.
    pub fn commit_best(&mut self, target: &mut dyn CommitTarget) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        let best = self
            .dict
            .borrow_mut()
            .search(&self.buffer, 1)
            .into_iter()
            .next();
        let text = best.unwrap_or_else(|| self.buffer.clone());
        target.insert(&text);
        self.clear_all();
        true
    }

    /// Commit the candidate the host reported as clicked. Indices outside
    /// the last shown list are ignored.
    pub fn commit_by_index(&mut self, index: usize, target: &mut dyn CommitTarget) -> bool {
        if index >= self.shown {
            debug!(index, shown = self.shown, "candidate index out of range");
            return false;
        }
        let text = self.dict.borrow_mut().choose(index);
        target.insert(&text);
        self.clear_all();
        true
    }

    fn refresh(&mut self) {
        if self.buffer.is_empty() {
            self.shown = 0;
            self.sink.borrow_mut().clear();
            return;
        }
        let candidates = self
            .dict
            .borrow_mut()
            .search(&self.buffer, self.max_candidates);
        self.shown = candidates.len();
        self.sink.borrow_mut().show(&candidates);
    }

    fn clear_all(&mut self) {
        self.buffer.clear();
        self.shown = 0;
        self.dict.borrow_mut().reset();
        self.sink.borrow_mut().clear();
    }
}

impl Composer for ComposingSession {
    fn on_char(&mut self, ch: &str) {
        self.append_char(ch);
    }

    fn on_backspace(&mut self) -> bool {
        self.remove_last()
    }

    fn on_space(&mut self, target: &mut dyn CommitTarget) -> bool {
        self.commit_best(target)
    }

    fn select(&mut self, index: usize, target: &mut dyn CommitTarget) -> bool {
        self.commit_by_index(index, target)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }
}

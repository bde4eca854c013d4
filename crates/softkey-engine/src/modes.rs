//! Mode inference, mode-entry effects, layout transitions, and the
//! attach/detach lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use softkey_core::{CandidateSink, CommitTarget, FieldDescriptor, InputMode, Layout};

use crate::composing::ComposingSession;
use crate::KeyboardEngine;

impl KeyboardEngine {
    /// Bind the engine to a field. Runs mode inference unless the host has
    /// locked the mode, applies mode-entry effects, and re-creates or tears
    /// down the composing session for the resolved mode and sink.
    ///
    /// Attaching again with the same descriptor resolves to the same state.
    pub fn attach(
        &mut self,
        field: FieldDescriptor,
        target: Box<dyn CommitTarget>,
        sink: Option<Rc<RefCell<dyn CandidateSink>>>,
    ) {
        if let Some(mut composer) = self.composer.take() {
            composer.clear();
        }
        self.target = Some(target);
        self.sink = sink;
        if !self.mode_locked {
            let inferred = field.infer_mode();
            debug!(kind = ?field.kind, ?inferred, "inferred input mode");
            self.mode = inferred;
        }
        self.apply_mode_entry();
        self.rewire_session();
    }

    /// Drop the bound field, sink, and composing state. Safe to call
    /// repeatedly and while nothing is attached.
    pub fn detach(&mut self) {
        if let Some(mut composer) = self.composer.take() {
            composer.clear();
        }
        if let Some(sink) = self.sink.take() {
            sink.borrow_mut().clear();
        }
        self.target = None;
        self.dict.borrow_mut().reset();
    }

    /// Host-initiated mode change. Anything but AUTO locks the mode, so
    /// later attaches skip inference until the host sets AUTO again.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.mode_locked = mode != InputMode::Auto;
        self.apply_mode_entry();
        self.rewire_session();
    }

    /// No-op when `layout` is already current. Otherwise resets one-shot
    /// shift, notifies the layout observer, and discards any composing state
    /// when leaving the phonetic layout (no partial auto-commit).
    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        debug!(from = ?self.layout, to = ?layout, "layout changed");
        self.layout = layout;
        self.shift = false;
        if let Some(observer) = self.observer.as_mut() {
            observer.layout_changed(layout);
        }
        if layout != Layout::ZhPinyin {
            if let Some(composer) = self.composer.as_mut() {
                composer.clear();
            }
        }
    }

    pub(super) fn apply_mode_entry(&mut self) {
        match self.mode {
            InputMode::Auto => {}
            InputMode::Number => {
                if self.layout != Layout::Numeric {
                    self.set_layout(Layout::Numeric);
                }
            }
            InputMode::Password => {
                if self.layout != Layout::En {
                    self.set_layout(Layout::En);
                }
                if let Some(sink) = &self.sink {
                    sink.borrow_mut().clear();
                }
            }
            InputMode::Text => {
                if matches!(self.layout, Layout::Numeric | Layout::Symbols) {
                    self.set_layout(Layout::En);
                }
            }
        }
    }

    /// A composing session exists exactly while the mode is TEXT and a
    /// candidate sink was supplied.
    pub(super) fn rewire_session(&mut self) {
        let sink = match (self.mode, &self.sink) {
            (InputMode::Text, Some(sink)) => Rc::clone(sink),
            _ => {
                if let Some(mut composer) = self.composer.take() {
                    composer.clear();
                }
                self.dict.borrow_mut().reset();
                return;
            }
        };
        if self.composer.is_none() {
            self.composer = Some(Box::new(ComposingSession::new(
                Rc::clone(&self.dict),
                sink,
                self.settings.candidates.max,
            )));
        }
    }

    pub(super) fn cycle_language(&mut self) {
        match self.mode {
            // Pinned: the cycle key never leaves the mode's home layout.
            InputMode::Number => self.set_layout(Layout::Numeric),
            InputMode::Password => self.set_layout(Layout::En),
            _ => self.set_layout(self.layout.next_language()),
        }
    }
}

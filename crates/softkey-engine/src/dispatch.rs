//! The key-event state machine: one logical label in, one effect out.

use std::time::Instant;

use tracing::debug_span;

use softkey_core::label;
use softkey_core::{InputMode, Layout};

use crate::repeat::RepeatToken;
use crate::KeyboardEngine;

impl KeyboardEngine {
    /// Process one logical key event. Unrecognized labels are literal
    /// characters, never rejected.
    pub fn dispatch(&mut self, key: &str) {
        let _span = debug_span!("dispatch", key).entered();
        match key {
            label::BACKSPACE => self.dispatch_backspace(),
            // Enter never commits the composing buffer; it stays as typed.
            label::ENTER => self.insert_text("\n"),
            label::SPACE => {
                if !self.composing_space() {
                    self.insert_text(" ");
                }
            }
            label::SHIFT => self.shift = !self.shift,
            label::SYMBOLS => self.set_layout(Layout::Symbols),
            label::ABC => {
                let next = if self.input_mode() == InputMode::Number {
                    Layout::Numeric
                } else {
                    Layout::En
                };
                self.set_layout(next);
            }
            label::LANG => self.cycle_language(),
            literal => self.dispatch_literal(literal),
        }
    }

    /// Host reports a click on candidate `index` of the currently shown
    /// list. Routed to the composing strategy, which validates the index
    /// against the last list it pushed to the sink.
    pub fn select_candidate(&mut self, index: usize) {
        if !self.composing_active() {
            return;
        }
        if let (Some(composer), Some(target)) = (self.composer.as_mut(), self.target.as_mut()) {
            composer.select(index, target.as_mut());
        }
    }

    /// Backspace key pressed: delete once immediately and arm auto-repeat.
    pub fn backspace_press(&mut self, now: Instant) -> RepeatToken {
        self.dispatch_backspace();
        self.repeat.start(now)
    }

    /// Fire any repeats due at `now`. The host pumps this from its timer
    /// loop; a poll while no press is armed fires nothing.
    pub fn backspace_poll(&mut self, now: Instant) {
        for _ in 0..self.repeat.due(now) {
            self.dispatch_backspace();
        }
    }

    /// Release or cancel the press that produced `token`. Idempotent; a
    /// token from a superseded press cancels nothing.
    pub fn backspace_release(&mut self, token: RepeatToken) {
        self.repeat.cancel(token);
    }

    fn dispatch_literal(&mut self, key: &str) {
        if self.composing_active() {
            if let Some(composer) = self.composer.as_mut() {
                composer.on_char(key);
            }
            return;
        }
        if self.shift {
            self.insert_text(&key.to_uppercase());
        } else {
            self.insert_text(key);
        }
        self.shift = false;
    }

    pub(super) fn dispatch_backspace(&mut self) {
        if self.composing_active() {
            if let Some(composer) = self.composer.as_mut() {
                if composer.on_backspace() {
                    return;
                }
            }
        }
        if let Some(target) = self.target.as_mut() {
            target.delete_last();
        }
    }

    fn composing_space(&mut self) -> bool {
        if !self.composing_active() {
            return false;
        }
        match (self.composer.as_mut(), self.target.as_mut()) {
            (Some(composer), Some(target)) => composer.on_space(target.as_mut()),
            _ => false,
        }
    }

    fn insert_text(&mut self, text: &str) {
        if let Some(target) = self.target.as_mut() {
            target.insert(text);
        }
    }

    /// The composing strategy only engages on the phonetic layout.
    fn composing_active(&self) -> bool {
        self.layout() == Layout::ZhPinyin && self.composer.is_some()
    }
}

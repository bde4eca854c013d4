//! Layout/mode state machine and key-event dispatch for the in-app keyboard.
//!
//! `KeyboardEngine` receives already-decoded logical key labels from the
//! rendering layer and turns them into text edits, layout changes, or
//! composing-session updates. It works without a platform input-method
//! service; rendering and touch handling stay on the host side.

mod composing;
mod dispatch;
mod modes;
mod repeat;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use softkey_core::keymap::{KeyMap, KeyMapProvider};
use softkey_core::settings::Settings;
use softkey_core::{CandidateSink, CommitTarget, Dictionary, InputMode, Layout, LayoutObserver};

pub use composing::{Composer, ComposingSession};
pub use repeat::RepeatToken;

use repeat::BackspaceRepeat;

/// Stateful keyboard engine: owns the current layout, the resolved input
/// mode (and whether the host locked it), one-shot shift, the backspace
/// repeat schedule, and the composing strategy while one is wired.
pub struct KeyboardEngine {
    dict: Rc<RefCell<dyn Dictionary>>,
    keymaps: Box<dyn KeyMapProvider>,
    settings: Settings,

    layout: Layout,
    mode: InputMode,
    mode_locked: bool,
    shift: bool,

    target: Option<Box<dyn CommitTarget>>,
    sink: Option<Rc<RefCell<dyn CandidateSink>>>,
    composer: Option<Box<dyn Composer>>,

    observer: Option<Box<dyn LayoutObserver>>,
    repeat: BackspaceRepeat,
}

impl KeyboardEngine {
    pub fn new(
        dict: Rc<RefCell<dyn Dictionary>>,
        keymaps: Box<dyn KeyMapProvider>,
        settings: Settings,
    ) -> Self {
        let repeat = BackspaceRepeat::new(
            settings.repeat.initial_delay(),
            settings.repeat.interval(),
        );
        Self {
            dict,
            keymaps,
            settings,
            layout: Layout::En,
            mode: InputMode::Auto,
            mode_locked: false,
            shift: false,
            target: None,
            sink: None,
            composer: None,
            observer: None,
            repeat,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn is_composing(&self) -> bool {
        self.composer.as_ref().is_some_and(|c| c.is_composing())
    }

    /// Key-map for the current layout, for the rendering collaborator.
    pub fn active_key_map(&self) -> KeyMap {
        self.keymaps.key_map(self.layout)
    }

    pub fn set_layout_observer(&mut self, observer: Box<dyn LayoutObserver>) {
        self.observer = Some(observer);
    }

    /// Replace the active composing strategy. The built-in session is
    /// re-wired on the next attach or mode change.
    pub fn set_composer(&mut self, composer: Box<dyn Composer>) {
        self.composer = Some(composer);
    }
}

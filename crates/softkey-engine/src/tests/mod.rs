
use std::cell::RefCell;
use std::rc::Rc;

use softkey_core::keymap::BuiltinKeyMaps;
use softkey_core::settings::Settings;
use softkey_core::{CandidateSink, CommitTarget, Dictionary, FieldDescriptor, FieldKind};

use super::KeyboardEngine;

/// Decoder stub: a fixed ranked list for any non-empty buffer, with call
/// records the tests assert on.
pub(super) struct StubDictionary {
    pub(super) candidates: Vec<String>,
    pub(super) last_search: Option<String>,
    pub(super) reset_calls: usize,
}

impl StubDictionary {
    pub(super) fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
            last_search: None,
            reset_calls: 0,
        }
    }

    /// The ranked list for "ni" used throughout the candidate tests.
    pub(super) fn ni() -> Self {
        Self::new(&["你", "拟", "尼", "呢", "泥"])
    }

    pub(super) fn empty() -> Self {
        Self::new(&[])
    }
}

impl Dictionary for StubDictionary {
    fn search(&mut self, buffer: &str, max: usize) -> Vec<String> {
        self.last_search = Some(buffer.to_string());
        self.candidates.iter().take(max).cloned().collect()
    }

    fn choose(&mut self, index: usize) -> String {
        self.candidates.get(index).cloned().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.reset_calls += 1;
    }
}

/// Sink stub recording the last shown list.
#[derive(Default)]
pub(super) struct RecordingSink {
    pub(super) shown: Vec<String>,
    pub(super) clear_calls: usize,
}

impl CandidateSink for RecordingSink {
    fn show(&mut self, candidates: &[String]) {
        self.shown = candidates.to_vec();
    }

    fn clear(&mut self) {
        self.shown.clear();
        self.clear_calls += 1;
    }
}

/// Commit target appending into a shared string buffer.
pub(super) struct BufferTarget(pub(super) Rc<RefCell<String>>);

impl CommitTarget for BufferTarget {
    fn insert(&mut self, text: &str) {
        self.0.borrow_mut().push_str(text);
    }

    fn delete_last(&mut self) {
        self.0.borrow_mut().pop();
    }
}

pub(super) struct Fixture {
    pub(super) engine: KeyboardEngine,
    pub(super) dict: Rc<RefCell<StubDictionary>>,
    pub(super) sink: Rc<RefCell<RecordingSink>>,
    pub(super) text: Rc<RefCell<String>>,
}

impl Fixture {
    /// Engine attached to a plain text field with a candidate sink.
    pub(super) fn text_field() -> Self {
        Self::with_dict(StubDictionary::ni())
    }

    pub(super) fn with_dict(dict: StubDictionary) -> Self {
        let dict = Rc::new(RefCell::new(dict));
        let sink: Rc<RefCell<RecordingSink>> = Rc::new(RefCell::new(RecordingSink::default()));
        let text = Rc::new(RefCell::new(String::new()));
        let mut engine =
            KeyboardEngine::new(dict.clone(), Box::new(BuiltinKeyMaps), Settings::default());
        engine.attach(
            FieldDescriptor::new(FieldKind::Text),
            Box::new(BufferTarget(text.clone())),
            Some(sink.clone()),
        );
        Self {
            engine,
            dict,
            sink,
            text,
        }
    }

    pub(super) fn attach_kind(&mut self, kind: FieldKind) {
        self.engine.attach(
            FieldDescriptor::new(kind),
            Box::new(BufferTarget(self.text.clone())),
            Some(self.sink.clone()),
        );
    }

    pub(super) fn attach_kind_no_sink(&mut self, kind: FieldKind) {
        self.engine.attach(
            FieldDescriptor::new(kind),
            Box::new(BufferTarget(self.text.clone())),
            None,
        );
    }

    pub(super) fn type_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.engine.dispatch(key);
        }
    }

    pub(super) fn committed(&self) -> String {
        self.text.borrow().clone()
    }

    pub(super) fn shown(&self) -> Vec<String> {
        self.sink.borrow().shown.clone()
    }
}

//! Key-map data handed to the rendering collaborator.
//!
//! Language key-maps arrive pre-parsed from the host (asset loading is not
//! the engine's job). SYMBOLS and NUMERIC are fixed and ship here, as does
//! the minimal QWERTY fallback used when a provider has nothing better for a
//! language layout.

use tracing::debug;

use crate::label;
use crate::layout::Layout;

/// Ordered rows of logical key labels for one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub rows: Vec<Vec<String>>,
}

impl KeyMap {
    pub fn from_rows<R, L>(rows: R) -> Self
    where
        R: IntoIterator<Item = L>,
        L: IntoIterator<Item = &'static str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Append the control row (`lang`, `123`, `space`, `enter`) that closes
    /// every language key-map.
    pub fn with_control_row(mut self) -> Self {
        self.rows.push(
            [label::LANG, label::SYMBOLS, label::SPACE, label::ENTER]
                .map(str::to_owned)
                .to_vec(),
        );
        self
    }
}

/// Source of pre-parsed key-maps, one per layout.
pub trait KeyMapProvider {
    fn key_map(&self, layout: Layout) -> KeyMap;
}

/// Provider backed entirely by the built-in maps: real SYMBOLS/NUMERIC rows,
/// fallback QWERTY for the language layouts. Hosts with parsed layout assets
/// supply their own provider instead.
pub struct BuiltinKeyMaps;

impl KeyMapProvider for BuiltinKeyMaps {
    fn key_map(&self, layout: Layout) -> KeyMap {
        match layout {
            Layout::Symbols => symbols_key_map(),
            Layout::Numeric => numeric_key_map(),
            Layout::En | Layout::ZhPinyin | Layout::Fr | Layout::Ar => {
                debug!(?layout, "no parsed key-map, using fallback qwerty");
                fallback_qwerty().with_control_row()
            }
        }
    }
}

pub fn symbols_key_map() -> KeyMap {
    KeyMap::from_rows([
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
        vec!["@", "#", "$", "%", "&", "*", "-", "+", "(", ")"],
        vec![label::ABC, "_", "\"", "'", ":", ";", "!", "?", label::BACKSPACE],
        vec![label::LANG, label::SPACE, label::ENTER],
    ])
}

pub fn numeric_key_map() -> KeyMap {
    KeyMap::from_rows([
        vec!["1", "2", "3"],
        vec!["4", "5", "6"],
        vec!["7", "8", "9"],
        vec![label::SYMBOLS, "0", label::BACKSPACE],
        vec![label::LANG, label::ENTER],
    ])
}

/// Minimal QWERTY used when a language layout has no parsed rows.
pub fn fallback_qwerty() -> KeyMap {
    KeyMap::from_rows([
        vec!["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
        vec!["a", "s", "d", "f", "g", "h", "j", "k", "l"],
        vec![label::SHIFT, "z", "x", "c", "v", "b", "n", "m", label::BACKSPACE],
    ])
}

/// Display caption for a logical key label on the given layout. Literal keys
/// caption as themselves.
pub fn key_caption(key: &str, layout: Layout) -> &str {
    match key {
        label::SPACE => "Space",
        label::ENTER => "Enter",
        label::ABC => "ABC",
        label::SYMBOLS => {
            if layout == Layout::Numeric {
                "#+="
            } else {
                "123"
            }
        }
        label::LANG => match layout {
            Layout::En => "EN",
            Layout::ZhPinyin => "中",
            Layout::Fr => "FR",
            Layout::Ar => "AR",
            Layout::Symbols => "#",
            Layout::Numeric => "123",
        },
        other => other,
    }
}

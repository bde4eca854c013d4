/// Active symbol set / key-map identity.
///
/// Pure state: which key-map the renderer shows and which dispatch rules
/// apply. Mutated only through `KeyboardEngine::set_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    En,
    ZhPinyin,
    Fr,
    Ar,
    Symbols,
    Numeric,
}

impl Layout {
    /// Successor in the `lang`-key cycle EN → ZH_PINYIN → FR → AR → EN.
    /// SYMBOLS and NUMERIC re-enter the cycle at EN.
    pub fn next_language(self) -> Layout {
        match self {
            Layout::En => Layout::ZhPinyin,
            Layout::ZhPinyin => Layout::Fr,
            Layout::Fr => Layout::Ar,
            Layout::Ar | Layout::Symbols | Layout::Numeric => Layout::En,
        }
    }
}

/// Coarse field classification governing which layouts and transitions are
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Deferred: resolved into one of the concrete modes at attach time and
    /// never observed afterwards unless the host resets it.
    Auto,
    Text,
    Number,
    Password,
}

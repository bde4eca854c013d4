//! Shared data model and boundary contracts for the in-app keyboard engine.
//!
//! Everything the engine and its host collaborators (renderer, text field,
//! phonetic decoder) agree on lives here: layout and input-mode identities,
//! the capability traits, key-map data, and TOML-backed settings.

pub mod contracts;
pub mod field;
pub mod keymap;
pub mod label;
pub mod settings;

mod layout;

pub use contracts::{CandidateSink, CommitTarget, Dictionary, LayoutObserver};
pub use field::{FieldDescriptor, FieldKind};
pub use layout::{InputMode, Layout};

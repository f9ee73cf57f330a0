//! Recite - binding-resolution registry for a flashcard review screen
//!
//! This crate provides the fixed catalog of reviewer actions, their default
//! input bindings, and the resolution logic that prefers user-configured
//! overrides over the hardcoded defaults.

pub mod flag;
pub mod keymap;

// Re-export commonly used types
pub use flag::Flag;
pub use keymap::{
    default_bindings, load_keymap_file, parse_binding_list, serialize_binding_list, CardSide,
    KeyCode, KeymapError, MappableAction, MenuDisplayType, ModifierKeys, PreferenceReader,
    Resources, ReviewerBinding, Trigger, ViewerAction,
};

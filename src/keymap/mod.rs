//! Keymap system for the review screen
//!
//! This module owns the closed catalog of reviewer actions and how key
//! bindings attach to them:
//!
//! - `action`: the [`ViewerAction`] catalog with menu metadata
//! - `types`: [`KeyCode`], [`Trigger`], [`ModifierKeys`], [`CardSide`]
//! - `binding`: [`ReviewerBinding`], one trigger with its constraints
//! - `defaults`: the hardcoded default binding table
//! - `config`: binding-string codec and YAML keymap files
//! - `resolver`: preference-backed resolution with default fallback

mod action;
mod binding;
mod config;
mod defaults;
mod resolver;
mod types;

pub use action::{MenuDisplayType, Resources, ViewerAction};
pub use binding::ReviewerBinding;
pub use config::{
    get_user_config_path, load_keymap_file, parse_binding, parse_binding_list, parse_keymap_yaml,
    serialize_binding, serialize_binding_list, BindingEntry, KeymapConfig, KeymapError,
};
pub use defaults::default_bindings;
pub use resolver::{MappableAction, PreferenceReader};
pub use types::{CardSide, KeyCode, ModifierKeys, Trigger};

#[cfg(test)]
mod tests;

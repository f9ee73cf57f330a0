//! Binding resolution against the preference store
//!
//! The resolution rule is presence-based: an action's bindings come from the
//! preference store when its key holds any value (even one that parses to an
//! empty list), and from the hardcoded defaults only when the key is absent.
//! An explicit empty override is how a user unbinds an action entirely.

use std::collections::HashMap;

use super::action::ViewerAction;
use super::binding::ReviewerBinding;
use super::config::{parse_binding_list, KeymapError};
use super::defaults::default_bindings;

/// Read-only access to the preference store
///
/// Only string lookup is needed. `None` means the key has never been written,
/// which is different from an empty stored value.
pub trait PreferenceReader {
    fn get_string(&self, key: &str) -> Option<String>;
}

impl PreferenceReader for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// An action whose bindings can be resolved from preferences
pub trait MappableAction {
    /// Preference key under which the user's override is stored
    fn preference_key(&self) -> String;

    /// Resolve the active bindings: stored override if present, defaults
    /// otherwise
    fn bindings(&self, prefs: &dyn PreferenceReader) -> Result<Vec<ReviewerBinding>, KeymapError>;
}

impl MappableAction for ViewerAction {
    fn preference_key(&self) -> String {
        ViewerAction::preference_key(*self)
    }

    fn bindings(&self, prefs: &dyn PreferenceReader) -> Result<Vec<ReviewerBinding>, KeymapError> {
        match prefs.get_string(&MappableAction::preference_key(self)) {
            Some(stored) => parse_binding_list(&stored),
            None => Ok(default_bindings(*self)),
        }
    }
}

//! Binding serialization and keymap file configuration
//!
//! Two layers live here: the compact binding-string format stored in the
//! preference store (one string per action, whitespace-joined bindings), and
//! YAML keymap files for bulk user overrides.
//!
//! Binding grammar: `[mod+]*(key:<name>|char:<c>)[@question|@answer|@both]`
//! with modifiers `ctrl`, `shift`, `alt`, `anyshift`. Examples:
//! `ctrl+key:z`, `anyshift+char:*`, `key:enter@answer`. An omitted side
//! means both. The empty string is the valid empty binding list.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::action::ViewerAction;
use super::binding::ReviewerBinding;
use super::types::{CardSide, KeyCode, ModifierKeys, Trigger};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingEntry>,
}

/// A single override entry from YAML
///
/// An empty `keys` list is a real override: it unbinds the action.
#[derive(Debug, Deserialize)]
pub struct BindingEntry {
    pub action: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Errors from binding parsing and keymap configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidSide(String),
    UnknownAction(String),
    UnknownMenuId(u32),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidSide(s) => write!(f, "Invalid card side: {}", s),
            KeymapError::UnknownAction(a) => write!(f, "Unknown action: {}", a),
            KeymapError::UnknownMenuId(id) => write!(f, "Unknown menu id: {}", id),
        }
    }
}

impl std::error::Error for KeymapError {}

/// Parse a whitespace-joined binding list, as stored in a preference value
///
/// The empty (or all-whitespace) string parses to the empty list.
pub fn parse_binding_list(s: &str) -> Result<Vec<ReviewerBinding>, KeymapError> {
    s.split_whitespace().map(parse_binding).collect()
}

/// Serialize a binding list into a single preference string
pub fn serialize_binding_list(bindings: &[ReviewerBinding]) -> String {
    bindings
        .iter()
        .map(serialize_binding)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a single binding string like `ctrl+key:num1` or `anyshift+char:*`
pub fn parse_binding(s: &str) -> Result<ReviewerBinding, KeymapError> {
    let marker = s
        .find("key:")
        .or_else(|| s.find("char:"))
        .ok_or_else(|| KeymapError::InvalidKey(s.to_string()))?;

    let mods = parse_modifiers(&s[..marker], s)?;
    let rest = &s[marker..];

    let (trigger, side) = if let Some(after) = rest.strip_prefix("key:") {
        let (name, side) = match after.find('@') {
            Some(at) => (&after[..at], parse_side(&after[at + 1..])?),
            None => (after, CardSide::Both),
        };
        (Trigger::Key(parse_key_code(name)?), side)
    } else if let Some(after) = rest.strip_prefix("char:") {
        // Exactly one character, then an optional side suffix. The character
        // itself may be '@', so the suffix is only looked for after it.
        let c = after
            .chars()
            .next()
            .ok_or_else(|| KeymapError::InvalidKey(s.to_string()))?;
        let remainder = &after[c.len_utf8()..];
        let side = match remainder.strip_prefix('@') {
            Some(side) => parse_side(side)?,
            None if remainder.is_empty() => CardSide::Both,
            None => return Err(KeymapError::InvalidKey(s.to_string())),
        };
        (Trigger::Unicode(c), side)
    } else {
        return Err(KeymapError::InvalidKey(s.to_string()));
    };

    Ok(ReviewerBinding::new(trigger, mods, side))
}

/// Serialize a single binding into the grammar accepted by [`parse_binding`]
pub fn serialize_binding(binding: &ReviewerBinding) -> String {
    let mut s = String::new();
    if binding.mods.is_any_shift() {
        s.push_str("anyshift+");
    }
    if binding.mods.shift() {
        s.push_str("shift+");
    }
    if binding.mods.ctrl() {
        s.push_str("ctrl+");
    }
    if binding.mods.alt() {
        s.push_str("alt+");
    }
    match binding.trigger {
        Trigger::Key(code) => {
            s.push_str("key:");
            s.push_str(&key_code_token(code));
        }
        Trigger::Unicode(c) => {
            s.push_str("char:");
            s.push(c);
        }
    }
    match binding.side {
        CardSide::Both => {}
        CardSide::Question => s.push_str("@question"),
        CardSide::Answer => s.push_str("@answer"),
    }
    s
}

fn parse_modifiers(mods_str: &str, full: &str) -> Result<ModifierKeys, KeymapError> {
    if mods_str.is_empty() {
        return Ok(ModifierKeys::NONE);
    }
    // The modifier prefix always ends with the '+' that joins it to the
    // trigger token.
    let Some(trimmed) = mods_str.strip_suffix('+') else {
        return Err(KeymapError::InvalidKey(full.to_string()));
    };

    let mut mods = ModifierKeys::NONE;
    for part in trimmed.split('+') {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => mods = mods | ModifierKeys::CTRL,
            "shift" => mods = mods | ModifierKeys::SHIFT,
            "alt" => mods = mods | ModifierKeys::ALT,
            "anyshift" => mods = mods | ModifierKeys::ANY_SHIFT,
            _ => return Err(KeymapError::InvalidKey(full.to_string())),
        }
    }
    Ok(mods)
}

fn parse_side(side: &str) -> Result<CardSide, KeymapError> {
    match side.to_lowercase().as_str() {
        "question" => Ok(CardSide::Question),
        "answer" => Ok(CardSide::Answer),
        "both" => Ok(CardSide::Both),
        _ => Err(KeymapError::InvalidSide(side.to_string())),
    }
}

/// Parse a key code from its token
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),

        "num0" => Ok(KeyCode::Numpad0),
        "num1" => Ok(KeyCode::Numpad1),
        "num2" => Ok(KeyCode::Numpad2),
        "num3" => Ok(KeyCode::Numpad3),
        "num4" => Ok(KeyCode::Numpad4),
        "num5" => Ok(KeyCode::Numpad5),
        "num6" => Ok(KeyCode::Numpad6),
        "num7" => Ok(KeyCode::Numpad7),
        "num8" => Ok(KeyCode::Numpad8),
        "num9" => Ok(KeyCode::Numpad9),
        "num_enter" | "numenter" => Ok(KeyCode::NumpadEnter),

        "gamepad_a" => Ok(KeyCode::GamepadA),
        "gamepad_b" => Ok(KeyCode::GamepadB),
        "gamepad_x" => Ok(KeyCode::GamepadX),
        "gamepad_y" => Ok(KeyCode::GamepadY),
        "dpad_center" => Ok(KeyCode::DpadCenter),

        other => {
            // Function keys: f1-f24
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=24).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            Err(KeymapError::InvalidKey(format!("Unknown key: {}", key)))
        }
    }
}

/// Canonical token for a key code, inverse of [`parse_key_code`]
fn key_code_token(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Escape => "escape".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Space => "space".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Numpad0 => "num0".to_string(),
        KeyCode::Numpad1 => "num1".to_string(),
        KeyCode::Numpad2 => "num2".to_string(),
        KeyCode::Numpad3 => "num3".to_string(),
        KeyCode::Numpad4 => "num4".to_string(),
        KeyCode::Numpad5 => "num5".to_string(),
        KeyCode::Numpad6 => "num6".to_string(),
        KeyCode::Numpad7 => "num7".to_string(),
        KeyCode::Numpad8 => "num8".to_string(),
        KeyCode::Numpad9 => "num9".to_string(),
        KeyCode::NumpadEnter => "num_enter".to_string(),
        KeyCode::GamepadA => "gamepad_a".to_string(),
        KeyCode::GamepadB => "gamepad_b".to_string(),
        KeyCode::GamepadX => "gamepad_x".to_string(),
        KeyCode::GamepadY => "gamepad_y".to_string(),
        KeyCode::DpadCenter => "dpad_center".to_string(),
    }
}

/// Parse a keymap YAML document into per-action override lists
pub fn parse_keymap_yaml(
    yaml: &str,
) -> Result<Vec<(ViewerAction, Vec<ReviewerBinding>)>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut overrides = Vec::with_capacity(config.bindings.len());
    for entry in config.bindings {
        let action = ViewerAction::from_name(&entry.action)
            .ok_or_else(|| KeymapError::UnknownAction(entry.action.clone()))?;
        let bindings = entry
            .keys
            .iter()
            .map(|k| parse_binding(k))
            .collect::<Result<Vec<_>, _>>()?;
        overrides.push((action, bindings));
    }
    Ok(overrides)
}

/// Load per-action overrides from a YAML keymap file
pub fn load_keymap_file(
    path: &Path,
) -> Result<Vec<(ViewerAction, Vec<ReviewerBinding>)>, KeymapError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    let overrides = parse_keymap_yaml(&content)?;
    tracing::info!(
        "Loaded keymap from {} ({} overrides)",
        path.display(),
        overrides.len()
    );
    Ok(overrides)
}

/// Get the user's keymap configuration path
///
/// Returns `~/.config/recite/keymap.yaml` on Unix,
/// `%APPDATA%\recite\keymap.yaml` on Windows.
pub fn get_user_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join("recite").join("keymap.yaml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::config_dir().map(|config| config.join("recite").join("keymap.yaml"))
    }
}

//! Core types for the reviewer keymap: ModifierKeys, KeyCode, Trigger, CardSide

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
///
/// Besides the exact shift/ctrl/alt triple, a binding may carry the
/// `ANY_SHIFT` marker: shift is ignored when matching. Punctuation-triggered
/// bindings use it because typing the character may or may not require shift
/// depending on the keyboard layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierKeys(u8);

impl ModifierKeys {
    pub const NONE: ModifierKeys = ModifierKeys(0);
    pub const SHIFT: ModifierKeys = ModifierKeys(0b0001);
    pub const CTRL: ModifierKeys = ModifierKeys(0b0010);
    pub const ALT: ModifierKeys = ModifierKeys(0b0100);
    /// Shift is ignored when matching
    pub const ANY_SHIFT: ModifierKeys = ModifierKeys(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        let mut bits = 0u8;
        if shift {
            bits |= 0b0001;
        }
        if ctrl {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        ModifierKeys(bits)
    }

    /// Check if shift is required
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if ctrl is required
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt is required
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if this is the relaxed variant that ignores shift
    #[inline]
    pub const fn is_any_shift(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are required
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: ModifierKeys) -> ModifierKeys {
        ModifierKeys(self.0 | other.0)
    }

    /// Check whether the held modifiers satisfy this requirement
    ///
    /// Ctrl and alt always compare exactly. Shift compares exactly unless
    /// this is the `ANY_SHIFT` variant, in which case it is ignored.
    pub const fn matches(self, shift: bool, ctrl: bool, alt: bool) -> bool {
        if ctrl != self.ctrl() || alt != self.alt() {
            return false;
        }
        self.is_any_shift() || shift == self.shift()
    }
}

impl std::ops::BitOr for ModifierKeys {
    type Output = ModifierKeys;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for ModifierKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a physical key on a keyboard or controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,

    // Function keys
    F(u8), // F1-F24

    // Numpad (physical keys)
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadEnter,

    // Game controller buttons, usable while reviewing
    GamepadA,
    GamepadB,
    GamepadX,
    GamepadY,
    DpadCenter,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad0 => write!(f, "Num0"),
            KeyCode::Numpad1 => write!(f, "Num1"),
            KeyCode::Numpad2 => write!(f, "Num2"),
            KeyCode::Numpad3 => write!(f, "Num3"),
            KeyCode::Numpad4 => write!(f, "Num4"),
            KeyCode::Numpad5 => write!(f, "Num5"),
            KeyCode::Numpad6 => write!(f, "Num6"),
            KeyCode::Numpad7 => write!(f, "Num7"),
            KeyCode::Numpad8 => write!(f, "Num8"),
            KeyCode::Numpad9 => write!(f, "Num9"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::GamepadA => write!(f, "Pad A"),
            KeyCode::GamepadB => write!(f, "Pad B"),
            KeyCode::GamepadX => write!(f, "Pad X"),
            KeyCode::GamepadY => write!(f, "Pad Y"),
            KeyCode::DpadCenter => write!(f, "DPad Center"),
        }
    }
}

/// What physically triggers a binding: a key or a typed character
///
/// Character triggers match the text produced by the key press, so they work
/// across keyboard layouts; key triggers match the physical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(KeyCode),
    Unicode(char),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Key(code) => write!(f, "{}", code),
            Trigger::Unicode(c) => write!(f, "{}", c),
        }
    }
}

/// Which face of the card a binding is active on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardSide {
    /// Only while the question is showing
    Question,
    /// Only after the answer is revealed
    Answer,
    /// Active on both sides
    Both,
}

impl CardSide {
    /// Check whether the binding is active given the current face
    pub const fn matches(self, answer_shown: bool) -> bool {
        match self {
            CardSide::Question => !answer_shown,
            CardSide::Answer => answer_shown,
            CardSide::Both => true,
        }
    }
}

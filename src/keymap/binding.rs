//! ReviewerBinding: one concrete input trigger with its constraints

use super::types::{CardSide, KeyCode, ModifierKeys, Trigger};

/// A single binding: trigger plus modifier and card-side constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewerBinding {
    /// The physical key or typed character
    pub trigger: Trigger,
    /// Modifiers that must be held
    pub mods: ModifierKeys,
    /// Which card face the binding is active on
    pub side: CardSide,
}

impl ReviewerBinding {
    pub const fn new(trigger: Trigger, mods: ModifierKeys, side: CardSide) -> Self {
        Self {
            trigger,
            mods,
            side,
        }
    }

    /// Binding on a physical key, active on both sides
    pub const fn key(code: KeyCode, mods: ModifierKeys) -> Self {
        Self::new(Trigger::Key(code), mods, CardSide::Both)
    }

    /// Binding on a typed character, shift-agnostic, active on both sides
    ///
    /// Shift is ignored because producing the character may require it on
    /// some layouts.
    pub const fn unicode(c: char) -> Self {
        Self::new(Trigger::Unicode(c), ModifierKeys::ANY_SHIFT, CardSide::Both)
    }

    /// Restrict this binding to one card face (builder pattern)
    pub const fn on_side(mut self, side: CardSide) -> Self {
        self.side = side;
        self
    }

    /// Check whether an incoming input event activates this binding
    pub fn matches(
        &self,
        trigger: Trigger,
        shift: bool,
        ctrl: bool,
        alt: bool,
        answer_shown: bool,
    ) -> bool {
        self.trigger == trigger
            && self.mods.matches(shift, ctrl, alt)
            && self.side.matches(answer_shown)
    }

    /// Get display string for this binding
    pub fn display_string(&self) -> String {
        let mut s = String::new();
        if self.mods.ctrl() {
            s.push_str("Ctrl+");
        }
        if self.mods.alt() {
            s.push_str("Alt+");
        }
        if self.mods.shift() {
            s.push_str("Shift+");
        }
        s.push_str(&self.trigger.to_string());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_binding_matches() {
        let binding = ReviewerBinding::key(KeyCode::Char('z'), ModifierKeys::CTRL);

        assert!(binding.matches(Trigger::Key(KeyCode::Char('z')), false, true, false, false));
        assert!(binding.matches(Trigger::Key(KeyCode::Char('z')), false, true, false, true));
        assert!(!binding.matches(Trigger::Key(KeyCode::Char('z')), false, false, false, false));
        assert!(!binding.matches(Trigger::Key(KeyCode::Char('x')), false, true, false, false));
    }

    #[test]
    fn test_unicode_binding_is_shift_agnostic() {
        let binding = ReviewerBinding::unicode('*');

        assert!(binding.matches(Trigger::Unicode('*'), true, false, false, false));
        assert!(binding.matches(Trigger::Unicode('*'), false, false, false, false));
        assert!(!binding.matches(Trigger::Unicode('*'), false, true, false, false));
    }

    #[test]
    fn test_side_restriction() {
        let binding =
            ReviewerBinding::key(KeyCode::Enter, ModifierKeys::NONE).on_side(CardSide::Answer);

        assert!(binding.matches(Trigger::Key(KeyCode::Enter), false, false, false, true));
        assert!(!binding.matches(Trigger::Key(KeyCode::Enter), false, false, false, false));
    }

    #[test]
    fn test_display_string() {
        let binding = ReviewerBinding::key(KeyCode::Char('z'), ModifierKeys::CTRL);
        assert_eq!(binding.display_string(), "Ctrl+Z");

        let binding = ReviewerBinding::unicode('*');
        assert_eq!(binding.display_string(), "*");
    }
}

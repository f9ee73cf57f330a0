//! Hardcoded default bindings for every reviewer action
//!
//! The table is total over the catalog: an action without a default trigger
//! maps to the empty list. Defaults only apply while no user override is
//! stored for the action's preference key.

use super::action::ViewerAction;
use super::binding::ReviewerBinding;
use super::types::{CardSide, KeyCode, ModifierKeys};

/// Default bindings for an action, in no particular priority order
///
/// All listed bindings are active simultaneously. The grade actions mix an
/// unrestricted gamepad button with number keys that only apply once the
/// answer is shown; grade 3 additionally aliases the center/confirm keys.
pub fn default_bindings(action: ViewerAction) -> Vec<ReviewerBinding> {
    use ViewerAction::*;

    let ctrl = ModifierKeys::CTRL;
    let none = ModifierKeys::NONE;

    match action {
        Undo => vec![key(KeyCode::Char('z'), ctrl)],
        Redo => vec![key(KeyCode::Char('z'), ModifierKeys::new(true, true, false))],
        Mark => vec![unicode('*')],
        Edit => vec![key(KeyCode::Char('e'), none)],
        AddNote => vec![key(KeyCode::Char('a'), none)],
        BuryNote => vec![unicode('=')],
        BuryCard => vec![unicode('-')],
        SuspendNote => vec![unicode('!')],
        SuspendCard => vec![unicode('@')],
        ToggleAutoAdvance => vec![key(KeyCode::Char('a'), ModifierKeys::SHIFT)],
        ShowHint => vec![key(KeyCode::Char('h'), none)],
        ShowAllHints => vec![key(KeyCode::Char('g'), none)],
        ToggleFlagRed => vec![
            key(KeyCode::Char('1'), ctrl),
            key(KeyCode::Numpad1, ctrl),
        ],
        ToggleFlagOrange => vec![
            key(KeyCode::Char('2'), ctrl),
            key(KeyCode::Numpad2, ctrl),
        ],
        ToggleFlagGreen => vec![
            key(KeyCode::Char('3'), ctrl),
            key(KeyCode::Numpad3, ctrl),
        ],
        ToggleFlagBlue => vec![
            key(KeyCode::Char('4'), ctrl),
            key(KeyCode::Numpad4, ctrl),
        ],
        ToggleFlagPink => vec![
            key(KeyCode::Char('5'), ctrl),
            key(KeyCode::Numpad5, ctrl),
        ],
        ToggleFlagTurquoise => vec![
            key(KeyCode::Char('6'), ctrl),
            key(KeyCode::Numpad6, ctrl),
        ],
        ToggleFlagPurple => vec![
            key(KeyCode::Char('7'), ctrl),
            key(KeyCode::Numpad7, ctrl),
        ],
        FlipOrAnswerEase1 => vec![
            key(KeyCode::GamepadY, none),
            answer_key(KeyCode::Char('1')),
            answer_key(KeyCode::Numpad1),
        ],
        FlipOrAnswerEase2 => vec![
            key(KeyCode::GamepadX, none),
            answer_key(KeyCode::Char('2')),
            answer_key(KeyCode::Numpad2),
        ],
        FlipOrAnswerEase3 => vec![
            key(KeyCode::GamepadB, none),
            answer_key(KeyCode::Char('3')),
            answer_key(KeyCode::Numpad3),
            key(KeyCode::DpadCenter, none),
            key(KeyCode::Space, none),
            answer_key(KeyCode::Enter),
            answer_key(KeyCode::NumpadEnter),
        ],
        FlipOrAnswerEase4 => vec![
            key(KeyCode::GamepadA, none),
            answer_key(KeyCode::Char('4')),
            answer_key(KeyCode::Numpad4),
        ],
        // No default trigger: submenu containers, the set-flag menu items
        // (only their toggle counterparts have shortcuts), the user slots,
        // and actions that are only meaningful from the menu.
        ShowAnswer | Delete | CardInfo | Tag | Exit | RescheduleNote | UserAction1
        | UserAction2 | UserAction3 | UserAction4 | UserAction5 | UserAction6 | UserAction7
        | UserAction8 | UserAction9 | UnsetFlag | FlagRed | FlagOrange | FlagBlue
        | FlagGreen | FlagPink | FlagTurquoise | FlagPurple | DeckOptions | BuryMenu
        | SuspendMenu | FlagMenu => Vec::new(),
    }
}

fn key(code: KeyCode, mods: ModifierKeys) -> ReviewerBinding {
    ReviewerBinding::key(code, mods)
}

fn answer_key(code: KeyCode) -> ReviewerBinding {
    ReviewerBinding::key(code, ModifierKeys::NONE).on_side(CardSide::Answer)
}

fn unicode(c: char) -> ReviewerBinding {
    ReviewerBinding::unicode(c)
}

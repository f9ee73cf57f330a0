//! ViewerAction: the closed catalog of review-screen actions
//!
//! Each action carries its menu metadata (menu id, icon, title resource,
//! display type, optional parent menu) as per-case data, plus stable
//! symbolic names that derive the preference keys used for user overrides.

use once_cell::sync::Lazy;

use super::config::KeymapError;
use crate::flag::Flag;

/// How an action appears in the toolbar menu before any user configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuDisplayType {
    /// Pinned to the toolbar
    Always,
    /// Inside the overflow menu
    MenuOnly,
    /// Not shown until the user enables it
    Disabled,
}

/// All user-invocable actions of the review screen
///
/// Declaration order is significant: it is the catalog order used by the
/// settings screen and by `ALL`. An action has no `display_type` when it is
/// restricted to gestures/shortcuts, or when it is a child item whose
/// visibility is governed by its [`parent_menu`](ViewerAction::parent_menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    // Always
    Undo,

    // Menu only
    Redo,
    FlagMenu,
    Mark,
    Edit,
    BuryMenu,
    SuspendMenu,
    Delete,

    // Disabled until enabled by the user
    DeckOptions,
    CardInfo,
    AddNote,
    Tag,
    RescheduleNote,
    ToggleAutoAdvance,
    UserAction1,
    UserAction2,
    UserAction3,
    UserAction4,
    UserAction5,
    UserAction6,
    UserAction7,
    UserAction8,
    UserAction9,

    // Child items
    BuryNote,
    BuryCard,
    SuspendNote,
    SuspendCard,
    UnsetFlag,
    FlagRed,
    FlagOrange,
    FlagBlue,
    FlagGreen,
    FlagPink,
    FlagTurquoise,
    FlagPurple,

    // Command only, no menu presence
    ShowAnswer,
    FlipOrAnswerEase1,
    FlipOrAnswerEase2,
    FlipOrAnswerEase3,
    FlipOrAnswerEase4,
    ToggleFlagRed,
    ToggleFlagOrange,
    ToggleFlagGreen,
    ToggleFlagBlue,
    ToggleFlagPink,
    ToggleFlagTurquoise,
    ToggleFlagPurple,
    ShowHint,
    ShowAllHints,
    Exit,
}

/// Distinct submenu containers, in first-occurrence order of their children
static SUB_MENUS: Lazy<Vec<ViewerAction>> = Lazy::new(|| {
    let mut parents = Vec::new();
    for action in ViewerAction::ALL {
        if let Some(parent) = action.parent_menu() {
            if !parents.contains(&parent) {
                parents.push(parent);
            }
        }
    }
    parents
});

impl ViewerAction {
    /// The full catalog, in declaration order
    pub const ALL: [ViewerAction; 50] = [
        ViewerAction::Undo,
        ViewerAction::Redo,
        ViewerAction::FlagMenu,
        ViewerAction::Mark,
        ViewerAction::Edit,
        ViewerAction::BuryMenu,
        ViewerAction::SuspendMenu,
        ViewerAction::Delete,
        ViewerAction::DeckOptions,
        ViewerAction::CardInfo,
        ViewerAction::AddNote,
        ViewerAction::Tag,
        ViewerAction::RescheduleNote,
        ViewerAction::ToggleAutoAdvance,
        ViewerAction::UserAction1,
        ViewerAction::UserAction2,
        ViewerAction::UserAction3,
        ViewerAction::UserAction4,
        ViewerAction::UserAction5,
        ViewerAction::UserAction6,
        ViewerAction::UserAction7,
        ViewerAction::UserAction8,
        ViewerAction::UserAction9,
        ViewerAction::BuryNote,
        ViewerAction::BuryCard,
        ViewerAction::SuspendNote,
        ViewerAction::SuspendCard,
        ViewerAction::UnsetFlag,
        ViewerAction::FlagRed,
        ViewerAction::FlagOrange,
        ViewerAction::FlagBlue,
        ViewerAction::FlagGreen,
        ViewerAction::FlagPink,
        ViewerAction::FlagTurquoise,
        ViewerAction::FlagPurple,
        ViewerAction::ShowAnswer,
        ViewerAction::FlipOrAnswerEase1,
        ViewerAction::FlipOrAnswerEase2,
        ViewerAction::FlipOrAnswerEase3,
        ViewerAction::FlipOrAnswerEase4,
        ViewerAction::ToggleFlagRed,
        ViewerAction::ToggleFlagOrange,
        ViewerAction::ToggleFlagGreen,
        ViewerAction::ToggleFlagBlue,
        ViewerAction::ToggleFlagPink,
        ViewerAction::ToggleFlagTurquoise,
        ViewerAction::ToggleFlagPurple,
        ViewerAction::ShowHint,
        ViewerAction::ShowAllHints,
        ViewerAction::Exit,
    ];

    /// Stable symbolic name, also the suffix of the preference key
    ///
    /// Renaming one silently orphans existing user overrides, so these are a
    /// compatibility contract.
    pub const fn name(self) -> &'static str {
        use ViewerAction::*;

        match self {
            Undo => "UNDO",
            Redo => "REDO",
            FlagMenu => "FLAG_MENU",
            Mark => "MARK",
            Edit => "EDIT",
            BuryMenu => "BURY_MENU",
            SuspendMenu => "SUSPEND_MENU",
            Delete => "DELETE",
            DeckOptions => "DECK_OPTIONS",
            CardInfo => "CARD_INFO",
            AddNote => "ADD_NOTE",
            Tag => "TAG",
            RescheduleNote => "RESCHEDULE_NOTE",
            ToggleAutoAdvance => "TOGGLE_AUTO_ADVANCE",
            UserAction1 => "USER_ACTION_1",
            UserAction2 => "USER_ACTION_2",
            UserAction3 => "USER_ACTION_3",
            UserAction4 => "USER_ACTION_4",
            UserAction5 => "USER_ACTION_5",
            UserAction6 => "USER_ACTION_6",
            UserAction7 => "USER_ACTION_7",
            UserAction8 => "USER_ACTION_8",
            UserAction9 => "USER_ACTION_9",
            BuryNote => "BURY_NOTE",
            BuryCard => "BURY_CARD",
            SuspendNote => "SUSPEND_NOTE",
            SuspendCard => "SUSPEND_CARD",
            UnsetFlag => "UNSET_FLAG",
            FlagRed => "FLAG_RED",
            FlagOrange => "FLAG_ORANGE",
            FlagBlue => "FLAG_BLUE",
            FlagGreen => "FLAG_GREEN",
            FlagPink => "FLAG_PINK",
            FlagTurquoise => "FLAG_TURQUOISE",
            FlagPurple => "FLAG_PURPLE",
            ShowAnswer => "SHOW_ANSWER",
            FlipOrAnswerEase1 => "FLIP_OR_ANSWER_EASE1",
            FlipOrAnswerEase2 => "FLIP_OR_ANSWER_EASE2",
            FlipOrAnswerEase3 => "FLIP_OR_ANSWER_EASE3",
            FlipOrAnswerEase4 => "FLIP_OR_ANSWER_EASE4",
            ToggleFlagRed => "TOGGLE_FLAG_RED",
            ToggleFlagOrange => "TOGGLE_FLAG_ORANGE",
            ToggleFlagGreen => "TOGGLE_FLAG_GREEN",
            ToggleFlagBlue => "TOGGLE_FLAG_BLUE",
            ToggleFlagPink => "TOGGLE_FLAG_PINK",
            ToggleFlagTurquoise => "TOGGLE_FLAG_TURQUOISE",
            ToggleFlagPurple => "TOGGLE_FLAG_PURPLE",
            ShowHint => "SHOW_HINT",
            ShowAllHints => "SHOW_ALL_HINTS",
            Exit => "EXIT",
        }
    }

    /// Preference key under which the user's override is stored
    pub fn preference_key(self) -> String {
        format!("binding_{}", self.name())
    }

    /// Stable menu id, or `None` for actions with no menu presence
    ///
    /// Flag child actions reuse the externally-defined [`Flag`] ids; all
    /// other ids are minted at 100+ so the two ranges never collide.
    pub const fn menu_id(self) -> Option<u32> {
        use ViewerAction::*;

        let id = match self {
            Undo => 101,
            Redo => 102,
            FlagMenu => 103,
            Mark => 104,
            Edit => 105,
            BuryMenu => 106,
            SuspendMenu => 107,
            Delete => 108,
            DeckOptions => 109,
            CardInfo => 110,
            AddNote => 111,
            Tag => 112,
            RescheduleNote => 113,
            ToggleAutoAdvance => 114,
            UserAction1 => 115,
            UserAction2 => 116,
            UserAction3 => 117,
            UserAction4 => 118,
            UserAction5 => 119,
            UserAction6 => 120,
            UserAction7 => 121,
            UserAction8 => 122,
            UserAction9 => 123,
            BuryNote => 124,
            BuryCard => 125,
            SuspendNote => 126,
            SuspendCard => 127,
            UnsetFlag => Flag::None.id(),
            FlagRed => Flag::Red.id(),
            FlagOrange => Flag::Orange.id(),
            FlagBlue => Flag::Blue.id(),
            FlagGreen => Flag::Green.id(),
            FlagPink => Flag::Pink.id(),
            FlagTurquoise => Flag::Turquoise.id(),
            FlagPurple => Flag::Purple.id(),
            ShowAnswer | FlipOrAnswerEase1 | FlipOrAnswerEase2 | FlipOrAnswerEase3
            | FlipOrAnswerEase4 | ToggleFlagRed | ToggleFlagOrange | ToggleFlagGreen
            | ToggleFlagBlue | ToggleFlagPink | ToggleFlagTurquoise | ToggleFlagPurple
            | ShowHint | ShowAllHints | Exit => return None,
        };
        Some(id)
    }

    /// Icon resource key, if the action has one
    pub fn icon(self) -> Option<&'static str> {
        use ViewerAction::*;

        match self {
            Undo => Some("ic_undo"),
            Redo => Some("ic_redo"),
            FlagMenu => Some(Flag::None.icon()),
            Mark => Some("ic_star"),
            Edit => Some("ic_mode_edit"),
            BuryMenu => Some("ic_flip_to_back"),
            SuspendMenu => Some("ic_suspend"),
            Delete => Some("ic_delete"),
            DeckOptions => Some("ic_tune"),
            CardInfo => Some("ic_dialog_info"),
            AddNote => Some("ic_add"),
            Tag => Some("ic_tag"),
            RescheduleNote => Some("ic_reschedule"),
            ToggleAutoAdvance => Some("ic_fast_forward"),
            UserAction1 => Some("user_action_1"),
            UserAction2 => Some("user_action_2"),
            UserAction3 => Some("user_action_3"),
            UserAction4 => Some("user_action_4"),
            UserAction5 => Some("user_action_5"),
            UserAction6 => Some("user_action_6"),
            UserAction7 => Some("user_action_7"),
            UserAction8 => Some("user_action_8"),
            UserAction9 => Some("user_action_9"),
            _ => self.flag().map(Flag::icon),
        }
    }

    /// Static title resource key; `None` when the title is computed
    /// dynamically or supplied by the flag enumeration
    pub const fn title_res(self) -> Option<&'static str> {
        use ViewerAction::*;

        match self {
            Undo => Some("undo"),
            Redo => Some("redo"),
            FlagMenu => Some("menu_flag"),
            Mark => Some("menu_mark_note"),
            Edit => Some("edit_card"),
            BuryMenu => Some("menu_bury"),
            SuspendMenu => Some("menu_suspend"),
            Delete => Some("menu_delete_note"),
            DeckOptions => Some("deck_options"),
            CardInfo => Some("card_info"),
            AddNote => Some("menu_add_note"),
            Tag => Some("menu_edit_tags"),
            ToggleAutoAdvance => Some("toggle_auto_advance"),
            UserAction1 => Some("user_action_1"),
            UserAction2 => Some("user_action_2"),
            UserAction3 => Some("user_action_3"),
            UserAction4 => Some("user_action_4"),
            UserAction5 => Some("user_action_5"),
            UserAction6 => Some("user_action_6"),
            UserAction7 => Some("user_action_7"),
            UserAction8 => Some("user_action_8"),
            UserAction9 => Some("user_action_9"),
            BuryNote => Some("menu_bury_note"),
            BuryCard => Some("menu_bury_card"),
            SuspendNote => Some("menu_suspend_note"),
            SuspendCard => Some("menu_suspend_card"),
            _ => None,
        }
    }

    /// Default toolbar display type
    pub const fn display_type(self) -> Option<MenuDisplayType> {
        use ViewerAction::*;

        match self {
            Undo => Some(MenuDisplayType::Always),
            Redo | FlagMenu | Mark | Edit | BuryMenu | SuspendMenu | Delete => {
                Some(MenuDisplayType::MenuOnly)
            }
            DeckOptions | CardInfo | AddNote | Tag | RescheduleNote | ToggleAutoAdvance
            | UserAction1 | UserAction2 | UserAction3 | UserAction4 | UserAction5
            | UserAction6 | UserAction7 | UserAction8 | UserAction9 => {
                Some(MenuDisplayType::Disabled)
            }
            _ => None,
        }
    }

    /// Parent submenu for child items
    pub const fn parent_menu(self) -> Option<ViewerAction> {
        use ViewerAction::*;

        match self {
            BuryNote | BuryCard => Some(BuryMenu),
            SuspendNote | SuspendCard => Some(SuspendMenu),
            UnsetFlag | FlagRed | FlagOrange | FlagBlue | FlagGreen | FlagPink
            | FlagTurquoise | FlagPurple => Some(FlagMenu),
            _ => None,
        }
    }

    /// The flag this action sets or toggles, if any
    ///
    /// Setting (menu click) and toggling (shortcut) are distinct actions that
    /// share a flag identity, never one action with two triggers.
    pub const fn flag(self) -> Option<Flag> {
        use ViewerAction::*;

        match self {
            UnsetFlag => Some(Flag::None),
            FlagRed | ToggleFlagRed => Some(Flag::Red),
            FlagOrange | ToggleFlagOrange => Some(Flag::Orange),
            FlagGreen | ToggleFlagGreen => Some(Flag::Green),
            FlagBlue | ToggleFlagBlue => Some(Flag::Blue),
            FlagPink | ToggleFlagPink => Some(Flag::Pink),
            FlagTurquoise | ToggleFlagTurquoise => Some(Flag::Turquoise),
            FlagPurple | ToggleFlagPurple => Some(Flag::Purple),
            _ => None,
        }
    }

    /// Whether other actions list this one as their parent menu
    pub fn is_sub_menu(self) -> bool {
        SUB_MENUS.contains(&self)
    }

    /// Distinct submenu containers, deduplicated in first-occurrence order
    pub fn sub_menus() -> &'static [ViewerAction] {
        &SUB_MENUS
    }

    /// Look up an action by menu id
    ///
    /// The id space is closed, so an unknown id is a programmer error and
    /// fails loudly rather than picking a fallback.
    pub fn from_id(id: u32) -> Result<ViewerAction, KeymapError> {
        ViewerAction::ALL
            .iter()
            .copied()
            .find(|a| a.menu_id() == Some(id))
            .ok_or(KeymapError::UnknownMenuId(id))
    }

    /// Look up an action by symbolic name
    pub fn from_name(name: &str) -> Option<ViewerAction> {
        ViewerAction::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Look up an action by preference key
    ///
    /// Preference stores may hold stale or foreign keys, so an unknown key
    /// is `None`, not an error.
    pub fn from_preference_key(key: &str) -> Option<ViewerAction> {
        ViewerAction::ALL
            .iter()
            .copied()
            .find(|a| a.preference_key() == key)
    }

    /// Resolve the user-facing title through the resource system
    ///
    /// [`ViewerAction::RescheduleNote`] is the single special case: its title
    /// comes from the scheduler backend's localization and is lowered into
    /// sentence case. Flag children take their title from the flag itself.
    /// Anything else without a title resource degrades to an empty string.
    pub fn title(self, res: &dyn Resources) -> String {
        match self {
            ViewerAction::RescheduleNote => to_sentence_case(&res.set_due_date()),
            _ => {
                if let Some(key) = self.title_res() {
                    res.string(key)
                } else if let Some(flag) = self.flag() {
                    res.string(flag.label_res())
                } else {
                    String::new()
                }
            }
        }
    }
}

/// The opaque resource system that supplies user-facing strings
pub trait Resources {
    /// Resolve a static string resource key
    fn string(&self, key: &str) -> String;

    /// Localized "set due date" label from the scheduler backend
    fn set_due_date(&self) -> String;
}

/// Lower a title into sentence case: first letter capitalized, rest lowered
fn to_sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

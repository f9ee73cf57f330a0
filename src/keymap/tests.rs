//! Cross-module tests for the keymap system

use std::collections::HashMap;

use super::*;
use crate::flag::Flag;

#[test]
fn test_every_action_resolves_without_preferences() {
    let prefs: HashMap<String, String> = HashMap::new();

    for action in ViewerAction::ALL {
        let bindings = action.bindings(&prefs).unwrap();
        assert_eq!(
            bindings,
            default_bindings(action),
            "{} did not fall back to its defaults",
            action.name()
        );
    }
}

#[test]
fn test_menu_id_round_trip() {
    for action in ViewerAction::ALL {
        if let Some(id) = action.menu_id() {
            assert_eq!(ViewerAction::from_id(id).unwrap(), action);
        }
    }
    assert_eq!(
        ViewerAction::from_id(99),
        Err(KeymapError::UnknownMenuId(99))
    );
}

#[test]
fn test_preference_key_round_trip() {
    for action in ViewerAction::ALL {
        let key = MappableAction::preference_key(&action);
        assert!(key.starts_with("binding_"));
        assert_eq!(ViewerAction::from_preference_key(&key), Some(action));
    }
    assert_eq!(ViewerAction::from_preference_key("binding_NOPE"), None);
    assert_eq!(ViewerAction::from_preference_key("UNDO"), None);
}

#[test]
fn test_flag_menu_children_cover_all_flags() {
    let children: Vec<ViewerAction> = ViewerAction::ALL
        .iter()
        .copied()
        .filter(|a| a.parent_menu() == Some(ViewerAction::FlagMenu))
        .collect();

    assert_eq!(children.len(), Flag::ALL.len());
    for flag in Flag::ALL {
        assert!(
            children.iter().any(|c| c.flag() == Some(flag)),
            "no flag-menu child for {:?}",
            flag
        );
    }
}

#[test]
fn test_grade_shortcut_respects_card_side() {
    let prefs: HashMap<String, String> = HashMap::new();
    let bindings = ViewerAction::FlipOrAnswerEase3.bindings(&prefs).unwrap();

    let pressed = |trigger: Trigger, answer_shown: bool| {
        bindings
            .iter()
            .any(|b| b.matches(trigger, false, false, false, answer_shown))
    };

    // '3' only grades once the answer is up; space flips or grades on either
    // side; the gamepad confirm button too.
    assert!(!pressed(Trigger::Key(KeyCode::Char('3')), false));
    assert!(pressed(Trigger::Key(KeyCode::Char('3')), true));
    assert!(pressed(Trigger::Key(KeyCode::Space), false));
    assert!(pressed(Trigger::Key(KeyCode::Space), true));
    assert!(pressed(Trigger::Key(KeyCode::GamepadB), false));
    assert!(!pressed(Trigger::Key(KeyCode::Enter), false));
    assert!(pressed(Trigger::Key(KeyCode::Enter), true));
}

#[test]
fn test_punctuation_shortcut_matches_with_or_without_shift() {
    let prefs: HashMap<String, String> = HashMap::new();
    let bindings = ViewerAction::Mark.bindings(&prefs).unwrap();

    // '*' is shift+8 on US layouts and unshifted elsewhere
    assert!(bindings
        .iter()
        .any(|b| b.matches(Trigger::Unicode('*'), true, false, false, false)));
    assert!(bindings
        .iter()
        .any(|b| b.matches(Trigger::Unicode('*'), false, false, false, false)));
}

#[test]
fn test_resolution_is_idempotent() {
    let mut prefs = HashMap::new();
    prefs.insert(
        "binding_MARK".to_string(),
        "anyshift+char:m key:f5".to_string(),
    );

    let first = ViewerAction::Mark.bindings(&prefs).unwrap();
    let second = ViewerAction::Mark.bindings(&prefs).unwrap();
    assert_eq!(first, second);

    // Serializing the resolved list and storing it back resolves the same
    prefs.insert("binding_MARK".to_string(), serialize_binding_list(&first));
    assert_eq!(ViewerAction::Mark.bindings(&prefs).unwrap(), first);
}

#[test]
fn test_yaml_overrides_apply_as_preference_writes() {
    let yaml = r#"
bindings:
  - action: MARK
    keys: ["anyshift+char:m"]
  - action: UNDO
    keys: []
"#;

    let mut prefs: HashMap<String, String> = HashMap::new();
    for (action, bindings) in parse_keymap_yaml(yaml).unwrap() {
        prefs.insert(
            MappableAction::preference_key(&action),
            serialize_binding_list(&bindings),
        );
    }

    let mark = ViewerAction::Mark.bindings(&prefs).unwrap();
    assert_eq!(mark.len(), 1);
    assert_eq!(mark[0].trigger, Trigger::Unicode('m'));

    // UNDO was unbound, EDIT untouched
    assert!(ViewerAction::Undo.bindings(&prefs).unwrap().is_empty());
    assert_eq!(
        ViewerAction::Edit.bindings(&prefs).unwrap(),
        default_bindings(ViewerAction::Edit)
    );
}

#[test]
fn test_catalog_size_is_stable() {
    assert_eq!(ViewerAction::ALL.len(), 50);
}

#[test]
fn test_display_strings_for_settings_screen() {
    assert_eq!(
        ReviewerBinding::key(KeyCode::Char('z'), ModifierKeys::CTRL | ModifierKeys::SHIFT)
            .display_string(),
        "Ctrl+Shift+Z"
    );
    assert_eq!(
        ReviewerBinding::key(KeyCode::Numpad1, ModifierKeys::CTRL).display_string(),
        "Ctrl+Num1"
    );
}

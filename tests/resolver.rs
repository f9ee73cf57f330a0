//! End-to-end tests through the public API: defaults, user overrides stored
//! as preference strings, and keymap files loaded from disk.

use std::collections::HashMap;
use std::io::Write;

use recite::{
    default_bindings, parse_binding_list, serialize_binding_list, CardSide, KeyCode, KeymapError,
    MappableAction, ModifierKeys, PreferenceReader, Resources, ReviewerBinding, Trigger,
    ViewerAction,
};

struct TestResources;

impl Resources for TestResources {
    fn string(&self, key: &str) -> String {
        key.replace('_', " ")
    }

    fn set_due_date(&self) -> String {
        "Set Due Date".to_string()
    }
}

#[test]
fn fresh_install_uses_documented_defaults() {
    let prefs: HashMap<String, String> = HashMap::new();

    let undo = ViewerAction::Undo.bindings(&prefs).unwrap();
    assert_eq!(
        undo,
        vec![ReviewerBinding::key(KeyCode::Char('z'), ModifierKeys::CTRL)]
    );

    let edit = ViewerAction::Edit.bindings(&prefs).unwrap();
    assert_eq!(
        edit,
        vec![ReviewerBinding::key(KeyCode::Char('e'), ModifierKeys::NONE)]
    );

    // Delete ships unbound
    assert!(ViewerAction::Delete.bindings(&prefs).unwrap().is_empty());
}

#[test]
fn user_rebinds_and_unbinds_through_preferences() {
    let mut prefs = HashMap::new();
    prefs.insert(
        ViewerAction::Edit.preference_key(),
        "key:f2 ctrl+key:e".to_string(),
    );
    prefs.insert(ViewerAction::Mark.preference_key(), String::new());

    let edit = ViewerAction::Edit.bindings(&prefs).unwrap();
    assert_eq!(edit.len(), 2);
    assert_eq!(edit[0].trigger, Trigger::Key(KeyCode::F(2)));
    assert!(edit[1].mods.ctrl());

    // Mark's default '*' is gone, not restored
    assert!(ViewerAction::Mark.bindings(&prefs).unwrap().is_empty());
}

#[test]
fn custom_preference_reader_backend() {
    // A backend that namespaces its keys, as a settings store would
    struct Namespaced(HashMap<String, String>);

    impl PreferenceReader for Namespaced {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(&format!("reviewer/{}", key)).cloned()
        }
    }

    let mut inner = HashMap::new();
    inner.insert(
        "reviewer/binding_SHOW_HINT".to_string(),
        "key:f1".to_string(),
    );
    let prefs = Namespaced(inner);

    let hint = ViewerAction::ShowHint.bindings(&prefs).unwrap();
    assert_eq!(hint, vec![ReviewerBinding::key(KeyCode::F(1), ModifierKeys::NONE)]);

    // Actions without a namespaced entry still get defaults
    assert_eq!(
        ViewerAction::Undo.bindings(&prefs).unwrap(),
        default_bindings(ViewerAction::Undo)
    );
}

#[test]
fn answer_side_restriction_survives_storage() {
    let stored = serialize_binding_list(&default_bindings(ViewerAction::FlipOrAnswerEase1));
    let restored = parse_binding_list(&stored).unwrap();

    assert!(restored
        .iter()
        .any(|b| b.trigger == Trigger::Key(KeyCode::Numpad1) && b.side == CardSide::Answer));
    assert!(restored
        .iter()
        .any(|b| b.trigger == Trigger::Key(KeyCode::GamepadY) && b.side == CardSide::Both));
}

#[test]
fn keymap_file_feeds_the_preference_store() {
    let yaml = r#"
bindings:
  - action: SHOW_ANSWER
    keys: ["key:right"]
  - action: BURY_CARD
    keys: []
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", yaml).unwrap();

    let overrides = recite::load_keymap_file(file.path()).unwrap();

    let mut prefs: HashMap<String, String> = HashMap::new();
    for (action, bindings) in overrides {
        prefs.insert(action.preference_key(), serialize_binding_list(&bindings));
    }

    let show = ViewerAction::ShowAnswer.bindings(&prefs).unwrap();
    assert_eq!(show, vec![ReviewerBinding::key(KeyCode::Right, ModifierKeys::NONE)]);
    assert!(ViewerAction::BuryCard.bindings(&prefs).unwrap().is_empty());
}

#[test]
fn missing_keymap_file_is_an_io_error() {
    let err = recite::load_keymap_file(std::path::Path::new("/nonexistent/keymap.yaml"))
        .unwrap_err();
    assert!(matches!(err, KeymapError::IoError(_)));
}

#[test]
fn menu_construction_walks_the_catalog() {
    // What a toolbar would do: visible top-level entries, then children per
    // submenu, with titles resolved through the resource system.
    let res = TestResources;

    let top_level: Vec<ViewerAction> = ViewerAction::ALL
        .iter()
        .copied()
        .filter(|a| a.display_type().is_some())
        .collect();
    assert!(top_level.contains(&ViewerAction::Undo));
    assert!(!top_level.contains(&ViewerAction::BuryNote));

    for menu in ViewerAction::sub_menus() {
        let children: Vec<ViewerAction> = ViewerAction::ALL
            .iter()
            .copied()
            .filter(|a| a.parent_menu() == Some(*menu))
            .collect();
        assert!(!children.is_empty());
        for child in children {
            assert!(!child.title(&res).is_empty());
            assert!(child.menu_id().is_some());
        }
    }
}

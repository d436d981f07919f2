//! Workspace scenarios spanning the path layer, the settings layers and the
//! explorer facade.
//!
//! Each scenario drives a real temporary workspace the way an editor session
//! would: open, list, edit, reopen.

use explorer_core::config::SettingsResolver;
use explorer_core::{Explorer, MemoryBackend, MoveDirection, RuleKind, RuleStore};
use explorer_fs::{LocalFs, NormalizedPath};
use explorer_test_utils::{TestWorkspace, layouts};
use pretty_assertions::assert_eq;
use serde_json::json;

// =============================================================================
// Test Infrastructure
// =============================================================================

const GLOBAL_DIR: &str = "global-config";

fn open(ws: &TestWorkspace) -> Explorer {
    try_open(ws).unwrap()
}

fn try_open(ws: &TestWorkspace) -> explorer_core::Result<Explorer> {
    let resolver = SettingsResolver::with_global_config_dir(
        NormalizedPath::new(ws.root()),
        ws.path(GLOBAL_DIR),
    );
    Explorer::open_with(&resolver)
}

fn write_global(ws: &TestWorkspace, content: &str) {
    ws.file_with(&format!("{GLOBAL_DIR}/settings.json"), content);
}

fn at(ws: &TestWorkspace, rel: &str) -> NormalizedPath {
    NormalizedPath::new(ws.path(rel))
}

fn names(explorer: &Explorer, folder: &NormalizedPath) -> Vec<String> {
    explorer.list(folder).into_iter().map(|e| e.name).collect()
}

// =============================================================================
// S1: Editing session on a React workspace
// =============================================================================

mod s1_react_session {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn s1_1_template_then_manual_tweak_survives_reopen() {
        let ws = TestWorkspace::new();
        layouts::react_app(&ws);
        let src = at(&ws, "src");

        let mut explorer = open(&ws);
        explorer.store_mut().apply_template_named("React Project").unwrap();
        explorer
            .move_item(&src, "App.css", MoveDirection::Up)
            .unwrap();
        drop(explorer);

        let explorer = open(&ws);
        assert_eq!(
            names(&explorer, &src),
            vec!["components", "pages", "hooks", "App.jsx", "index.js", "App.css", "utils.js"]
        );
        // The move stored the whole listing as a manual rule.
        let rule = explorer.store().rule_for_folder(&src).unwrap();
        assert_eq!(rule.kind, RuleKind::Manual);
    }

    #[test]
    fn s1_2_template_rule_reaches_nested_components() {
        let ws = TestWorkspace::new();
        layouts::react_app(&ws);
        let mut explorer = open(&ws);
        explorer.store_mut().apply_template_named("React Project").unwrap();

        assert_eq!(
            names(&explorer, &at(&ws, "src/components")),
            vec!["index.js", "Button.jsx", "Header.jsx"]
        );
    }

    #[test]
    fn s1_3_rename_and_delete_keep_rules_consistent() {
        let ws = TestWorkspace::new();
        layouts::react_app(&ws);
        let hooks = at(&ws, "src/hooks");
        let mut explorer = open(&ws);
        explorer
            .store_mut()
            .set_order_for_folder(&hooks, vec!["useAuth.js".into()], RuleKind::Manual, None)
            .unwrap();

        explorer.rename_item(&hooks, "useAuth.js", "useSession.js").unwrap();
        assert_eq!(explorer.store().order_for_folder(&hooks), vec!["useSession.js"]);

        explorer.delete_item(&hooks, "useSession.js").unwrap();
        assert!(explorer.store().rules().is_empty());
        assert!(explorer.list(&hooks).is_empty());
    }

    #[test]
    fn s1_4_deleting_a_canonical_folder_keeps_shared_rule() {
        let ws = TestWorkspace::new();
        layouts::react_app(&ws);
        ws.tree(&["packages/ui/hooks/useTheme.js"]);
        let mut explorer = open(&ws);
        explorer
            .store_mut()
            .set_order_for_folder(&at(&ws, "src/hooks"), vec!["useAuth.js".into()], RuleKind::Manual, None)
            .unwrap();

        explorer
            .delete_item(&at(&ws, "packages/ui"), "hooks")
            .unwrap();

        assert_eq!(
            explorer.store().order_for_folder(&at(&ws, "src/hooks")),
            vec!["useAuth.js"]
        );
    }
}

// =============================================================================
// S2: Hand-edited and shared settings files
// =============================================================================

mod s2_settings_files {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn s2_1_hand_written_rules_are_honoured() {
        let ws = TestWorkspace::new();
        layouts::lib_folder(&ws);
        ws.write_settings(&json!({
            "defaultFoldersFirst": false,
            "rules": {
                "lib": { "order": ["*.txt"], "type": "manual" }
            }
        }));

        let explorer = open(&ws);
        assert_eq!(
            names(&explorer, &at(&ws, "lib")),
            vec!["a.txt", "b.txt", "z.txt", "docs"]
        );
    }

    #[test]
    fn s2_2_full_path_key_beats_canonical_key() {
        let ws = TestWorkspace::new();
        ws.tree(&["app/src/a.rs", "app/src/b.rs", "web/src/a.rs", "web/src/b.rs"]);
        let mut rules = serde_json::Map::new();
        rules.insert(at(&ws, "app/src").as_str().to_string(), json!({ "order": ["b.rs"] }));
        ws.write_settings(&json!({ "rules": rules }));

        let mut explorer = open(&ws);
        explorer
            .store_mut()
            .set_order_for_folder(&at(&ws, "web/src"), vec!["a.rs".into()], RuleKind::Manual, None)
            .unwrap();

        assert_eq!(names(&explorer, &at(&ws, "app/src")), vec!["b.rs", "a.rs"]);
        assert_eq!(names(&explorer, &at(&ws, "web/src")), vec!["a.rs", "b.rs"]);
        assert!(ws.read_settings()["rules"]["src"].is_object());
    }

    #[test]
    fn s2_3_global_defaults_and_templates() {
        let ws = TestWorkspace::new();
        ws.tree(&["docs/guide.md", "docs/README.md", "docs/api/", "docs/zeta/"]);
        write_global(
            &ws,
            r#"{
                "defaultFoldersFirst": false,
                "customTemplates": [
                    { "name": "Docs", "description": "Readme first", "rules": { "docs": { "order": ["README.md"] } } }
                ]
            }"#,
        );

        let mut explorer = open(&ws);
        assert!(!explorer.store().default_folders_first());

        explorer.store_mut().apply_template_named("Docs").unwrap();
        assert_eq!(
            names(&explorer, &at(&ws, "docs")),
            vec!["README.md", "api", "guide.md", "zeta"]
        );

        // Workspace value overrides the global one.
        explorer
            .store_mut()
            .set_flag(explorer_core::Flag::FoldersFirst, true)
            .unwrap();
        assert_eq!(
            names(&explorer, &at(&ws, "docs")),
            vec!["README.md", "api", "zeta", "guide.md"]
        );
        assert!(explorer.store().default_folders_first());
    }

    #[test]
    fn s2_4_malformed_global_settings_fail_to_open() {
        let ws = TestWorkspace::new();
        write_global(&ws, "{ not json");

        assert!(try_open(&ws).is_err());
    }

    #[test]
    fn s2_5_external_edit_seen_after_refresh() {
        let ws = TestWorkspace::new();
        layouts::lib_folder(&ws);
        let lib = at(&ws, "lib");
        let mut explorer = open(&ws);
        assert_eq!(names(&explorer, &lib)[0], "docs");

        let mut rules = serde_json::Map::new();
        rules.insert(lib.as_str().to_string(), json!({ "order": ["z.txt"] }));
        ws.write_settings(&json!({ "rules": rules }));
        assert_eq!(names(&explorer, &lib)[0], "docs");

        explorer.refresh().unwrap();
        assert_eq!(names(&explorer, &lib)[0], "z.txt");
    }
}

// =============================================================================
// S3: Failure handling
// =============================================================================

mod s3_failures {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn s3_1_failed_save_leaves_rules_untouched() {
        let ws = TestWorkspace::new();
        layouts::lib_folder(&ws);
        let lib = at(&ws, "lib");
        let store = RuleStore::load(MemoryBackend::new().read_only()).unwrap();
        let mut explorer = Explorer::new(NormalizedPath::new(ws.root()), LocalFs::new(), store);

        let result = explorer.move_item(&lib, "z.txt", MoveDirection::Up);

        assert!(matches!(result, Err(explorer_core::Error::ConfigWrite { .. })));
        assert!(explorer.store().rules().is_empty());
        assert_eq!(names(&explorer, &lib), vec!["docs", "a.txt", "b.txt", "z.txt"]);
    }

    #[test]
    fn s3_2_copy_into_missing_folder_fails() {
        let ws = TestWorkspace::new();
        ws.file("notes.md");
        let mut explorer = open(&ws);

        let result = explorer.copy_item(&at(&ws, "notes.md"), &at(&ws, "missing"));
        assert!(result.is_err());
    }
}

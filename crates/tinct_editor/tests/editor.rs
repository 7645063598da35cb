use pretty_assertions::assert_eq;
use tinct_editor::{Editor, EditorConfig};
use tinct_theme::{ColorGroup, RadiusKey, ShadeKey, ShadowKey};

fn file_config(dir: &std::path::Path) -> EditorConfig {
    EditorConfig::from_toml_str(&format!(
        "[storage]\nkey = \"session\"\ndir = {:?}\n",
        dir.display().to_string()
    ))
    .unwrap()
}

#[test]
fn test_open_applies_defaults_to_root() {
    let editor = Editor::open(EditorConfig::default()).unwrap();

    assert_eq!(editor.root_property("--radius-default").as_deref(), Some("0.375rem"));
    assert_eq!(editor.root_property("--background").as_deref(), Some("#ffffff"));
    assert_eq!(editor.root_property("--background-text").as_deref(), Some("#000000"));
    assert!(editor.stylesheet().starts_with(":root {\n"));
}

#[test]
fn test_panel_edits_reach_root_style() {
    let editor = Editor::open(EditorConfig::default()).unwrap();

    editor.colors().select_shade(ShadeKey::S300);
    editor.colors().edit(ColorGroup::Primary, "#111111").unwrap();
    editor.radius().select(RadiusKey::Xl);
    editor.typography().edit_font_weight("650").unwrap();

    assert_eq!(editor.root_property("--primary-300").as_deref(), Some("#111111"));
    assert_eq!(editor.root_property("--primary-300-text").as_deref(), Some("#ffffff"));
    assert_eq!(editor.root_property("--radius-default").as_deref(), Some("0.75rem"));
    assert_eq!(editor.root_property("--font-weight-normal").as_deref(), Some("650"));
    assert_eq!(editor.root_property("--font-weight-default").as_deref(), Some("650"));
}

#[test]
fn test_reset_restores_configured_selection() {
    let mut config = EditorConfig::default();
    config.selection.shadow = ShadowKey::Sm;
    let editor = Editor::open(config).unwrap();

    editor.shadows().select(ShadowKey::Xl);
    editor.shadows().edit("none");
    editor.reset();

    assert_eq!(editor.store().selection().shadow, ShadowKey::Sm);
    assert_eq!(
        editor.root_property("--shadow-default"),
        editor.root_property("--shadow-sm")
    );
    assert_eq!(editor.store().snapshot(), *editor.store().defaults());
}

#[test]
fn test_session_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let editor = Editor::open(file_config(dir.path())).unwrap();
        editor.typography().choose_font_family(tinct_theme::FontFamilyPreset::Montserrat);
        editor.radius().select(RadiusKey::Full);
    }
    assert!(dir.path().join("session.json").exists());

    let editor = Editor::open(file_config(dir.path())).unwrap();
    assert_eq!(editor.store().selection().radius, RadiusKey::Full);
    assert_eq!(
        editor.root_property("--font-family").as_deref(),
        Some("Montserrat, system-ui, sans-serif")
    );
}

#[test]
fn test_exports_follow_edits() {
    let editor = Editor::open(EditorConfig::default()).unwrap();
    editor.colors().edit(ColorGroup::Background, "#fafafa").unwrap();

    assert!(editor.export_css().contains("  --background: #fafafa;\n"));
    let tailwind = editor.export_tailwind().unwrap();
    assert!(tailwind.contains("\"page-background\": \"#fafafa\""));
}

#[test]
fn test_drop_releases_store() {
    let editor = Editor::open(EditorConfig::default()).unwrap();
    let store = std::sync::Arc::clone(editor.store());
    drop(editor);

    store.set_selected_radius(RadiusKey::Sm);
    assert_eq!(std::sync::Arc::strong_count(&store), 1);
    assert_eq!(store.snapshot().selected_radius(), "0.125rem");
}

#[test]
fn test_open_rejects_storage_key_outside_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = file_config(dir.path());
    config.storage.key = "../escape".into();

    assert!(Editor::open(config).is_err());
    assert!(!dir.path().parent().unwrap().join("escape.json").exists());
}

//! Integration tests for the token store, persistence and propagation
//!
//! These tests verify that:
//! - Reset restores defaults regardless of history
//! - Persisted snapshots survive a reopen, invalid ones fall back to defaults
//! - Propagation follows store changes through a subscription
//! - The CSS export reproduces every token value exactly
//! - Concurrent commits reach storage and subscribers in commit order

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tinct_theme::*;

fn file_store(dir: &std::path::Path) -> TokenStore {
    TokenStore::new(FileStorage::new(dir))
}

fn scribble(store: &TokenStore) {
    store
        .update_color(ColorGroup::Primary, Some(ShadeKey::S500), "#ff5500")
        .unwrap();
    store.update_color(ColorGroup::Info, None, "#0000ff").unwrap();
    store.update_typography(TypographyUpdate::FontFamily("Lato, sans-serif".into()));
    store.update_typography(TypographyUpdate::FontWeight {
        key: "black".into(),
        weight: 900,
    });
    store.update_radius(RadiusKey::Lg, "12px");
    store.update_shadow(ShadowKey::Xs, "none");
    store.set_selected_radius(RadiusKey::Lg);
    store.set_selected_shadow(ShadowKey::Xs);
    store.set_selected_font_size("xl");
    store.set_selected_font_weight("black");
    store.set_selected_shade(ShadeKey::S900);
}

#[test]
fn test_reset_restores_defaults_after_any_history() {
    let store = TokenStore::new(MemoryStorage::new());
    scribble(&store);
    store.reset_tokens();
    assert_eq!(store.tokens(), default_tokens());
    assert_eq!(store.selection(), Selection::default());

    store.reset_tokens();
    assert_eq!(store.snapshot(), StoreSnapshot::default());
}

#[test]
fn test_reset_uses_configured_shadow_variant() {
    let store = TokenStore::with_options(
        MemoryStorage::new(),
        StoreOptions {
            default_selection: Selection::with_shadow(ShadowKey::Sm),
            ..StoreOptions::default()
        },
    );
    assert_eq!(store.selection().shadow, ShadowKey::Sm);

    store.set_selected_shadow(ShadowKey::Xl);
    store.reset_tokens();
    assert_eq!(store.selection().shadow, ShadowKey::Sm);
}

#[test]
fn test_snapshot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let saved = {
        let store = file_store(dir.path());
        scribble(&store);
        store.snapshot()
    };

    let reopened = file_store(dir.path());
    assert_eq!(reopened.snapshot(), saved);
}

#[test]
fn test_invalid_persisted_state_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = file_store(dir.path());
        scribble(&store);
    }

    // Drop one shade from a scale: the whole snapshot must be discarded
    let path = dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json"));
    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    json["state"]["tokens"]["colors"]["secondary"]
        .as_object_mut()
        .unwrap()
        .remove("50");
    std::fs::write(&path, json.to_string()).unwrap();

    let reopened = file_store(dir.path());
    assert_eq!(reopened.snapshot(), StoreSnapshot::default());
    assert!(!path.exists());
}

#[test]
fn test_wrong_version_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    let mut snapshot = StoreSnapshot::default();
    snapshot.selection.radius = RadiusKey::Full;
    let raw = serde_json::json!({ "version": STORE_VERSION + 1, "state": snapshot });
    storage
        .set_item(DEFAULT_STORAGE_KEY, &raw.to_string())
        .unwrap();

    let store = TokenStore::new(storage);
    assert_eq!(store.selection().radius, RadiusKey::Md);
}

#[test]
fn test_selected_radius_only_moves_radius_default() {
    let store = Arc::new(TokenStore::new(MemoryStorage::new()));
    let before = css_properties(&store.snapshot());

    store.set_selected_radius(RadiusKey::Xl);
    let after = css_properties(&store.snapshot());

    let changed: Vec<&String> = after
        .iter()
        .filter(|(name, value)| before.get(*name) != Some(*value))
        .map(|(name, _)| name)
        .collect();
    assert_eq!(changed, vec!["--radius-default"]);
    assert_eq!(after["--radius-default"], after["--radius-xl"]);
    assert_eq!(after.len(), before.len());
}

#[test]
fn test_propagation_follows_subscription() {
    let store = Arc::new(TokenStore::new(MemoryStorage::new()));
    let propagator = Arc::new(Mutex::new(ThemePropagator::new(RootStyle::new())));
    propagator.lock().unwrap().apply(&store.snapshot());

    let effect = Arc::clone(&propagator);
    store.subscribe(move |snapshot| {
        effect.lock().unwrap().apply(snapshot);
    });

    store
        .update_color(ColorGroup::Accent, Some(ShadeKey::S100), "#000000")
        .unwrap();

    let propagator = propagator.lock().unwrap();
    let scope = propagator.scope();
    assert_eq!(scope.get_property("--accent-100"), Some("#000000"));
    assert_eq!(scope.get_property("--accent-100-text"), Some(contrast::WHITE));
}

#[test]
fn test_css_export_round_trips_values() {
    let store = TokenStore::new(MemoryStorage::new());
    scribble(&store);
    let tokens = store.tokens();

    let parsed: BTreeMap<String, String> = css_variables(&tokens)
        .lines()
        .filter_map(|line| line.trim().strip_prefix("--"))
        .filter_map(|decl| decl.strip_suffix(';'))
        .filter_map(|decl| decl.split_once(": "))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    for (group, slot) in tokens.colors.iter() {
        match slot {
            ColorSlot::Scale(scale) => {
                for (shade, value) in scale.iter() {
                    assert_eq!(parsed[&format!("{group}-{shade}")], value);
                }
            }
            ColorSlot::Single(value) => assert_eq!(&parsed[group], value),
        }
    }
    for (key, value) in tokens.radius.iter() {
        assert_eq!(parsed[&format!("radius-{key}")], value);
    }
    for (key, value) in tokens.shadows.iter() {
        assert_eq!(parsed[&format!("shadow-{key}")], value);
    }
    assert_eq!(parsed["font-weight-black"], "900");
    assert_eq!(parsed["font-family"], "Lato, sans-serif");
}

/// Memory storage whose first write waits until the test releases it
struct GatedStorage {
    inner: Arc<MemoryStorage>,
    entered: Mutex<Option<Sender<()>>>,
    release: Mutex<Option<Receiver<()>>>,
}

impl Storage for GatedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let entered = self.entered.lock().unwrap().take();
        if let Some(entered) = entered {
            let release = self.release.lock().unwrap().take().unwrap();
            entered.send(()).unwrap();
            release.recv().unwrap();
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.inner.remove_item(key)
    }
}

#[test]
fn test_concurrent_commits_persist_and_notify_in_order() {
    let inner = Arc::new(MemoryStorage::new());
    let (entered_tx, entered_rx) = channel();
    let (release_tx, release_rx) = channel();
    let store = TokenStore::new(GatedStorage {
        inner: Arc::clone(&inner),
        entered: Mutex::new(Some(entered_tx)),
        release: Mutex::new(Some(release_rx)),
    });

    let notified = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&notified);
    store.subscribe(move |snapshot| {
        *sink.lock().unwrap() = Some(snapshot.selection.radius);
    });

    thread::scope(|s| {
        s.spawn(|| store.set_selected_radius(RadiusKey::Lg));
        entered_rx.recv().unwrap();
        s.spawn(|| store.set_selected_radius(RadiusKey::Xl));
        thread::sleep(Duration::from_millis(50));
        release_tx.send(()).unwrap();
    });

    let in_memory = store.selection().radius;
    let raw = inner.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let persisted = persist::decode(&raw).unwrap().selection.radius;

    assert_eq!(in_memory, RadiusKey::Xl);
    assert_eq!(persisted, in_memory);
    assert_eq!(*notified.lock().unwrap(), Some(in_memory));
}

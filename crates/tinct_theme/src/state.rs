//! Token store: the single source of truth for tokens and selection
//!
//! Every mutation follows the same sequence:
//! 1. build the next snapshot from the current one and swap it in
//! 2. persist the full snapshot to storage
//! 3. notify subscribers with the committed snapshot
//!
//! Commits are serialized end to end, so storage and subscribers always see
//! commits in the order they were applied. Subscribers run after the
//! snapshot lock is released and may read the store (the theme propagation
//! effect does exactly that), but must not mutate it.

use crate::defaults::{default_tokens, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT};
use crate::persist::{self, DEFAULT_STORAGE_KEY};
use crate::storage::Storage;
use crate::tokens::*;
use crate::ThemeError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Ephemeral UI choices persisted with the tokens but never exported
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Active shade in the color panel
    #[serde(rename = "selectedShade", default)]
    pub shade: ShadeKey,
    #[serde(rename = "selectedRadius")]
    pub radius: RadiusKey,
    #[serde(rename = "selectedShadow")]
    pub shadow: ShadowKey,
    #[serde(rename = "selectedFontSize")]
    pub font_size: String,
    #[serde(rename = "selectedFontWeight")]
    pub font_weight: String,
}

impl Selection {
    /// Default selection with a different starting shadow
    pub fn with_shadow(shadow: ShadowKey) -> Self {
        Self {
            shadow,
            ..Self::default()
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            shade: ShadeKey::S500,
            radius: RadiusKey::Md,
            shadow: ShadowKey::Md,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            font_weight: DEFAULT_FONT_WEIGHT.to_string(),
        }
    }
}

/// Tokens plus selection; the unit that is persisted and observed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tokens: TokenSet,
    #[serde(flatten)]
    pub selection: Selection,
}

impl StoreSnapshot {
    /// Value of the selected radius
    pub fn selected_radius(&self) -> &str {
        self.tokens.radius.get(self.selection.radius)
    }

    /// Value of the selected shadow
    pub fn selected_shadow(&self) -> &str {
        self.tokens.shadows.get(self.selection.shadow)
    }
}

/// Handle returned by [`TokenStore::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&StoreSnapshot) + Send + Sync>;

/// Construction options for [`TokenStore`]
#[derive(Clone, Debug)]
pub struct StoreOptions {
    /// Storage entry name
    pub storage_key: String,
    /// Selection restored by [`TokenStore::reset_tokens`]
    pub default_selection: Selection,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_selection: Selection::default(),
        }
    }
}

/// Observable, persisted token state
pub struct TokenStore {
    storage: Box<dyn Storage>,
    storage_key: String,
    defaults: StoreSnapshot,
    current: RwLock<StoreSnapshot>,
    /// Held from swap through notify
    commit_lock: Mutex<()>,
    subscribers: Mutex<FxHashMap<SubscriptionId, Subscriber>>,
    next_subscription: AtomicU64,
}

impl TokenStore {
    /// Open a store with default options
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_options(storage, StoreOptions::default())
    }

    /// Open a store, restoring the persisted snapshot when it is valid
    pub fn with_options(storage: impl Storage + 'static, options: StoreOptions) -> Self {
        let defaults = StoreSnapshot {
            tokens: default_tokens(),
            selection: options.default_selection,
        };

        let restored = persist::load(&storage, &options.storage_key);
        tracing::debug!(
            "TokenStore::open - key={} restored={}",
            options.storage_key,
            restored.is_some()
        );

        Self {
            current: RwLock::new(restored.unwrap_or_else(|| defaults.clone())),
            storage: Box::new(storage),
            storage_key: options.storage_key,
            defaults,
            commit_lock: Mutex::new(()),
            subscribers: Mutex::new(FxHashMap::default()),
            next_subscription: AtomicU64::new(0),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ========== Reading ==========

    /// Copy of the committed state
    pub fn snapshot(&self) -> StoreSnapshot {
        self.current.read().unwrap().clone()
    }

    pub fn tokens(&self) -> TokenSet {
        self.current.read().unwrap().tokens.clone()
    }

    pub fn selection(&self) -> Selection {
        self.current.read().unwrap().selection.clone()
    }

    /// Built-in defaults this store resets to
    pub fn defaults(&self) -> &StoreSnapshot {
        &self.defaults
    }

    // ========== Token Mutations ==========

    /// Update one color.
    ///
    /// A single-color group is replaced wholesale and `shade` is ignored. A
    /// scale group has only `shade` replaced. The value is not validated.
    pub fn update_color(
        &self,
        group: impl AsRef<str>,
        shade: Option<ShadeKey>,
        value: impl Into<String>,
    ) -> Result<(), ThemeError> {
        let group = group.as_ref();
        let value = value.into();
        self.try_commit("update_color", |next| {
            match next.tokens.colors.get_mut(group) {
                None => Err(ThemeError::UnknownColorGroup(group.to_string())),
                Some(ColorSlot::Single(current)) => {
                    *current = value;
                    Ok(())
                }
                Some(ColorSlot::Scale(scale)) => {
                    let shade = shade.ok_or_else(|| ThemeError::MissingShade(group.to_string()))?;
                    scale.set(shade, value);
                    Ok(())
                }
            }
        })
    }

    /// Apply one typography edit
    pub fn update_typography(&self, update: TypographyUpdate) {
        self.commit("update_typography", |next| next.tokens.typography.apply(update));
    }

    pub fn update_radius(&self, key: RadiusKey, value: impl Into<String>) {
        let value = value.into();
        self.commit("update_radius", |next| next.tokens.radius.set(key, value));
    }

    pub fn update_shadow(&self, key: ShadowKey, value: impl Into<String>) {
        let value = value.into();
        self.commit("update_shadow", |next| next.tokens.shadows.set(key, value));
    }

    // ========== Selection ==========

    pub fn set_selected_shade(&self, shade: ShadeKey) {
        self.commit("set_selected_shade", |next| next.selection.shade = shade);
    }

    pub fn set_selected_radius(&self, key: RadiusKey) {
        self.commit("set_selected_radius", |next| next.selection.radius = key);
    }

    pub fn set_selected_shadow(&self, key: ShadowKey) {
        self.commit("set_selected_shadow", |next| next.selection.shadow = key);
    }

    pub fn set_selected_font_size(&self, key: impl Into<String>) {
        let key = key.into();
        self.commit("set_selected_font_size", |next| next.selection.font_size = key);
    }

    pub fn set_selected_font_weight(&self, key: impl Into<String>) {
        let key = key.into();
        self.commit("set_selected_font_weight", |next| {
            next.selection.font_weight = key
        });
    }

    // ========== Reset ==========

    /// Restore default tokens and selection in one update
    pub fn reset_tokens(&self) {
        let defaults = self.defaults.clone();
        self.commit("reset_tokens", |next| *next = defaults);
    }

    /// Restore default radii and the default radius selection
    pub fn reset_radius(&self) {
        let (values, key) = (self.defaults.tokens.radius.clone(), self.defaults.selection.radius);
        self.commit("reset_radius", |next| {
            next.tokens.radius = values;
            next.selection.radius = key;
        });
    }

    /// Restore default shadows and the default shadow selection
    pub fn reset_shadows(&self) {
        let (values, key) = (
            self.defaults.tokens.shadows.clone(),
            self.defaults.selection.shadow,
        );
        self.commit("reset_shadows", |next| {
            next.tokens.shadows = values;
            next.selection.shadow = key;
        });
    }

    pub fn reset_font_family(&self) {
        let family = self.defaults.tokens.typography.font_family.clone();
        self.commit("reset_font_family", |next| {
            next.tokens.typography.font_family = family
        });
    }

    /// Restore the default size scale and size selection
    pub fn reset_font_sizes(&self) {
        let sizes = self.defaults.tokens.typography.font_size.clone();
        let key = self.defaults.selection.font_size.clone();
        self.commit("reset_font_sizes", |next| {
            next.tokens.typography.font_size = sizes;
            next.selection.font_size = key;
        });
    }

    /// Restore the default weights and weight selection
    pub fn reset_font_weights(&self) {
        let weights = self.defaults.tokens.typography.font_weight.clone();
        let key = self.defaults.selection.font_weight.clone();
        self.commit("reset_font_weights", |next| {
            next.tokens.typography.font_weight = weights;
            next.selection.font_weight = key;
        });
    }

    // ========== Subscriptions ==========

    /// Register a callback run after every committed change
    pub fn subscribe(&self, callback: impl Fn(&StoreSnapshot) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .lock()
            .unwrap()
            .insert(id, Arc::new(callback));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().unwrap().remove(&id).is_some()
    }

    // ========== Commit Pipeline ==========

    fn commit(&self, action: &str, mutate: impl FnOnce(&mut StoreSnapshot)) {
        let infallible = self.try_commit(action, |next| {
            mutate(next);
            Ok(())
        });
        debug_assert!(infallible.is_ok());
    }

    fn try_commit(
        &self,
        action: &str,
        mutate: impl FnOnce(&mut StoreSnapshot) -> Result<(), ThemeError>,
    ) -> Result<(), ThemeError> {
        let _serial = self.commit_lock.lock().unwrap();
        let committed = {
            let mut current = self.current.write().unwrap();
            let mut next = current.clone();
            if let Err(e) = mutate(&mut next) {
                tracing::debug!("TokenStore::{} - rejected: {}", action, e);
                return Err(e);
            }
            if next == *current {
                tracing::trace!("TokenStore::{} - no change", action);
                return Ok(());
            }
            *current = next;
            current.clone()
        };

        tracing::debug!("TokenStore::{} - committed", action);
        if let Err(e) = persist::save(self.storage.as_ref(), &self.storage_key, &committed) {
            tracing::warn!("TokenStore::{} - persist failed: {}", action, e);
        }
        self.notify(&committed);
        Ok(())
    }

    fn notify(&self, snapshot: &StoreSnapshot) {
        let mut subscribers: Vec<(SubscriptionId, Subscriber)> = self
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect();
        subscribers.sort_unstable_by_key(|(id, _)| *id);

        for (_, callback) in subscribers {
            callback(snapshot);
        }
    }
}

//! Editor session: store, propagation effect and panels wired together

use crate::config::EditorConfig;
use crate::panels::{ColorPanel, RadiusPanel, ShadowPanel, TypographyPanel};
use anyhow::{Context, Result};
use std::fs;
use std::sync::{Arc, Mutex};
use tinct_theme::{
    css_variables, tailwind_config, FileStorage, MemoryStorage, RootStyle, StyleScope,
    SubscriptionId, ThemeContext, ThemePropagator, TokenStore,
};
use tracing::{debug, info};

/// A running editor session.
///
/// Opening a session restores the persisted snapshot, applies it to the
/// root style scope once and keeps the scope in sync with every later
/// commit until the session is dropped.
pub struct Editor {
    config: EditorConfig,
    store: Arc<TokenStore>,
    propagator: Arc<Mutex<ThemePropagator<RootStyle>>>,
    subscription: SubscriptionId,
}

impl Editor {
    pub fn open(config: EditorConfig) -> Result<Self> {
        let options = config.store_options()?;
        let store = match &config.storage.dir {
            Some(dir) => {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create storage directory {}", dir.display())
                })?;
                info!("Opening token store in {}", dir.display());
                TokenStore::with_options(FileStorage::new(dir), options)
            }
            None => {
                debug!("Opening in-memory token store");
                TokenStore::with_options(MemoryStorage::new(), options)
            }
        };
        let store = Arc::new(store);

        let mut propagator = ThemePropagator::new(RootStyle::new());
        propagator.apply(&store.snapshot());
        let propagator = Arc::new(Mutex::new(propagator));

        let effect = Arc::clone(&propagator);
        let subscription = store.subscribe(move |snapshot| {
            effect.lock().unwrap().apply(snapshot);
        });

        Ok(Self {
            config,
            store,
            propagator,
            subscription,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Make this session's store the process-wide theme context.
    ///
    /// Returns `false` if a context was already installed.
    pub fn install_context(&self) -> bool {
        ThemeContext::init(Arc::clone(&self.store))
    }

    // ========== Panels ==========

    pub fn colors(&self) -> ColorPanel {
        ColorPanel::new(Arc::clone(&self.store))
    }

    pub fn typography(&self) -> TypographyPanel {
        TypographyPanel::new(Arc::clone(&self.store))
    }

    pub fn radius(&self) -> RadiusPanel {
        RadiusPanel::new(Arc::clone(&self.store))
    }

    pub fn shadows(&self) -> ShadowPanel {
        ShadowPanel::new(Arc::clone(&self.store))
    }

    // ========== Output ==========

    /// Current value of one custom property on the root scope
    pub fn root_property(&self, name: &str) -> Option<String> {
        self.propagator
            .lock()
            .unwrap()
            .scope()
            .get_property(name)
            .map(str::to_string)
    }

    /// The root scope rendered as a stylesheet
    pub fn stylesheet(&self) -> String {
        self.propagator.lock().unwrap().scope().to_stylesheet()
    }

    pub fn export_css(&self) -> String {
        css_variables(&self.store.tokens())
    }

    pub fn export_tailwind(&self) -> Result<String> {
        tailwind_config(&self.store.tokens()).context("Failed to render Tailwind config")
    }

    /// Restore every token and selection to defaults
    pub fn reset(&self) {
        self.store.reset_tokens();
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

//! Process-wide theme context
//!
//! Components that are not handed a store explicitly read it from here.
//! The host initializes the context once at startup:
//!
//! ```ignore
//! let store = Arc::new(TokenStore::new(MemoryStorage::new()));
//! ThemeContext::init(store);
//!
//! // later, anywhere
//! let radius = ThemeContext::get().snapshot().selected_radius().to_string();
//! ```

use crate::state::TokenStore;
use std::sync::{Arc, OnceLock};

/// Global theme context instance
static THEME_CONTEXT: OnceLock<Arc<TokenStore>> = OnceLock::new();

/// Accessor for the shared [`TokenStore`]
pub struct ThemeContext;

impl ThemeContext {
    /// Install the shared store. The first call wins; returns whether this
    /// call installed it.
    pub fn init(store: Arc<TokenStore>) -> bool {
        let installed = THEME_CONTEXT.set(store).is_ok();
        if !installed {
            tracing::debug!("ThemeContext::init - already initialized, keeping existing store");
        }
        installed
    }

    /// Get the shared store.
    ///
    /// Reading the context before [`ThemeContext::init`] is a programming
    /// error and panics.
    pub fn get() -> &'static Arc<TokenStore> {
        THEME_CONTEXT
            .get()
            .expect("ThemeContext not initialized. Call ThemeContext::init() at app startup.")
    }

    /// Get the shared store if it has been installed
    pub fn try_get() -> Option<&'static Arc<TokenStore>> {
        THEME_CONTEXT.get()
    }
}

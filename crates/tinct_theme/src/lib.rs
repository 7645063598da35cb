//! Tinct Theme
//!
//! The design-token model behind the tinct editor: a typed token set, an
//! observable and persisted store, contrast-aware CSS propagation, and
//! copy-out exporters.
//!
//! # Overview
//!
//! - **Tokens**: color scales and single colors, typography, radii, shadows
//! - **Store**: every mutation commits, persists, then notifies subscribers
//! - **Propagation**: a subscriber that writes CSS custom properties onto a
//!   style scope (the document root in a browser host)
//! - **Export**: a `:root` CSS block and a Tailwind theme config
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tinct_theme::{MemoryStorage, RootStyle, ThemePropagator, TokenStore, ShadeKey};
//!
//! let store = TokenStore::new(MemoryStorage::new());
//! let mut propagator = ThemePropagator::new(RootStyle::new());
//! propagator.apply(&store.snapshot());
//!
//! store.update_color("primary", Some(ShadeKey::S500), "#ff5500")?;
//! propagator.apply(&store.snapshot());
//! assert_eq!(propagator.scope().get_property("--primary-500"), Some("#ff5500"));
//! ```
//!
//! # Persistence
//!
//! Snapshots are stored as a versioned JSON envelope under a single key.
//! A stored entry that does not parse, has another version, or lacks a
//! required color group is discarded; the store then starts from
//! [`defaults::default_tokens`].

pub mod context;
pub mod contrast;
pub mod defaults;
mod error;
pub mod export;
pub mod persist;
pub mod propagate;
pub mod state;
pub mod storage;
pub mod tokens;

// Re-export commonly used types
pub use context::ThemeContext;
pub use contrast::contrast_color;
pub use defaults::{default_tokens, FontFamilyPreset};
pub use error::ThemeError;
pub use export::{css_variables, tailwind_config};
pub use persist::{DEFAULT_STORAGE_KEY, STORE_VERSION};
pub use propagate::{css_properties, RootStyle, StyleScope, ThemePropagator};
pub use state::{Selection, StoreOptions, StoreSnapshot, SubscriptionId, TokenStore};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use tokens::*;

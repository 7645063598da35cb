//! Tinct Editor
//!
//! Headless customizer panels over a [`tinct_theme::TokenStore`], plus the
//! glue a host application needs: `tinct.toml` configuration, logging
//! bootstrap and an [`Editor`] session that keeps the root style scope in
//! sync with the store.
//!
//! ```rust,ignore
//! use tinct_editor::{Editor, EditorConfig};
//!
//! tinct_editor::logging::init("info");
//! let editor = Editor::open(EditorConfig::load_or_default(".".as_ref())?)?;
//! editor.radius().select(tinct_theme::RadiusKey::Lg);
//! println!("{}", editor.stylesheet());
//! ```

pub mod config;
pub mod editor;
pub mod logging;
pub mod panels;
pub mod preview;

pub use config::EditorConfig;
pub use editor::Editor;
pub use panels::{ColorPanel, ColorSwatch, RadiusPanel, ShadowPanel, TypographyPanel};
pub use preview::{design_preview, OptionChip, PreviewElement, PreviewKind, StyleDecl};

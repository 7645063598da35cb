//! Versioned snapshot encoding for [`Storage`]
//!
//! The persisted entry is a JSON envelope:
//!
//! ```json
//! { "version": 1, "state": { "tokens": { ... }, "selectedRadius": "md", ... } }
//! ```
//!
//! Loading is all-or-nothing. An entry that fails to parse, carries another
//! version, or lacks a required color group is discarded and removed.

use crate::state::StoreSnapshot;
use crate::storage::Storage;
use crate::tokens::ColorGroup;
use crate::ThemeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version written alongside every snapshot
pub const STORE_VERSION: u32 = 1;

/// Default storage entry name
pub const DEFAULT_STORAGE_KEY: &str = "design-store";

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Why a persisted entry was not loaded
#[derive(Debug, Error)]
pub enum SnapshotRejected {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("color group `{}` is missing or has the wrong shape", .0.name())]
    InvalidColorGroup(ColorGroup),
}

/// Serialize a snapshot into its persisted envelope
pub fn encode(snapshot: &StoreSnapshot) -> Result<String, ThemeError> {
    Ok(serde_json::to_string(&Envelope {
        version: STORE_VERSION,
        state: snapshot,
    })?)
}

/// Parse and validate a persisted envelope
pub fn decode(raw: &str) -> Result<StoreSnapshot, SnapshotRejected> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw)?;
    if envelope.version != STORE_VERSION {
        return Err(SnapshotRejected::VersionMismatch {
            found: envelope.version,
            expected: STORE_VERSION,
        });
    }

    let snapshot: StoreSnapshot = serde_json::from_value(envelope.state)?;
    if let Some(group) = snapshot.tokens.colors.first_invalid_group() {
        return Err(SnapshotRejected::InvalidColorGroup(group));
    }
    Ok(snapshot)
}

/// Load the snapshot stored under `key`, discarding anything invalid
pub fn load(storage: &dyn Storage, key: &str) -> Option<StoreSnapshot> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("persist::load - could not read `{}`: {}", key, e);
            return None;
        }
    };

    match decode(&raw) {
        Ok(snapshot) => {
            tracing::debug!("persist::load - restored `{}`", key);
            Some(snapshot)
        }
        Err(reason) => {
            tracing::warn!("persist::load - discarding `{}`: {}", key, reason);
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("persist::load - could not remove `{}`: {}", key, e);
            }
            None
        }
    }
}

/// Write `snapshot` under `key`
pub fn save(storage: &dyn Storage, key: &str, snapshot: &StoreSnapshot) -> Result<(), ThemeError> {
    storage.set_item(key, &encode(snapshot)?)
}

//! JSON file helpers shared by the store modules.

use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PlannerError, Result};

/// Read and decode a JSON file, returning `None` if it does not exist.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path).map_err(|e| PlannerError::file_system(path, e))?;
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PlannerError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode `value` as pretty JSON and replace `path` with it.
///
/// The document is written to a sibling `.tmp` file first and renamed over
/// the target, so readers never observe a half-written file.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");

    fs::write(&tmp_path, body).map_err(|e| PlannerError::file_system(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| PlannerError::file_system(path, e))
}

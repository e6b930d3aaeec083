use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::error::ExportError;
use super::state::AppState;
use super::state::Region;

pub const EXPORT_TYPE_DASHBOARD_SUMMARY: &str = "dashboard_summary";

/// Body of the header's export shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub timestamp: String,
    pub region: String,
    pub search_query: String,
    pub export_type: String,
}

impl ExportPayload {
    pub fn new(region: Region, search_query: &str, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            region: region.as_str().to_string(),
            search_query: search_query.to_string(),
            export_type: EXPORT_TYPE_DASHBOARD_SUMMARY.to_string(),
        }
    }

    pub fn from_state(state: &AppState, now: DateTime<Utc>) -> Self {
        Self::new(state.selected_region, &state.search_query, now)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_file_name(epoch_ms: i64) -> String {
    format!("aggree-export-{epoch_ms}.json")
}

pub fn write_export(
    dir: &Path,
    file_name: &str,
    payload: &ExportPayload,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(file_name);
    let body = payload.to_json_pretty()?;
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, body).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

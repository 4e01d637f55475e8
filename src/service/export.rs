use crate::model::Lead;
use crate::util::error::ServiceError;
use chrono::Utc;
use tracing::info;

/// A downloadable snapshot of the currently visible leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// `leads_export_<YYYY-MM-DD>.json`
    pub file_name: String,
    /// Pretty-printed JSON array.
    pub contents: String,
}

/// Serialize the visible set. Pure; the caller decides what "visible" means
/// and where the artifact goes.
pub fn export_visible(leads: &[&Lead]) -> Result<ExportArtifact, ServiceError> {
    let contents = serde_json::to_string_pretty(leads)
        .map_err(|e| ServiceError::Serialization(e.to_string()))?;
    let file_name = format!("leads_export_{}.json", Utc::now().format("%Y-%m-%d"));
    info!(file = %file_name, leads = leads.len(), "export prepared");
    Ok(ExportArtifact {
        file_name,
        contents,
    })
}

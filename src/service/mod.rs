pub mod auth;
pub mod export;
pub mod filter;
pub mod lead_store;
pub mod seed;

pub use auth::{authenticate, require_admin, CredentialVerifier, PlaintextVerifier, Session};
pub use export::{export_visible, ExportArtifact};
pub use filter::{visible_leads, LeadFilters};
pub use lead_store::{LeadStats, LeadStore};

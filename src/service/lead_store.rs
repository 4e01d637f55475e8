use crate::model::{Lead, LeadStatus, LeadType, Note, User};
use crate::repository::storage_client::{StorageClient, LEADS_KEY, USERS_KEY};
use crate::service::seed;
use crate::util::error::ServiceError;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, info, instrument, warn};

/// Owns the user and lead collections for the lifetime of the session.
///
/// The collections are loaded (or seeded) once at construction; afterwards
/// the in-memory state is the source of truth and every successful lead
/// mutation writes the whole collection back through the storage client.
/// Write failures are swallowed by the client, so storage is eventually
/// consistent with memory at best — it is only read again at next start.
pub struct LeadStore {
    storage: StorageClient,
    users: Vec<User>,
    leads: Vec<Lead>,
    last_note_id: i64,
}

/// Dashboard tile counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadStats {
    pub total: usize,
    pub new: usize,
    pub contacted: usize,
    pub interested: usize,
    pub surplus: usize,
    pub future: usize,
}

impl LeadStore {
    /// Load both collections, seeding the built-in defaults when storage has
    /// nothing (or nothing readable) under the expected keys.
    pub async fn init(storage: StorageClient) -> Self {
        Self::init_with_defaults(storage, seed::default_users(), seed::default_leads()).await
    }

    #[instrument(skip_all)]
    pub async fn init_with_defaults(
        storage: StorageClient,
        default_users: Vec<User>,
        default_leads: Vec<Lead>,
    ) -> Self {
        let users = match storage.get::<Vec<User>>(USERS_KEY).await {
            Some(users) => users,
            None => {
                info!("no stored users, seeding {} defaults", default_users.len());
                storage.set(USERS_KEY, &default_users).await;
                default_users
            }
        };

        let leads = match storage.get::<Vec<Lead>>(LEADS_KEY).await {
            Some(leads) => leads,
            None => {
                info!("no stored leads, seeding {} defaults", default_leads.len());
                storage.set(LEADS_KEY, &default_leads).await;
                default_leads
            }
        };

        let last_note_id = leads
            .iter()
            .flat_map(|lead| lead.notes.iter())
            .map(|note| note.id)
            .max()
            .unwrap_or(0);

        info!(users = users.len(), leads = leads.len(), "store initialized");
        Self {
            storage,
            users,
            leads,
            last_note_id,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn lead(&self, lead_id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == lead_id)
    }

    pub fn user_by_id(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Set a lead's status and refresh `lastModified`. Unknown ids are a
    /// silent no-op; setting the already-current status still refreshes
    /// `lastModified`. Returns whether a lead was touched.
    #[instrument(skip(self))]
    pub async fn update_status(&mut self, lead_id: &str, status: LeadStatus) -> bool {
        let Some(lead) = self.leads.iter_mut().find(|l| l.id == lead_id) else {
            debug!("status update for unknown lead {lead_id} ignored");
            return false;
        };
        lead.status = status;
        lead.last_modified = now_iso();
        info!(lead = %lead_id, status = %status, "lead status updated");
        self.persist_leads().await;
        true
    }

    /// Append a note authored by `author` (a display name). Empty or
    /// whitespace-only text is rejected as a silent no-op, as is an unknown
    /// lead id. Returns the created note.
    #[instrument(skip(self, text))]
    pub async fn add_note(&mut self, lead_id: &str, text: &str, author: &str) -> Option<Note> {
        if text.trim().is_empty() {
            debug!("empty note for lead {lead_id} rejected");
            return None;
        }
        let Some(idx) = self.leads.iter().position(|l| l.id == lead_id) else {
            debug!("note for unknown lead {lead_id} ignored");
            return None;
        };

        let note = Note {
            id: self.next_note_id(),
            text: text.to_string(),
            author: author.to_string(),
            created_at: now_iso(),
        };
        let lead = &mut self.leads[idx];
        lead.notes.push(note.clone());
        lead.last_modified = now_iso();
        info!(lead = %lead_id, author = %author, "note added");
        self.persist_leads().await;
        Some(note)
    }

    /// Assign (or with `None`, unassign) a lead and refresh `lastModified`.
    /// Unknown ids are a silent no-op.
    #[instrument(skip(self))]
    pub async fn assign_lead(&mut self, lead_id: &str, user_id: Option<String>) -> bool {
        let Some(lead) = self.leads.iter_mut().find(|l| l.id == lead_id) else {
            debug!("assignment for unknown lead {lead_id} ignored");
            return false;
        };
        lead.assigned_to = user_id;
        lead.last_modified = now_iso();
        info!(lead = %lead_id, assigned_to = ?lead.assigned_to, "lead assigned");
        self.persist_leads().await;
        true
    }

    /// Merge a pasted JSON array of (possibly partial) lead records into the
    /// collection. A record whose `caseNumber` matches an existing lead is
    /// shallow-merged over it (incoming fields win, absent fields are
    /// preserved; the first match wins when case numbers repeat); anything
    /// else is appended as a new lead.
    ///
    /// All-or-nothing: if the payload is not a JSON array of objects, or any
    /// record fails to parse into a lead, the collection is left unchanged.
    /// Returns the number of incoming records.
    #[instrument(skip_all)]
    pub async fn bulk_upload(&mut self, raw: &str) -> Result<usize, ServiceError> {
        let incoming: Vec<JsonMap<String, JsonValue>> = serde_json::from_str(raw).map_err(|e| {
            warn!("bulk upload rejected: {e}");
            ServiceError::MalformedUpload(e.to_string())
        })?;

        let mut merged = self.leads.clone();
        for record in &incoming {
            let case_number = record
                .get("caseNumber")
                .and_then(JsonValue::as_str)
                .unwrap_or_default();
            match merged.iter().position(|l| l.case_number == case_number) {
                Some(idx) => {
                    let mut base = serde_json::to_value(&merged[idx])
                        .map_err(|e| ServiceError::Serialization(e.to_string()))?;
                    if let JsonValue::Object(ref mut fields) = base {
                        for (key, value) in record {
                            fields.insert(key.clone(), value.clone());
                        }
                    }
                    merged[idx] = serde_json::from_value(base).map_err(|e| {
                        warn!("bulk upload rejected while merging {case_number}: {e}");
                        ServiceError::MalformedUpload(e.to_string())
                    })?;
                }
                None => {
                    let lead: Lead = serde_json::from_value(JsonValue::Object(record.clone()))
                        .map_err(|e| {
                            warn!("bulk upload rejected on new record: {e}");
                            ServiceError::MalformedUpload(e.to_string())
                        })?;
                    merged.push(lead);
                }
            }
        }

        let count = incoming.len();
        info!(
            incoming = count,
            total = merged.len(),
            "bulk upload merged"
        );
        self.leads = merged;
        self.persist_leads().await;
        Ok(count)
    }

    pub fn stats(&self) -> LeadStats {
        LeadStats {
            total: self.leads.len(),
            new: self.count_status(LeadStatus::New),
            contacted: self.count_status(LeadStatus::Contacted),
            interested: self.count_status(LeadStatus::Interested),
            surplus: self
                .leads
                .iter()
                .filter(|l| l.lead_type == LeadType::Surplus)
                .count(),
            future: self
                .leads
                .iter()
                .filter(|l| l.lead_type == LeadType::FutureAuction)
                .count(),
        }
    }

    /// Sorted, deduplicated county names, for the county filter dropdown.
    pub fn counties(&self) -> Vec<String> {
        let mut counties: Vec<String> = self.leads.iter().map(|l| l.county.clone()).collect();
        counties.sort();
        counties.dedup();
        counties
    }

    fn count_status(&self, status: LeadStatus) -> usize {
        self.leads.iter().filter(|l| l.status == status).count()
    }

    fn next_note_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_note_id + 1);
        self.last_note_id = id;
        id
    }

    /// Full-collection write-back. The client swallows failures, so memory
    /// stays authoritative either way.
    async fn persist_leads(&self) {
        self.storage.set(LEADS_KEY, &self.leads).await;
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

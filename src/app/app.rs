use crate::app::view::Navigator;
use crate::config::{AdminSeedConfig, ConfigError, RedisConfig};
use crate::model::{Lead, Note, User};
use crate::repository::kv_backend::KvError;
use crate::repository::redis_backend::RedisKvBackend;
use crate::repository::storage_client::StorageClient;
use crate::service::auth::{authenticate, PlaintextVerifier, Session};
use crate::service::export::{export_visible, ExportArtifact};
use crate::service::filter::{visible_leads, LeadFilters};
use crate::service::lead_store::LeadStore;
use crate::service::seed;
use crate::util::error::{AuthError, ServiceError};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage backend error: {0}")]
    Storage(#[from] KvError),
}

/// The whole application state: domain store, session, navigator, and
/// filter inputs. A presentation layer owns one `App` and renders from it;
/// there are no ambient singletons.
pub struct App {
    pub store: LeadStore,
    pub session: Session,
    pub nav: Navigator,
    pub filters: LeadFilters,
    verifier: PlaintextVerifier,
}

impl App {
    /// Bootstrap against Redis configured from the environment (`.env` is
    /// loaded first). The seeded admin account honors the
    /// `ADMIN_USERNAME`/`ADMIN_PASSWORD`/`ADMIN_NAME` override.
    pub async fn from_env() -> Result<Self, BootstrapError> {
        match dotenv() {
            Ok(path) => info!("loaded environment from {}", path.display()),
            Err(e) => debug!("no .env file loaded: {e}"),
        }

        let redis_config = RedisConfig::from_env()?;
        let backend = RedisKvBackend::connect(redis_config).await?;
        let storage = StorageClient::new(Arc::new(backend));
        Ok(Self::init(storage).await)
    }

    /// Bootstrap over any storage client (e.g. a `MemoryKvBackend` for
    /// embedding or tests), with the built-in default seed data.
    pub async fn init(storage: StorageClient) -> Self {
        let mut users = seed::default_users();
        match AdminSeedConfig::from_env() {
            Ok(seed_conf) => {
                if let Some(admin) = users.iter_mut().find(|u| u.role.is_admin()) {
                    info!(username = %seed_conf.username, "seeded admin overridden from environment");
                    admin.username = seed_conf.username;
                    admin.password = seed_conf.password;
                    if let Some(name) = seed_conf.name {
                        admin.name = name;
                    }
                }
            }
            Err(e) => debug!("no admin seed override: {e}"),
        }
        Self::init_with_defaults(storage, users, seed::default_leads()).await
    }

    /// Bootstrap with explicit seed collections.
    pub async fn init_with_defaults(
        storage: StorageClient,
        default_users: Vec<User>,
        default_leads: Vec<Lead>,
    ) -> Self {
        let store = LeadStore::init_with_defaults(storage, default_users, default_leads).await;
        App {
            store,
            session: Session::default(),
            nav: Navigator::default(),
            filters: LeadFilters::default(),
            verifier: PlaintextVerifier,
        }
    }

    /// Exact username+password match against the stored collection; success
    /// sets the session user and navigates to the dashboard. Failure leaves
    /// all state untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let user = authenticate(self.store.users(), username, password, &self.verifier)?.clone();
        self.session.set(user);
        self.nav.to_dashboard();
        Ok(())
    }

    /// Clear the session and return to the login screen, discarding any
    /// in-progress selection.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.current_user() {
            info!(username = %user.username, "logout");
        }
        self.session.clear();
        self.nav.reset();
    }

    /// The filtered, role-gated lead list for the current user. Empty when
    /// nobody is logged in.
    pub fn visible_leads(&self) -> Vec<&Lead> {
        match self.session.current_user() {
            Some(user) => visible_leads(self.store.leads(), &self.filters, user),
            None => Vec::new(),
        }
    }

    /// Select an existing lead and show its detail screen. Unknown ids
    /// leave the view unchanged.
    pub fn open_lead(&mut self, lead_id: &str) -> bool {
        if self.store.lead(lead_id).is_none() {
            debug!(lead = %lead_id, "refusing to open unknown lead");
            return false;
        }
        self.nav.open_lead(lead_id.to_string());
        true
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.nav.selected_lead().and_then(|id| self.store.lead(id))
    }

    /// Enter the admin screen; non-admins fall through to the dashboard.
    pub fn open_admin(&mut self) {
        if let Some(user) = self.session.current_user().cloned() {
            self.nav.open_admin(&user);
        }
    }

    /// Append a note to `lead_id` authored by the current user's display
    /// name. No-op when nobody is logged in.
    pub async fn add_note(&mut self, lead_id: &str, text: &str) -> Option<Note> {
        let author = self.session.current_user()?.name.clone();
        self.store.add_note(lead_id, text, &author).await
    }

    /// Export the currently visible set as a downloadable artifact.
    pub fn export_visible(&self) -> Result<ExportArtifact, ServiceError> {
        export_visible(&self.visible_leads())
    }
}

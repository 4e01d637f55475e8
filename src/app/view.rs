use crate::model::User;
use crate::service::auth::require_admin;
use tracing::{debug, warn};

/// The active screen. `Login` is the reset state; there is no terminal
/// state while the session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    LeadDetail,
    Admin,
}

/// Pure view state: which screen is active and which lead is selected.
/// No business rules live here beyond the admin gate on entry.
#[derive(Debug, Default)]
pub struct Navigator {
    view: View,
    selected_lead: Option<String>,
}

impl Navigator {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_lead(&self) -> Option<&str> {
        self.selected_lead.as_deref()
    }

    pub fn to_dashboard(&mut self) {
        self.view = View::Dashboard;
    }

    /// Select a lead and show its detail screen. Callers are expected to
    /// hand in an id that exists (`app::App::open_lead` checks).
    pub fn open_lead(&mut self, lead_id: String) {
        debug!(lead = %lead_id, "opening lead detail");
        self.selected_lead = Some(lead_id);
        self.view = View::LeadDetail;
    }

    /// Enter the admin screen, falling through to the dashboard when the
    /// viewer lacks the admin role.
    pub fn open_admin(&mut self, viewer: &User) {
        match require_admin(viewer) {
            Ok(()) => self.view = View::Admin,
            Err(e) => {
                warn!(user = %viewer.username, "admin screen refused: {e}");
                self.view = View::Dashboard;
            }
        }
    }

    /// Back to the login screen, discarding any in-progress selection.
    pub fn reset(&mut self) {
        self.view = View::Login;
        self.selected_lead = None;
    }
}

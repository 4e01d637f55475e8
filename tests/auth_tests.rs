use std::sync::Arc;
use taxdeed_crm::app::{App, View};
use taxdeed_crm::model::UserRole;
use taxdeed_crm::repository::{MemoryKvBackend, StorageClient};
use taxdeed_crm::service::auth::{authenticate, require_admin, PlaintextVerifier};
use taxdeed_crm::service::seed;
use taxdeed_crm::util::error::AuthError;
use tracing::info;

/// Initialize tracing for tests
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

async fn test_app() -> App {
    let storage = StorageClient::new(Arc::new(MemoryKvBackend::new()));
    App::init_with_defaults(storage, seed::default_users(), seed::default_leads()).await
}

mod authenticate_tests {
    use super::*;

    #[test]
    fn test_admin_credentials_succeed() {
        init_tracing();
        let users = seed::default_users();
        let user = authenticate(&users, "ReboundCapitalGroup", "RCG123", &PlaintextVerifier)
            .expect("seeded admin credentials must authenticate");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Admin User");
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        init_tracing();
        let users = seed::default_users();
        let result = authenticate(&users, "ReboundCapitalGroup", "wrong", &PlaintextVerifier);
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[test]
    fn test_unknown_username_is_invalid_credentials() {
        init_tracing();
        let users = seed::default_users();
        let result = authenticate(&users, "nobody", "RCG123", &PlaintextVerifier);
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        init_tracing();
        let users = seed::default_users();
        assert!(authenticate(&users, "reboundcapitalgroup", "RCG123", &PlaintextVerifier).is_err());
        assert!(authenticate(&users, "ReboundCapitalGroup", "rcg123", &PlaintextVerifier).is_err());
    }
}

mod capability_tests {
    use super::*;

    #[test]
    fn test_require_admin_grants_admin() {
        init_tracing();
        let users = seed::default_users();
        assert!(require_admin(&users[0]).is_ok());
    }

    #[test]
    fn test_require_admin_refuses_agent() {
        init_tracing();
        let users = seed::default_users();
        assert_eq!(require_admin(&users[1]).unwrap_err(), AuthError::AdminRequired);
    }
}

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_sets_session_and_navigates_to_dashboard() {
        init_tracing();
        let mut app = test_app().await;
        assert_eq!(app.nav.view(), View::Login);

        app.login("ReboundCapitalGroup", "RCG123").expect("login should succeed");
        assert_eq!(app.nav.view(), View::Dashboard);
        let current = app.session.current_user().expect("session should hold a user");
        assert_eq!(current.role, UserRole::Admin);
        info!("scenario A: admin login lands on the dashboard");
    }

    #[tokio::test]
    async fn test_failed_login_stays_on_login_with_no_session() {
        init_tracing();
        let mut app = test_app().await;

        let result = app.login("ReboundCapitalGroup", "wrong");
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        assert_eq!(app.nav.view(), View::Login);
        assert!(!app.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_selection() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();
        assert!(app.open_lead("LEAD_00001"));

        app.logout();
        assert_eq!(app.nav.view(), View::Login);
        assert!(!app.session.is_authenticated());
        assert!(app.nav.selected_lead().is_none());
        assert!(app.selected_lead().is_none());
    }
}

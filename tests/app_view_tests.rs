use std::sync::Arc;
use taxdeed_crm::app::{App, View};
use taxdeed_crm::model::Lead;
use taxdeed_crm::repository::{MemoryKvBackend, StorageClient};
use taxdeed_crm::service::seed;
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

mod navigation_tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_view_is_login() {
        init_tracing();
        let app = test_app().await;
        assert_eq!(app.nav.view(), View::Login);
        assert!(app.nav.selected_lead().is_none());
        assert!(app.visible_leads().is_empty());
    }

    #[tokio::test]
    async fn test_open_lead_selects_and_shows_detail() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();

        assert!(app.open_lead("LEAD_00001"));
        assert_eq!(app.nav.view(), View::LeadDetail);
        assert_eq!(app.selected_lead().map(|l| l.id.as_str()), Some("LEAD_00001"));
    }

    #[tokio::test]
    async fn test_open_unknown_lead_leaves_view_unchanged() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();

        assert!(!app.open_lead("LEAD_99999"));
        assert_eq!(app.nav.view(), View::Dashboard);
        assert!(app.selected_lead().is_none());
    }

    #[tokio::test]
    async fn test_back_returns_to_dashboard() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();
        app.open_lead("LEAD_00001");

        app.nav.to_dashboard();
        assert_eq!(app.nav.view(), View::Dashboard);
    }

    #[tokio::test]
    async fn test_admin_screen_opens_for_admin() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();

        app.open_admin();
        assert_eq!(app.nav.view(), View::Admin);
    }

    #[tokio::test]
    async fn test_admin_screen_falls_through_to_dashboard_for_agent() {
        init_tracing();
        let mut app = test_app().await;
        app.login("agent1", "agent123").unwrap();

        app.open_admin();
        assert_eq!(app.nav.view(), View::Dashboard);
        info!("non-admin never reaches the admin screen");
    }

    #[tokio::test]
    async fn test_logout_resets_from_any_screen() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();
        app.open_admin();
        assert_eq!(app.nav.view(), View::Admin);

        app.logout();
        assert_eq!(app.nav.view(), View::Login);
        assert!(app.nav.selected_lead().is_none());
    }
}

mod note_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_note_author_is_current_users_display_name() {
        init_tracing();
        let mut app = test_app().await;
        app.login("agent1", "agent123").unwrap();

        let before = app.store.lead("LEAD_00001").unwrap().notes.len();
        let note = app
            .add_note("LEAD_00001", "Called client")
            .await
            .expect("note should be created");
        assert_eq!(note.author, "Agent One");
        assert_eq!(app.store.lead("LEAD_00001").unwrap().notes.len(), before + 1);
        info!("scenario B: note carries the author's display name");
    }

    #[tokio::test]
    async fn test_empty_note_leaves_sequence_unchanged() {
        init_tracing();
        let mut app = test_app().await;
        app.login("agent1", "agent123").unwrap();

        assert!(app.add_note("LEAD_00001", "").await.is_none());
        assert!(app.store.lead("LEAD_00001").unwrap().notes.is_empty());
    }

    #[tokio::test]
    async fn test_note_without_session_is_refused() {
        init_tracing();
        let mut app = test_app().await;
        assert!(app.add_note("LEAD_00001", "drive-by").await.is_none());
    }
}

mod export_tests {
    use super::*;

    #[tokio::test]
    async fn test_export_file_name_embeds_current_date() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();

        let artifact = app.export_visible().expect("export should serialize");
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(artifact.file_name, format!("leads_export_{today}.json"));
    }

    #[tokio::test]
    async fn test_export_contains_exactly_the_visible_set() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();

        let artifact = app.export_visible().unwrap();
        let exported: Vec<Lead> = serde_json::from_str(&artifact.contents).unwrap();
        assert_eq!(exported.len(), app.visible_leads().len());
        assert_eq!(exported[0].id, "LEAD_00001");
        // Pretty-printed output, not a single line.
        assert!(artifact.contents.contains('\n'));
    }

    #[tokio::test]
    async fn test_export_respects_role_visibility() {
        init_tracing();
        let mut app = test_app().await;
        app.login("agent1", "agent123").unwrap();

        // Nothing is assigned to the agent, so the export is an empty array.
        let artifact = app.export_visible().unwrap();
        let exported: Vec<Lead> = serde_json::from_str(&artifact.contents).unwrap();
        assert!(exported.is_empty());
    }

    #[tokio::test]
    async fn test_export_does_not_mutate_the_store() {
        init_tracing();
        let mut app = test_app().await;
        app.login("ReboundCapitalGroup", "RCG123").unwrap();
        let before = app.store.leads().to_vec();

        app.export_visible().unwrap();
        assert_eq!(app.store.leads(), before.as_slice());
    }
}

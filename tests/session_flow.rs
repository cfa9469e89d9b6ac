use admin_dashboard_ui::core::models::{guard_redirect, Route};
use admin_dashboard_ui::core::services::{KeyValueStore, MemoryStorage, Session};
use admin_dashboard_ui::core::{AppConfig, DashboardError};

#[test]
fn login_then_restore_then_logout() {
    let store = MemoryStorage::new();
    let config = AppConfig::default();

    let mut session = Session::restore(&store, &config);
    assert!(!session.is_authenticated());

    let route = session
        .login(&store, &config, "admin@example.com", "admin123")
        .unwrap();
    assert_eq!(route.path(), "/");
    assert!(session.is_authenticated());
    assert_eq!(store.get("isAuthenticated").unwrap().as_deref(), Some("true"));

    // A reload restores from storage
    assert!(Session::restore(&store, &config).is_authenticated());

    assert_eq!(session.logout(&store, &config), Route::Login);
    assert!(!session.is_authenticated());
    assert_eq!(store.get("isAuthenticated").unwrap(), None);
    assert!(!Session::restore(&store, &config).is_authenticated());
}

#[test]
fn wrong_credentials_stay_on_login() {
    let store = MemoryStorage::new();
    let config = AppConfig::default();
    let mut session = Session::default();

    assert_eq!(
        session.login(&store, &config, "admin@example.com", "wrong"),
        Err(DashboardError::InvalidCredentials)
    );
    assert_eq!(
        session.login(&store, &config, "Admin@example.com", "admin123"),
        Err(DashboardError::InvalidCredentials)
    );
    assert!(!session.is_authenticated());
    assert_eq!(store.get("isAuthenticated").unwrap(), None);
    assert_eq!(guard_redirect("/", session.is_authenticated()), Some(Route::Login));
}

#[test]
fn only_the_exact_flag_value_restores_a_session() {
    let store = MemoryStorage::new();
    let config = AppConfig::default();

    store.set("isAuthenticated", "TRUE").unwrap();
    assert!(!Session::restore(&store, &config).is_authenticated());
    store.set("isAuthenticated", "1").unwrap();
    assert!(!Session::restore(&store, &config).is_authenticated());
}

#[test]
fn configured_storage_key_and_credentials_are_used() {
    let store = MemoryStorage::new();
    let config = AppConfig::from_json(
        r#"{"admin_email":"ops@example.com","admin_password":"s3cret","auth_storage_key":"dash.session"}"#,
    )
    .unwrap();
    let mut session = Session::default();

    assert!(session
        .login(&store, &config, "admin@example.com", "admin123")
        .is_err());
    session
        .login(&store, &config, "ops@example.com", "s3cret")
        .unwrap();
    assert_eq!(store.get("dash.session").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("isAuthenticated").unwrap(), None);
}

#[test]
fn route_guards() {
    for route in [Route::Dashboard, Route::Users, Route::DailyScrum, Route::Reports] {
        assert_eq!(guard_redirect(route.path(), false), Some(Route::Login));
        assert_eq!(guard_redirect(route.path(), true), None);
    }
    assert_eq!(guard_redirect("/login", true), Some(Route::Dashboard));
    assert_eq!(guard_redirect("/login", false), None);
    assert_eq!(guard_redirect("/settings", true), Some(Route::Dashboard));
    assert_eq!(guard_redirect("/settings", false), Some(Route::Dashboard));
}

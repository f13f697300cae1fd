use super::*;
use crate::credentials::CredentialStore;
use crate::credentials::tests::{MemoryStore, UnavailableStore};
use crate::notify::ToastKind;
use crate::guard::{
    AccessDecision, DenyReason, Navigation, RouteAccess, RoutePolicy, evaluate, plan_navigation,
};
use crate::http::tests::{MockHttp, test_api};
use crate::notify::tests::RecordingNotifier;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::sync::atomic::Ordering;

// =========================================================
// Shared Mock Components
// =========================================================

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn hard_navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

type TestAuth = AuthService<MockHttp, MemoryStore, RecordingNotifier>;

fn setup() -> (TestAuth, MockHttp, MemoryStore, RecordingNotifier) {
    let (api, http, storage, notifier) = test_api();
    (AuthService::new(api), http, storage, notifier)
}

fn login_ok(http: &MockHttp, token: &str, role: &str) {
    http.respond(
        200,
        json!({"status": "OK", "meta": {"token": token, "role": role}}),
    );
}

fn body_of(http: &MockHttp, index: usize) -> serde_json::Value {
    let sent = http.sent();
    serde_json::from_str(sent[index].body.as_deref().unwrap()).unwrap()
}

// =========================================================
// login
// =========================================================

#[tokio::test]
async fn login_success_sets_session_and_store() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    login_ok(&http, "T1", "JOB_SEEKER");

    auth.login(&session, "a@x.com", "secret").await.unwrap();

    assert_eq!(session.get(), Session::signed_in(Some(Role::JobSeeker)));
    assert_eq!(auth.api().credentials().token().as_deref(), Some("T1"));
    assert_eq!(
        *notifier.toasts.borrow(),
        vec![(ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_string())]
    );

    let sent = http.sent();
    assert_eq!(sent[0].url, "https://api.example.test/auths/loginByEmail");
    let body = body_of(&http, 0);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["password"], "secret");
    assert!(body["deviceId"].as_str().unwrap().starts_with("web-"));
}

#[tokio::test]
async fn login_then_reload_restores_equivalent_session() {
    let (auth, http, storage, _) = setup();
    let session = Cell::new(Session::starting());
    auth.restore(&session);
    login_ok(&http, "T7", "COMPANY");
    auth.login(&session, "c@x.com", "pw").await.unwrap();

    // A new page load only shares the persisted storage.
    let reloaded_api = ApiClient::new(
        MockHttp::default(),
        "https://api.example.test",
        CredentialStore::new(storage.clone()),
        RecordingNotifier::default(),
    );
    let reloaded = AuthService::new(reloaded_api);
    let fresh = Cell::new(Session::starting());
    reloaded.restore(&fresh);

    assert_eq!(fresh.get(), session.get());
    assert_eq!(fresh.get(), Session::signed_in(Some(Role::Company)));
}

#[tokio::test]
async fn login_rejected_by_status_reports_once() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "INVALID_CREDENTIALS"}));

    let err = auth.login(&session, "a@x.com", "bad").await.unwrap_err();

    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(session.get(), Session::signed_out());
    assert!(auth.api().credentials().get().is_none());
    assert_eq!(notifier.errors(), vec![LOGIN_FAILED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn login_fails_when_credential_cannot_be_stored() {
    let http = MockHttp::default();
    let notifier = RecordingNotifier::default();
    let auth = AuthService::new(ApiClient::new(
        http.clone(),
        "https://api.example.test",
        CredentialStore::new(UnavailableStore),
        notifier.clone(),
    ));
    let session = Cell::new(Session::signed_out());
    login_ok(&http, "T1", "JOB_SEEKER");

    let err = auth.login(&session, "a@x.com", "pw").await.unwrap_err();

    assert!(matches!(err, ApiError::Storage(_)));
    assert_eq!(session.get(), Session::signed_out());
    assert!(auth.api().credentials().get().is_none());
    assert_eq!(notifier.errors(), vec![STORAGE_FAILED_MESSAGE.to_string()]);
    assert!(
        !notifier
            .toasts
            .borrow()
            .iter()
            .any(|(kind, _)| *kind == ToastKind::Success)
    );
}

#[tokio::test]
async fn login_ok_without_token_is_rejected() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "meta": {"role": "COMPANY"}}));

    let err = auth.login(&session, "a@x.com", "pw").await.unwrap_err();

    assert!(matches!(err, ApiError::Auth { .. }));
    assert!(!session.get().is_authenticated);
}

#[tokio::test]
async fn login_401_is_auth_error_reported_by_client_only() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(401, json!({"status": "UNAUTHORIZED"}));

    let err = auth.login(&session, "a@x.com", "bad").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(notifier.errors(), vec!["Operation failed".to_string()]);
}

#[tokio::test]
async fn login_releases_loading_on_network_failure() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    http.fail(ApiError::Network("offline".into()));

    let err = auth.login(&session, "a@x.com", "pw").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(!session.get().loading);
    assert_eq!(auth.in_flight.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn login_without_role_authenticates_with_no_role() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "meta": {"token": "T2"}}));

    auth.login(&session, "a@x.com", "pw").await.unwrap();

    assert_eq!(session.get(), Session::signed_in(None));
    assert_eq!(
        evaluate(&session.get(), &RoutePolicy::any_authenticated()),
        AccessDecision::Granted
    );
}

#[tokio::test]
async fn bearer_is_attached_after_login() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    login_ok(&http, "T1", "JOB_SEEKER");
    auth.login(&session, "a@x.com", "pw").await.unwrap();

    http.respond(200, json!({"status": "OK", "data": []}));
    let _ = auth.api().send(&headhunt_shared::MyApplicationsRequest).await.unwrap();

    let sent = http.sent();
    assert!(!sent[0].headers.contains_key("Authorization"));
    assert_eq!(
        sent[1].headers.get("Authorization").map(String::as_str),
        Some("Bearer T1")
    );
}

// =========================================================
// register
// =========================================================

#[tokio::test]
async fn register_then_logs_in_with_same_credentials() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "data": {"id": 11}}));
    login_ok(&http, "T3", "COMPANY");

    auth.register(&session, "co@x.com", "hunter22", Role::Company)
        .await
        .unwrap();

    assert_eq!(session.get(), Session::signed_in(Some(Role::Company)));
    let sent = http.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].url.ends_with("/auths/register"));
    assert!(sent[1].url.ends_with("/auths/loginByEmail"));
    assert_eq!(body_of(&http, 0)["role"], "COMPANY");
    assert_eq!(body_of(&http, 1)["email"], "co@x.com");
    assert_eq!(body_of(&http, 1)["password"], "hunter22");
}

#[tokio::test]
async fn register_success_shows_one_success_toast() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "data": {"id": 11}}));
    login_ok(&http, "T3", "JOB_SEEKER");

    auth.register(&session, "js@x.com", "hunter22", Role::JobSeeker)
        .await
        .unwrap();

    assert_eq!(
        *notifier.toasts.borrow(),
        vec![(ToastKind::Success, REGISTER_SUCCESS_MESSAGE.to_string())]
    );
}

#[tokio::test]
async fn register_accepts_any_data_shape() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "data": "user created"}));
    login_ok(&http, "T4", "COMPANY");

    auth.register(&session, "co@x.com", "hunter22", Role::Company)
        .await
        .unwrap();

    assert_eq!(http.sent().len(), 2);
    assert_eq!(session.get(), Session::signed_in(Some(Role::Company)));
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn register_with_failed_login_stays_signed_out() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "OK", "data": {"id": 11}}));
    http.respond(200, json!({"status": "WRONG_PASSWORD"}));

    let err = auth
        .register(&session, "a@x.com", "secret", Role::JobSeeker)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(session.get(), Session::signed_out());
    assert!(auth.api().credentials().get().is_none());
    // Only the login refusal is shown; register adds nothing on top.
    assert_eq!(notifier.errors(), vec![LOGIN_FAILED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn register_rejection_skips_login() {
    let (auth, http, _, notifier) = setup();
    let session = Cell::new(Session::signed_out());
    http.respond(200, json!({"status": "EMAIL_TAKEN"}));

    let err = auth
        .register(&session, "a@x.com", "secret", Role::JobSeeker)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(http.sent().len(), 1);
    assert_eq!(notifier.errors(), vec![REGISTER_FAILED_MESSAGE.to_string()]);
    assert!(!session.get().loading);
}

// =========================================================
// logout / restore
// =========================================================

#[tokio::test]
async fn logout_clears_everything_and_navigates_to_login() {
    let (auth, http, storage, _) = setup();
    let session = Cell::new(Session::signed_out());
    login_ok(&http, "T1", "JOB_SEEKER");
    auth.login(&session, "a@x.com", "pw").await.unwrap();
    let navigator = RecordingNavigator::default();

    auth.logout(&session, &navigator);

    assert_eq!(session.get(), Session::signed_out());
    assert!(storage.entries.borrow().is_empty());
    assert_eq!(*navigator.visits.borrow(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn protected_navigation_after_logout_is_not_authenticated() {
    let (auth, http, _, _) = setup();
    let session = Cell::new(Session::signed_out());
    login_ok(&http, "T1", "COMPANY");
    auth.login(&session, "a@x.com", "pw").await.unwrap();
    auth.logout(&session, &RecordingNavigator::default());

    for route in [
        AppRoute::Dashboard,
        AppRoute::ResumeEdit,
        AppRoute::CompanyJobs,
        AppRoute::CompanyJobEdit("3".into()),
    ] {
        let RouteAccess::Protected(policy) = route.access() else {
            panic!("{route} should be protected");
        };
        assert_eq!(
            evaluate(&session.get(), &policy),
            AccessDecision::Denied(DenyReason::NotAuthenticated)
        );
        assert!(matches!(
            plan_navigation(&session.get(), route),
            Navigation::Redirect { to: AppRoute::Login, .. }
        ));
    }
}

#[test]
fn restore_without_credentials_is_signed_out() {
    let (auth, _, _, _) = setup();
    let session = Cell::new(Session::starting());

    auth.restore(&session);

    assert_eq!(session.get(), Session::signed_out());
}

#[test]
fn device_ids_are_prefixed_and_fresh() {
    let a = device_id();
    let b = device_id();
    assert!(a.starts_with("web-"));
    assert_eq!(a.len(), 13);
    assert!(a[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_ne!(a, b);
}

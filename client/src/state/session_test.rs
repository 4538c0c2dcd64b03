use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;

use super::*;
use crate::net::auth_events::{AuthSubscription, ChangeBroadcaster};
use crate::net::error::AuthError;
use crate::net::types::{Credentials, Session, SignUpData, SignUpResponse};

// =============================================================
// Fakes
// =============================================================

enum InitialSession {
    Ready(Result<Option<Session>, AuthError>),
    Never,
    Gated(RefCell<Option<oneshot::Receiver<Option<Session>>>>),
}

struct FakeAuth {
    initial: InitialSession,
    changes: ChangeBroadcaster,
}

impl FakeAuth {
    fn new(initial: InitialSession) -> Self {
        Self { initial, changes: ChangeBroadcaster::new() }
    }
}

impl AuthProvider for FakeAuth {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match &self.initial {
            InitialSession::Ready(result) => result.clone(),
            InitialSession::Never => futures::future::pending().await,
            InitialSession::Gated(gate) => {
                let rx = gate.borrow_mut().take();
                match rx {
                    Some(rx) => Ok(rx.await.unwrap_or(None)),
                    None => Ok(None),
                }
            }
        }
    }

    fn subscribe(&self) -> (AuthSubscription, AuthChanges) {
        self.changes.subscribe()
    }

    async fn sign_in_with_password(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_up(&self, _credentials: &Credentials, _data: &SignUpData) -> Result<SignUpResponse, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeProfiles {
    roles: HashMap<String, Result<Option<String>, AuthError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeProfiles {
    fn with_role(mut self, user_id: &str, role: Result<Option<String>, AuthError>) -> Self {
        self.roles.insert(user_id.to_owned(), role);
        self
    }
}

impl ProfileStore for FakeProfiles {
    async fn fetch_role(&self, user_id: &str) -> Result<Option<String>, AuthError> {
        self.calls.borrow_mut().push(user_id.to_owned());
        self.roles.get(user_id).cloned().unwrap_or(Ok(None))
    }

    async fn update_role(&self, _user_id: &str, _role: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

#[derive(Default)]
struct Recorder {
    state: RefCell<AuthState>,
    publishes: Cell<usize>,
    settles: Cell<usize>,
}

impl SessionSink for Rc<Recorder> {
    fn publish(&self, user: Option<AppUser>) {
        self.state.borrow_mut().user = user;
        self.publishes.set(self.publishes.get() + 1);
    }

    fn settle(&self) {
        self.state.borrow_mut().loading = false;
        self.settles.set(self.settles.get() + 1);
    }
}

/// Returns `Pending` once, then completes.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

// =============================================================
// Helpers
// =============================================================

fn make_session(user_id: &str, metadata: serde_json::Value) -> Session {
    Session {
        access_token: format!("at-{user_id}"),
        refresh_token: format!("rt-{user_id}"),
        token_type: "bearer".to_owned(),
        expires_in: Some(3600),
        expires_at: Some(4_000_000_000),
        user: AuthUser {
            id: user_id.to_owned(),
            email: Some(format!("{user_id}@example.com")),
            user_metadata: metadata.as_object().cloned().unwrap_or_default(),
        },
    }
}

fn make_store(
    initial: InitialSession,
    profiles: FakeProfiles,
) -> (SessionStore<FakeAuth, FakeProfiles, Rc<Recorder>>, Rc<FakeAuth>, Rc<FakeProfiles>, Rc<Recorder>) {
    let auth = Rc::new(FakeAuth::new(initial));
    let profiles = Rc::new(profiles);
    let recorder = Rc::new(Recorder::default());
    let store = SessionStore::new(Rc::clone(&auth), Rc::clone(&profiles), Rc::clone(&recorder));
    (store, auth, profiles, recorder)
}

fn published_user(recorder: &Recorder) -> Option<AppUser> {
    recorder.state.borrow().user.clone()
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn metadata_role_is_published_without_lookup() {
    let session = make_session("u1", serde_json::json!({ "role": "parent" }));
    let (store, _auth, profiles, recorder) =
        make_store(InitialSession::Ready(Ok(Some(session))), FakeProfiles::default());

    futures::executor::block_on(store.initialize());

    let user = published_user(&recorder).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role(), Some("parent"));
    assert!(!recorder.state.borrow().loading);
    assert!(profiles.calls.borrow().is_empty());
}

#[test]
fn missing_role_is_filled_from_profile() {
    let session = make_session("u2", serde_json::json!({}));
    let profiles = FakeProfiles::default().with_role("u2", Ok(Some("child".to_owned())));
    let (store, _auth, profiles, recorder) = make_store(InitialSession::Ready(Ok(Some(session))), profiles);

    futures::executor::block_on(store.initialize());

    let user = published_user(&recorder).unwrap();
    assert_eq!(user.id, "u2");
    assert_eq!(user.role(), Some("child"));
    assert_eq!(*profiles.calls.borrow(), vec!["u2".to_owned()]);
}

#[test]
fn failed_lookup_publishes_original_record() {
    let session = make_session("u3", serde_json::json!({ "name": "Ravi" }));
    let raw = session.user.clone();
    let profiles = FakeProfiles::default().with_role("u3", Err(AuthError::Network("offline".to_owned())));
    let (store, _auth, _profiles, recorder) = make_store(InitialSession::Ready(Ok(Some(session))), profiles);

    futures::executor::block_on(store.initialize());

    assert_eq!(published_user(&recorder), Some(AppUser::from(&raw)));
    assert_eq!(published_user(&recorder).unwrap().role(), None);
    assert!(!recorder.state.borrow().loading);
}

#[test]
fn empty_profile_role_leaves_record_unchanged() {
    let session = make_session("u4", serde_json::json!({ "role": "" }));
    let raw = session.user.clone();
    let profiles = FakeProfiles::default().with_role("u4", Ok(Some(String::new())));
    let (store, _auth, profiles, recorder) = make_store(InitialSession::Ready(Ok(Some(session))), profiles);

    futures::executor::block_on(store.initialize());

    assert_eq!(published_user(&recorder), Some(AppUser::from(&raw)));
    assert_eq!(profiles.calls.borrow().len(), 1);
}

#[test]
fn no_session_publishes_signed_out() {
    let (store, _auth, _profiles, recorder) = make_store(InitialSession::Ready(Ok(None)), FakeProfiles::default());

    futures::executor::block_on(store.initialize());

    assert_eq!(published_user(&recorder), None);
    assert_eq!(recorder.publishes.get(), 1);
    assert_eq!(recorder.settles.get(), 1);
}

#[test]
fn provider_error_is_treated_as_signed_out() {
    let (store, _auth, _profiles, recorder) = make_store(
        InitialSession::Ready(Err(AuthError::Network("unreachable".to_owned()))),
        FakeProfiles::default(),
    );

    futures::executor::block_on(store.initialize());

    assert_eq!(published_user(&recorder), None);
    assert!(!recorder.state.borrow().loading);
}

#[test]
fn pending_initial_session_keeps_loading() {
    let (store, _auth, _profiles, recorder) = make_store(InitialSession::Never, FakeProfiles::default());

    assert!(store.initialize().now_or_never().is_none());

    assert!(recorder.state.borrow().loading);
    assert_eq!(recorder.publishes.get(), 0);
    assert_eq!(recorder.settles.get(), 0);
}

// =============================================================
// Change notifications
// =============================================================

#[test]
fn last_notification_wins() {
    let profiles = FakeProfiles::default().with_role("u3", Ok(Some("child".to_owned())));
    let (store, auth, _profiles, recorder) = make_store(InitialSession::Ready(Ok(None)), profiles);
    let (subscription, changes) = auth.subscribe();

    auth.changes.emit(&AuthChange::signed_in(make_session("u1", serde_json::json!({ "role": "parent" }))));
    auth.changes.emit(&AuthChange::token_refreshed(make_session("u1", serde_json::json!({ "role": "parent" }))));
    auth.changes.emit(&AuthChange::signed_out());
    auth.changes.emit(&AuthChange::signed_in(make_session("u3", serde_json::json!({}))));
    subscription.unsubscribe();

    futures::executor::block_on(store.run(changes));

    let user = published_user(&recorder).unwrap();
    assert_eq!(user.id, "u3");
    assert_eq!(user.role(), Some("child"));
    assert_eq!(recorder.publishes.get(), 5);
    assert_eq!(recorder.settles.get(), 1);
    assert!(!recorder.state.borrow().loading);
}

#[test]
fn settled_state_matches_latest_notification_for_any_sequence() {
    let sequences: Vec<Vec<AuthChange>> = vec![
        vec![AuthChange::signed_out()],
        vec![AuthChange::signed_in(make_session("a", serde_json::json!({ "role": "parent" })))],
        vec![
            AuthChange::signed_in(make_session("a", serde_json::json!({ "role": "parent" }))),
            AuthChange::signed_out(),
        ],
        vec![
            AuthChange::signed_out(),
            AuthChange::signed_in(make_session("b", serde_json::json!({}))),
            AuthChange::token_refreshed(make_session("b", serde_json::json!({}))),
        ],
    ];

    for sequence in sequences {
        let profiles = FakeProfiles::default().with_role("b", Ok(Some("student".to_owned())));
        let (store, auth, _profiles, recorder) = make_store(InitialSession::Ready(Ok(None)), profiles);
        let (subscription, changes) = auth.subscribe();
        for change in &sequence {
            auth.changes.emit(change);
        }
        subscription.unsubscribe();

        futures::executor::block_on(store.run(changes));

        let expected = sequence.last().and_then(|c| c.session.as_ref()).map(|s| {
            let user = AppUser::from(&s.user);
            if user.role().is_some() { user } else { user.with_role("student") }
        });
        assert_eq!(published_user(&recorder), expected);
    }
}

#[test]
fn stale_initial_fetch_does_not_overwrite_newer_notification() {
    let (gate_tx, gate_rx) = oneshot::channel();
    let (store, auth, _profiles, recorder) =
        make_store(InitialSession::Gated(RefCell::new(Some(gate_rx))), FakeProfiles::default());
    let (subscription, changes) = auth.subscribe();

    let driver = async {
        auth.changes.emit(&AuthChange::signed_in(make_session("fresh", serde_json::json!({ "role": "parent" }))));
        YieldNow(false).await;
        gate_tx
            .send(Some(make_session("stale", serde_json::json!({ "role": "parent" }))))
            .unwrap();
        drop(subscription);
    };

    futures::executor::block_on(async { futures::join!(store.run(changes), driver) });

    assert_eq!(published_user(&recorder).unwrap().id, "fresh");
    assert_eq!(recorder.publishes.get(), 1);
    assert_eq!(recorder.settles.get(), 1);
}

#[test]
fn notification_settles_loading_when_initial_fetch_hangs() {
    let (store, auth, _profiles, recorder) = make_store(InitialSession::Never, FakeProfiles::default());
    let (subscription, changes) = auth.subscribe();
    auth.changes.emit(&AuthChange::signed_in(make_session("u1", serde_json::json!({ "role": "parent" }))));
    subscription.unsubscribe();

    futures::executor::block_on(store.listen(changes));

    assert!(!recorder.state.borrow().loading);
    assert_eq!(published_user(&recorder).unwrap().id, "u1");
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn unsubscribe_ends_listen() {
    let (store, auth, _profiles, recorder) = make_store(InitialSession::Ready(Ok(None)), FakeProfiles::default());
    let (subscription, changes) = auth.subscribe();
    assert_eq!(auth.changes.subscriber_count(), 1);

    subscription.unsubscribe();
    assert_eq!(auth.changes.subscriber_count(), 0);

    futures::executor::block_on(store.listen(changes));
    assert_eq!(recorder.publishes.get(), 0);
}

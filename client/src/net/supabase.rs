//! Supabase client: GoTrue auth + PostgREST `profiles` table.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted
//! in `localStorage`. Server-side (SSR): every network call returns
//! `AuthError::Unavailable`; the session store only runs in the browser.
//!
//! ARCHITECTURE
//! ============
//! The client keeps one in-memory copy of the session, mirrored to
//! `localStorage` under `sb-{project_ref}-auth-token`. Every mutation of that
//! copy (sign-in, sign-up with immediate session, refresh, sign-out) is
//! followed by one broadcast on `ChangeBroadcaster`, which is how the session
//! store learns about it.
//!
//! TRADE-OFFS
//! ==========
//! Refresh is driven by a coarse 30 s tick with a 90 s expiry margin instead
//! of a timer per token, so a sleeping tab refreshes on its first tick after
//! waking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::sync::{Arc, Mutex, PoisonError};

use super::auth_events::{AuthChanges, AuthSubscription, ChangeBroadcaster};
use super::error::AuthError;
use super::provider::{AuthProvider, ProfileStore};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::{Credentials, Session, SignUpData, SignUpResponse};
#[cfg(feature = "hydrate")]
use super::types::{AuthChange, ProfileRole};

/// Seconds before `expires_at` at which a session counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 90;

/// Interval of the background refresh check.
pub const AUTO_REFRESH_TICK_SECS: u64 = 30;

/// Project URL and public anon key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into().trim().trim_end_matches('/').to_owned();
        Self { url, anon_key: anon_key.into().trim().to_owned() }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// First host label of the project URL (`abcd` in `https://abcd.supabase.co`).
    #[must_use]
    pub fn project_ref(&self) -> Option<&str> {
        let rest = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = rest.split(['/', ':']).next()?;
        host.split('.').next().filter(|label| !label.is_empty())
    }

    /// `localStorage` key holding the persisted session.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref().unwrap_or("local"))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str, grant_type: &str) -> String {
    format!("{base}/auth/v1/token?grant_type={grant_type}")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/rest/v1/profiles?id=eq.{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_role_endpoint(base: &str, user_id: &str) -> String {
    format!("{}&select=role", profile_endpoint(base, user_id))
}

/// Build an `AuthError::Api` from a non-2xx status and its raw body.
#[cfg(any(test, feature = "hydrate"))]
fn api_error(status: u16, body: &str) -> AuthError {
    let parsed = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.into_message(),
        Err(_) => None,
    };
    let message = parsed.unwrap_or_else(|| format!("request failed with status {status}"));
    AuthError::Api { status, message }
}

/// Whether a failed refresh means the persisted session is dead. Only a
/// client error from the auth server counts; network failures and server
/// errors keep the session for the next attempt.
#[cfg(any(test, feature = "hydrate"))]
fn refresh_rejected(err: &AuthError) -> bool {
    matches!(err, AuthError::Api { status, .. } if (400..500).contains(status))
}

/// Whether `session` is expired or within the expiry margin at `now_secs`.
/// Sessions without a known expiry are never refreshed proactively.
#[must_use]
pub fn needs_refresh(session: &Session, now_secs: i64) -> bool {
    session
        .expires_at
        .is_some_and(|expires_at| expires_at - EXPIRY_MARGIN_SECS <= now_secs)
}

/// Browser client for one Supabase project.
#[derive(Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    session: Arc<Mutex<Option<Session>>>,
    changes: ChangeBroadcaster,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config, session: Arc::new(Mutex::new(None)), changes: ChangeBroadcaster::new() }
    }

    /// Session held in memory, without consulting storage.
    #[must_use]
    pub fn cached_session(&self) -> Option<Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.config.is_configured() { Ok(()) } else { Err(AuthError::NotConfigured) }
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseClient {
    /// Replace the in-memory session and mirror it to storage.
    fn store_session(&self, session: Option<Session>) {
        browser::persist(&self.config.storage_key(), session.as_ref());
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// In-memory session, falling back to the persisted copy on first use.
    fn current_session(&self) -> Option<Session> {
        if let Some(session) = self.cached_session() {
            return Some(session);
        }
        let persisted = browser::load(&self.config.storage_key())?;
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(persisted.clone());
        Some(persisted)
    }

    fn bearer(&self) -> String {
        self.current_session()
            .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token)
    }

    async fn post_json<B, T>(&self, url: &str, body: &B, bearer: Option<&str>) -> Result<T, AuthError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let mut req = gloo_net::http::Request::post(url).header("apikey", &self.config.anon_key);
        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        read_json(resp).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let url = token_endpoint(&self.config.url, "refresh_token");
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let session: Session = self.post_json(&url, &body, None).await?;
        Ok(session.with_expiry_from(browser::now_secs()))
    }

    /// Refresh the current session if it is close to expiry, broadcasting the
    /// outcome. A rejected refresh token signs the user out locally.
    async fn refresh_if_due(&self) {
        let Some(session) = self.current_session() else {
            return;
        };
        if !needs_refresh(&session, browser::now_secs()) {
            return;
        }
        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                self.store_session(Some(fresh.clone()));
                self.changes.emit(&AuthChange::token_refreshed(fresh));
            }
            Err(e) if refresh_rejected(&e) => {
                leptos::logging::warn!("token refresh rejected: {e}");
                self.store_session(None);
                self.changes.emit(&AuthChange::signed_out());
            }
            Err(e) => leptos::logging::warn!("token refresh failed: {e}"),
        }
    }

    /// Start the background refresh tick. It stops when the returned handle
    /// is dropped.
    #[must_use]
    pub fn start_auto_refresh(&self) -> AutoRefresh {
        use std::sync::atomic::{AtomicBool, Ordering};

        let stopped = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stopped);
        let client = self.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_REFRESH_TICK_SECS)).await;
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                client.refresh_if_due().await;
            }
        });
        AutoRefresh { stopped }
    }
}

/// Stops the background refresh tick when dropped.
#[cfg(feature = "hydrate")]
pub struct AutoRefresh {
    stopped: Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(feature = "hydrate")]
impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.stopped.store(true, std::sync::atomic::Ordering::Relaxed);
    }
}

#[cfg(feature = "hydrate")]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    let status = resp.status();
    if !is_success(status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<(), AuthError> {
    let status = resp.status();
    if is_success(status) {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

impl AuthProvider for SupabaseClient {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = self.current_session() else {
                return Ok(None);
            };
            if !needs_refresh(&session, browser::now_secs()) {
                return Ok(Some(session));
            }
            self.ensure_configured()?;
            match self.refresh(&session.refresh_token).await {
                Ok(fresh) => {
                    self.store_session(Some(fresh.clone()));
                    self.changes.emit(&AuthChange::token_refreshed(fresh.clone()));
                    Ok(Some(fresh))
                }
                Err(e) => {
                    if refresh_rejected(&e) {
                        self.store_session(None);
                    }
                    Err(e)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    fn subscribe(&self) -> (AuthSubscription, AuthChanges) {
        self.changes.subscribe()
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = token_endpoint(&self.config.url, "password");
            let session: Session = self.post_json(&url, credentials, None).await?;
            let session = session.with_expiry_from(browser::now_secs());
            self.store_session(Some(session.clone()));
            self.changes.emit(&AuthChange::signed_in(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn sign_up(&self, credentials: &Credentials, data: &SignUpData) -> Result<SignUpResponse, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = signup_endpoint(&self.config.url);
            let body = serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
                "data": data,
            });
            let resp: SignUpResponse = self.post_json(&url, &body, None).await?;
            let resp = match resp {
                SignUpResponse::Session(session) => {
                    let session = session.with_expiry_from(browser::now_secs());
                    self.store_session(Some(session.clone()));
                    self.changes.emit(&AuthChange::signed_in(session.clone()));
                    SignUpResponse::Session(session)
                }
                user @ SignUpResponse::User(_) => user,
            };
            Ok(resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let remote = match self.current_session() {
                Some(session) if self.config.is_configured() => {
                    match gloo_net::http::Request::post(&logout_endpoint(&self.config.url))
                        .header("apikey", &self.config.anon_key)
                        .header("Authorization", &format!("Bearer {}", session.access_token))
                        .send()
                        .await
                    {
                        Ok(resp) => check_status(resp).await,
                        Err(e) => Err(AuthError::Network(e.to_string())),
                    }
                }
                _ => Ok(()),
            };
            // The local session goes away even when the server call fails.
            self.store_session(None);
            self.changes.emit(&AuthChange::signed_out());
            remote
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}

impl ProfileStore for SupabaseClient {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn fetch_role(&self, user_id: &str) -> Result<Option<String>, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&profile_role_endpoint(&self.config.url, user_id))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", self.bearer()))
                .header("Accept", "application/vnd.pgrst.object+json")
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let row: ProfileRole = read_json(resp).await?;
            Ok(row.role)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn update_role(&self, user_id: &str, role: &str) -> Result<(), AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(&profile_endpoint(&self.config.url, user_id))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", self.bearer()))
                .header("Prefer", "return=minimal")
                .json(&serde_json::json!({ "role": role }))
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            check_status(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}

/// `localStorage` and clock access. Requires a browser environment.
#[cfg(feature = "hydrate")]
mod browser {
    use super::Session;

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }

    fn local_storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(_) => None,
        }
    }

    pub(super) fn load(key: &str) -> Option<Session> {
        let raw = match local_storage()?.get_item(key) {
            Ok(raw) => raw?,
            Err(_) => return None,
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable persisted session: {e}");
                None
            }
        }
    }

    pub(super) fn persist(key: &str, session: Option<&Session>) {
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match session.map(serde_json::to_string) {
            Some(Ok(json)) => storage.set_item(key, &json),
            Some(Err(e)) => {
                leptos::logging::warn!("failed to encode session: {e}");
                return;
            }
            None => storage.remove_item(key),
        };
        if result.is_err() {
            leptos::logging::warn!("failed to update persisted session");
        }
    }
}

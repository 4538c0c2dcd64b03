use super::*;
use crate::net::types::AuthUser;

fn make_session(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: Some(3600),
        expires_at,
        user: AuthUser { id: "u1".to_owned(), email: None, user_metadata: serde_json::Map::new() },
    }
}

// =============================================================
// SupabaseConfig
// =============================================================

#[test]
fn config_trims_trailing_slash_and_whitespace() {
    let cfg = SupabaseConfig::new(" https://abcd.supabase.co/ ", " anon ");
    assert_eq!(cfg.url, "https://abcd.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
    assert!(cfg.is_configured());
}

#[test]
fn config_default_is_unconfigured() {
    assert!(!SupabaseConfig::default().is_configured());
    assert!(!SupabaseConfig::new("https://abcd.supabase.co", "").is_configured());
}

#[test]
fn project_ref_is_first_host_label() {
    let cfg = SupabaseConfig::new("https://abcd.supabase.co", "k");
    assert_eq!(cfg.project_ref(), Some("abcd"));
    assert_eq!(cfg.storage_key(), "sb-abcd-auth-token");
}

#[test]
fn project_ref_handles_local_port() {
    let cfg = SupabaseConfig::new("http://localhost:54321", "k");
    assert_eq!(cfg.project_ref(), Some("localhost"));
}

#[test]
fn storage_key_falls_back_when_url_missing() {
    assert_eq!(SupabaseConfig::default().storage_key(), "sb-local-auth-token");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn token_endpoint_formats_grant_type() {
    assert_eq!(
        token_endpoint("https://abcd.supabase.co", "password"),
        "https://abcd.supabase.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(signup_endpoint("https://x.co"), "https://x.co/auth/v1/signup");
    assert_eq!(logout_endpoint("https://x.co"), "https://x.co/auth/v1/logout");
}

#[test]
fn profile_endpoints_filter_by_id() {
    assert_eq!(profile_endpoint("https://x.co", "u1"), "https://x.co/rest/v1/profiles?id=eq.u1");
    assert_eq!(
        profile_role_endpoint("https://x.co", "u1"),
        "https://x.co/rest/v1/profiles?id=eq.u1&select=role"
    );
}

// =============================================================
// Errors
// =============================================================

#[test]
fn api_error_uses_body_message() {
    let err = api_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#);
    assert_eq!(err, AuthError::Api { status: 400, message: "Invalid login credentials".to_owned() });
}

#[test]
fn api_error_falls_back_to_status_for_unreadable_body() {
    let err = api_error(502, "<html>bad gateway</html>");
    assert_eq!(err, AuthError::Api { status: 502, message: "request failed with status 502".to_owned() });
}

// =============================================================
// Refresh window
// =============================================================

#[test]
fn needs_refresh_inside_margin() {
    let session = make_session(Some(1_000));
    assert!(needs_refresh(&session, 1_000 - EXPIRY_MARGIN_SECS));
    assert!(needs_refresh(&session, 2_000));
}

#[test]
fn needs_refresh_false_when_fresh() {
    let session = make_session(Some(1_000));
    assert!(!needs_refresh(&session, 1_000 - EXPIRY_MARGIN_SECS - 1));
}

#[test]
fn needs_refresh_false_without_expiry() {
    assert!(!needs_refresh(&make_session(None), i64::MAX));
}

#[test]
fn refresh_rejected_by_auth_server_discards_session() {
    let err = AuthError::Api { status: 400, message: "Invalid Refresh Token".to_owned() };
    assert!(refresh_rejected(&err));
    assert!(refresh_rejected(&AuthError::Api { status: 401, message: String::new() }));
}

#[test]
fn offline_refresh_keeps_session() {
    assert!(!refresh_rejected(&AuthError::Network("Failed to fetch".to_owned())));
    assert!(!refresh_rejected(&AuthError::Decode("eof".to_owned())));
}

#[test]
fn server_error_during_refresh_keeps_session() {
    assert!(!refresh_rejected(&AuthError::Api { status: 503, message: "unavailable".to_owned() }));
}

// =============================================================
// Server-side stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn unconfigured_client_rejects_sign_in() {
    let client = SupabaseClient::new(SupabaseConfig::default());
    let creds = Credentials { email: "a@b.co".to_owned(), password: "pw".to_owned() };
    let result = futures::executor::block_on(client.sign_in_with_password(&creds));
    assert_eq!(result, Err(AuthError::NotConfigured));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn get_session_unavailable_off_browser() {
    let client = SupabaseClient::new(SupabaseConfig::new("https://abcd.supabase.co", "k"));
    let result = futures::executor::block_on(client.get_session());
    assert_eq!(result, Err(AuthError::Unavailable));
    assert!(client.cached_session().is_none());
}

#[test]
fn subscribe_registers_with_client_broadcaster() {
    let client = SupabaseClient::new(SupabaseConfig::default());
    let (sub, _rx) = client.subscribe();
    assert_eq!(client.changes.subscriber_count(), 1);
    sub.unsubscribe();
    assert_eq!(client.changes.subscriber_count(), 0);
}

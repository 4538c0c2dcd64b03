use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abcd.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.supabase.url, "https://abcd.supabase.co");
    assert_eq!(cfg.supabase.anon_key, "anon");
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abcd.supabase.co/"),
        ("SUPABASE_ANON_KEY", " anon "),
    ]))
    .unwrap();
    assert_eq!(cfg.supabase.url, "https://abcd.supabase.co");
    assert_eq!(cfg.supabase.anon_key, "anon");
}

#[test]
fn from_lookup_parses_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("SUPABASE_URL", "https://abcd.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "eighty"),
        ("SUPABASE_URL", "https://abcd.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn from_lookup_requires_url() {
    let err = ServerConfig::from_lookup(lookup_from(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "SUPABASE_URL" });
    assert_eq!(err.to_string(), "SUPABASE_URL required");
}

#[test]
fn from_lookup_treats_blank_key_as_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abcd.supabase.co"),
        ("SUPABASE_ANON_KEY", "   "),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "SUPABASE_ANON_KEY" });
}

/// # Safety
/// Only this test mutates the process environment.
#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::set_var("SUPABASE_URL", "https://envtest.supabase.co");
        std::env::set_var("SUPABASE_ANON_KEY", "env-anon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.supabase.project_ref(), Some("envtest"));

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
    }
}

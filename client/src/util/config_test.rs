use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn config_from_meta_reads_both_tags() {
    let config = config_from_meta(lookup_from(&[
        (URL_META, "https://abcd.supabase.co/"),
        (ANON_KEY_META, "anon-key"),
    ]))
    .unwrap();
    assert_eq!(config, SupabaseConfig::new("https://abcd.supabase.co", "anon-key"));
}

#[test]
fn config_from_meta_requires_url() {
    let err = config_from_meta(lookup_from(&[(ANON_KEY_META, "anon-key")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingMeta(URL_META));
}

#[test]
fn config_from_meta_treats_blank_key_as_missing() {
    let err = config_from_meta(lookup_from(&[(URL_META, "https://x.co"), (ANON_KEY_META, "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingMeta(ANON_KEY_META));
}

#[test]
fn config_error_names_the_tag() {
    assert_eq!(
        ConfigError::MissingMeta(URL_META).to_string(),
        "missing <meta name=\"supabase-url\"> tag"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_config_unavailable_off_browser() {
    assert_eq!(read_document_config(), Err(ConfigError::NoDocument));
}

use super::*;
use std::path::PathBuf;

fn fake_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn write_settings_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("catalog-settings-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write settings file");
    path
}

#[test]
fn defaults_match_public_endpoints() {
    let settings = ClientSettings::default();
    assert_eq!(settings.base_url, "https://api-v2-b2sit6oh3a-uc.a.run.app/");
    assert_eq!(
        settings.search_url,
        "https://mock.apidog.com/m1/735111-711675-default/search"
    );
    assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    assert_eq!(settings.debounce_window(), Duration::from_millis(200));
    assert_eq!(settings.search_limit, None);
}

#[test]
fn file_values_override_defaults() {
    let path = write_settings_file(
        "override.toml",
        r#"
base_url = "http://localhost:8080"
debounce_ms = 350
search_limit = 25
unrelated = "ignored"
"#,
    );
    let mut settings = ClientSettings::default();
    let raw = fs::read_to_string(&path).expect("read back");
    let file_cfg: HashMap<String, toml::Value> = toml::from_str(&raw).expect("toml");
    apply_file_overrides(&mut settings, &file_cfg);

    assert_eq!(settings.base_url, "http://localhost:8080");
    assert_eq!(settings.debounce_ms, 350);
    assert_eq!(settings.search_limit, Some(25));
    assert_eq!(settings.request_timeout_secs, 30);
    assert_eq!(settings.search_url, ClientSettings::default().search_url);
}

#[test]
fn out_of_range_file_values_are_ignored() {
    let file_cfg: HashMap<String, toml::Value> =
        toml::from_str("request_timeout_secs = -5\nsearch_limit = \"ten\"").expect("toml");
    let mut settings = ClientSettings::default();
    apply_file_overrides(&mut settings, &file_cfg);
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn unreadable_or_missing_files_fall_back_to_defaults() {
    let missing = std::env::temp_dir().join("catalog-settings-does-not-exist.toml");
    let broken = write_settings_file("broken.toml", "base_url = [unterminated");

    // Only fields without a process-wide env override are compared.
    for path in [missing, broken] {
        let settings = load_settings_from(&path);
        if std::env::var("APP__DEBOUNCE_MS").is_err() {
            assert_eq!(settings.debounce_ms, 200);
        }
    }
}

#[test]
fn env_overrides_prefer_app_prefixed_names() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(
        &mut settings,
        fake_env(&[
            ("CATALOG_BASE_URL", "http://catalog.local/"),
            ("APP__BASE_URL", "http://app.local/"),
            ("CATALOG_SEARCH_URL", "http://catalog.local/search"),
            ("APP__REQUEST_TIMEOUT_SECS", "5"),
            ("APP__SEARCH_LIMIT", "10"),
        ]),
    );

    assert_eq!(settings.base_url, "http://app.local/");
    assert_eq!(settings.search_url, "http://catalog.local/search");
    assert_eq!(settings.request_timeout_secs, 5);
    assert_eq!(settings.search_limit, Some(10));
    assert_eq!(settings.debounce_ms, 200);
}

#[test]
fn unparsable_env_numbers_keep_previous_values() {
    let mut settings = ClientSettings {
        debounce_ms: 500,
        ..ClientSettings::default()
    };
    apply_env_overrides(
        &mut settings,
        fake_env(&[
            ("APP__DEBOUNCE_MS", "soon"),
            ("APP__REQUEST_TIMEOUT_SECS", "-1"),
            ("APP__SEARCH_LIMIT", ""),
        ]),
    );
    assert_eq!(settings.debounce_ms, 500);
    assert_eq!(settings.request_timeout_secs, 30);
    assert_eq!(settings.search_limit, None);
}

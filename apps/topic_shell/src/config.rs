use std::{fs, path::Path};

use anyhow::Context;
use client_core::Welcome;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "topic_shell.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedTopic {
    pub title: String,
    pub body: String,
}

impl SeedTopic {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub welcome_title: String,
    pub welcome_body: String,
    pub seed: Vec<SeedTopic>,
}

impl Default for Settings {
    fn default() -> Self {
        let welcome = Welcome::default();
        Self {
            title: "React".into(),
            welcome_title: welcome.title,
            welcome_body: welcome.body,
            seed: vec![
                SeedTopic::new("html", "html is ..."),
                SeedTopic::new("css", "css is ..."),
                SeedTopic::new("js", "js is ..."),
            ],
        }
    }
}

impl Settings {
    pub fn welcome(&self) -> Welcome {
        Welcome {
            title: self.welcome_title.clone(),
            body: self.welcome_body.clone(),
        }
    }
}

/// Loads settings from `explicit` (which must exist) or from
/// `topic_shell.toml` in the working directory when present, then applies
/// `APP__TITLE` from the environment.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_in(
        Path::new("."),
        explicit,
        std::env::var("APP__TITLE").ok(),
    )
}

fn load_settings_in(
    dir: &Path,
    explicit: Option<&Path>,
    env_title: Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match explicit {
        Some(path) => read_settings(path)?,
        None => {
            let path = dir.join(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_settings(&path)?
            } else {
                Settings::default()
            }
        }
    };

    if let Some(v) = env_title {
        settings.title = v;
    }

    Ok(settings)
}

/// Topics to create at startup; empty when seeding is disabled.
pub fn seed_topics(settings: &Settings, no_seed: bool) -> Vec<(String, String)> {
    if no_seed {
        return Vec::new();
    }
    settings
        .seed
        .iter()
        .map(|topic| (topic.title.clone(), topic.body.clone()))
        .collect()
}

/// Uses the `RUST_LOG` value when it parses, otherwise `fallback`.
pub fn log_filter(env_filter: Option<&str>, fallback: &str) -> anyhow::Result<EnvFilter> {
    if let Some(filter) = env_filter.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).with_context(|| format!("invalid log filter '{fallback}'"))
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_original_page() {
        let settings = Settings::default();
        assert_eq!(settings.title, "React");
        assert_eq!(settings.welcome(), Welcome::default());
        let titles: Vec<_> = settings.seed.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["html", "css", "js"]);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"
welcome_body = "Pick a topic"

[[seed]]
title = "rust"
body = "rust is ..."
"#
        )
        .expect("write");

        let settings = read_settings(file.path()).expect("settings");
        assert_eq!(settings.welcome_title, "Welcome");
        assert_eq!(settings.welcome_body, "Pick a topic");
        assert_eq!(settings.seed, vec![SeedTopic::new("rust", "rust is ...")]);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_settings(Some(Path::new("/definitely/not/here.toml")))
            .expect_err("missing file");
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = load_settings_in(dir.path(), None, None).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn default_file_in_working_dir_is_read() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "title = \"Topics\"\n").expect("write");

        let settings = load_settings_in(dir.path(), None, None).expect("settings");
        assert_eq!(settings.title, "Topics");
        assert_eq!(settings.seed, Settings::default().seed);
    }

    #[test]
    fn env_title_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings =
            load_settings_in(dir.path(), None, Some("From Env".into())).expect("settings");
        assert_eq!(settings.title, "From Env");

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "title = \"Topics\"\n").expect("write");
        let settings =
            load_settings_in(dir.path(), None, Some("From Env".into())).expect("settings");
        assert_eq!(settings.title, "From Env");
    }

    #[test]
    fn no_seed_yields_empty_topic_list() {
        let settings = Settings::default();
        assert!(seed_topics(&settings, true).is_empty());

        let seed = seed_topics(&settings, false);
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0], ("html".to_string(), "html is ...".to_string()));
    }

    #[test]
    fn log_filter_prefers_env_then_fallback() {
        let filter = log_filter(Some("info"), "warn").expect("filter");
        assert_eq!(filter.to_string(), "info");

        let filter = log_filter(None, "debug").expect("filter");
        assert_eq!(filter.to_string(), "debug");

        let filter = log_filter(Some("topic_shell=loudest"), "warn").expect("filter");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_fallback_log_filter_is_an_error() {
        let err = log_filter(None, "topic_shell=loudest").expect_err("invalid");
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn malformed_file_reports_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "seed = 3").expect("write");
        let err = read_settings(file.path()).expect_err("malformed");
        assert!(err.to_string().contains("failed to parse config file"));
    }
}

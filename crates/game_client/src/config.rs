use std::{collections::HashMap, fs, path::Path, time::Duration};

use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "chess_client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_host: String,
    pub server_port: u16,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_host: "localhost".into(),
            server_port: 5000,
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    /// `http://<host>:<port>/`. A host that already carries a scheme is kept
    /// as is, gaining the configured port only when it names none.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let host = self.server_host.trim().trim_end_matches('/');
        let mut url = if host.contains("://") {
            let mut url = Url::parse(host)?;
            if url.port().is_none() && url.set_port(Some(self.server_port)).is_err() {
                return Err(url::ParseError::InvalidPort);
            }
            url
        } else {
            Url::parse(&format!("http://{host}:{}", self.server_port))?
        };
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Defaults, then the settings file (`chess_client.toml` unless `path` is
/// given), then environment variables.
pub fn load_settings(path: Option<&Path>) -> ClientSettings {
    let mut settings = ClientSettings::default();
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut ClientSettings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.get("server_host").and_then(toml::Value::as_str) {
        settings.server_host = v.to_string();
    }
    if let Some(port) = file_cfg.get("server_port").and_then(integer_setting::<u16>) {
        settings.server_port = port;
    }
    if let Some(secs) = file_cfg.get("request_timeout_secs").and_then(integer_setting::<u64>) {
        settings.request_timeout_secs = Some(secs);
    }
}

fn integer_setting<T: TryFrom<i64> + std::str::FromStr>(value: &toml::Value) -> Option<T> {
    match value {
        toml::Value::Integer(v) => T::try_from(*v).ok(),
        toml::Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn apply_env(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CHESS_SERVER_HOST") {
        settings.server_host = v;
    }
    if let Some(v) = lookup("APP__SERVER_HOST") {
        settings.server_host = v;
    }

    if let Some(port) = lookup("CHESS_SERVER_PORT").and_then(|v| v.parse().ok()) {
        settings.server_port = port;
    }
    if let Some(port) = lookup("APP__SERVER_PORT").and_then(|v| v.parse().ok()) {
        settings.server_port = port;
    }

    if let Some(secs) = lookup("APP__REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        settings.request_timeout_secs = Some(secs);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

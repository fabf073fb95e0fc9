use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "rustyremote.settings";

/// Duration assumed for a track the server reports no length for.
pub const DEFAULT_DURATION_SECS: f64 = 10.0;
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 5_000;

/// How often the progress indicator advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TickResolution {
    /// 100 ms ticks, 0.1 s per tick
    Fine,
    /// 1000 ms ticks, 1 s per tick
    #[default]
    Coarse,
}

impl TickResolution {
    pub fn period(self) -> Duration {
        match self {
            Self::Fine => Duration::from_millis(100),
            Self::Coarse => Duration::from_millis(1000),
        }
    }

    pub fn quantum(self) -> f64 {
        match self {
            Self::Fine => 0.1,
            Self::Coarse => 1.0,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fine" | "100" | "100ms" => Some(Self::Fine),
            "coarse" | "1000" | "1000ms" | "1s" => Some(Self::Coarse),
            _ => None,
        }
    }
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Playlist server base URL. `None` runs against the in-memory playlist.
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub tick_resolution: TickResolution,
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: f64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u32,
}

fn default_duration_secs() -> f64 {
    DEFAULT_DURATION_SECS
}

fn default_request_timeout_ms() -> u32 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            server_url: None,
            tick_resolution: TickResolution::default(),
            default_duration_secs: DEFAULT_DURATION_SECS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Timing parameters of the synchronization loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncConfig {
    pub period: Duration,
    pub quantum: f64,
    pub default_duration: f64,
    pub request_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        (&PlayerSettings::default()).into()
    }
}

impl From<&PlayerSettings> for SyncConfig {
    fn from(settings: &PlayerSettings) -> Self {
        let default_duration =
            if settings.default_duration_secs.is_finite() && settings.default_duration_secs > 0.0 {
                settings.default_duration_secs
            } else {
                DEFAULT_DURATION_SECS
            };
        Self {
            period: settings.tick_resolution.period(),
            quantum: settings.tick_resolution.quantum(),
            default_duration,
            request_timeout: Duration::from_millis(settings.request_timeout_ms.max(1) as u64),
        }
    }
}

impl PlayerSettings {
    /// Load settings for the current platform
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings: Self = LocalStorage::get(SETTINGS_KEY).unwrap_or_default();
        if settings.server_url.is_none() {
            settings.server_url = web_sys::window().and_then(|w| w.location().origin().ok());
        }
        info!("Settings: server {:?}", settings.server_url);
        settings
    }

    /// Load settings for the current platform
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Settings: loaded .env file");
            }
        }
        let settings = Self::from_lookup(|key| std::env::var(key).ok());
        match &settings.server_url {
            Some(url) => info!("Settings: using playlist server at {}", url),
            None => info!("Settings: no server configured, using in-memory playlist"),
        }
        settings
    }

    /// Build settings from `RUSTYREMOTE_*` variables, keeping defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        settings.server_url = lookup("RUSTYREMOTE_SERVER_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(raw) = lookup("RUSTYREMOTE_TICK_RESOLUTION") {
            match TickResolution::parse(&raw) {
                Some(resolution) => settings.tick_resolution = resolution,
                None => warn!("Settings: ignoring tick resolution {:?}", raw),
            }
        }

        if let Some(raw) = lookup("RUSTYREMOTE_DEFAULT_DURATION") {
            match raw.trim().parse::<f64>() {
                Ok(d) if d.is_finite() && d > 0.0 => settings.default_duration_secs = d,
                _ => warn!("Settings: ignoring default duration {:?}", raw),
            }
        }

        if let Some(raw) = lookup("RUSTYREMOTE_REQUEST_TIMEOUT_MS") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => settings.request_timeout_ms = ms,
                _ => warn!("Settings: ignoring request timeout {:?}", raw),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = PlayerSettings::from_lookup(|_| None);
        assert_eq!(settings, PlayerSettings::default());

        let sync = SyncConfig::from(&settings);
        assert_eq!(sync.period, Duration::from_millis(1000));
        assert_eq!(sync.quantum, 1.0);
        assert_eq!(sync.default_duration, 10.0);
        assert_eq!(sync.request_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn reads_overrides() {
        let settings = PlayerSettings::from_lookup(lookup_from(&[
            ("RUSTYREMOTE_SERVER_URL", " http://127.0.0.1:5000 "),
            ("RUSTYREMOTE_TICK_RESOLUTION", "Fine"),
            ("RUSTYREMOTE_DEFAULT_DURATION", "30"),
            ("RUSTYREMOTE_REQUEST_TIMEOUT_MS", "750"),
        ]));
        assert_eq!(settings.server_url.as_deref(), Some("http://127.0.0.1:5000"));
        assert_eq!(settings.tick_resolution, TickResolution::Fine);

        let sync = SyncConfig::from(&settings);
        assert_eq!(sync.period, Duration::from_millis(100));
        assert_eq!(sync.quantum, 0.1);
        assert_eq!(sync.default_duration, 30.0);
        assert_eq!(sync.request_timeout, Duration::from_millis(750));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let settings = PlayerSettings::from_lookup(lookup_from(&[
            ("RUSTYREMOTE_SERVER_URL", "   "),
            ("RUSTYREMOTE_TICK_RESOLUTION", "sometimes"),
            ("RUSTYREMOTE_DEFAULT_DURATION", "-4"),
            ("RUSTYREMOTE_REQUEST_TIMEOUT_MS", "0"),
        ]));
        assert_eq!(settings, PlayerSettings::default());
    }

    #[test]
    fn stored_settings_fill_missing_fields() {
        let settings: PlayerSettings =
            serde_json::from_str(r#"{"tick_resolution": "Fine"}"#).unwrap();
        assert_eq!(settings.tick_resolution, TickResolution::Fine);
        assert_eq!(settings.default_duration_secs, DEFAULT_DURATION_SECS);
        assert!(settings.server_url.is_none());
    }
}

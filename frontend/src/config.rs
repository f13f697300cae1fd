//! Build-time configuration.
//!
//! Values are baked in when the bundle is compiled; unset variables fall back
//! to the defaults below.

const DEFAULT_API_URL: &str = "https://api.headhunter.uz";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;
pub const DEVICE_ID_PREFIX: &str = "web-";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl AppConfig {
    /// Reads `HEADHUNT_API_URL` and `HEADHUNT_LOG_LEVEL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("HEADHUNT_API_URL"),
            option_env!("HEADHUNT_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "https://api.headhunter.uz");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn overrides_are_normalised() {
        let config = AppConfig::from_values(Some(" http://localhost:8080/ "), Some("debug"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn blank_or_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}

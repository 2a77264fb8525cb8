use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:2005";
const DEFAULT_CACHE_KEY: &str = "bp_expenses";

/// Settings baked in at build time, e.g.
/// `FINANCE_API_URL=https://api.example.com trunk build`
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST API, without a trailing slash
    pub api_url: String,
    /// Storage key of the cached expense snapshot
    pub cache_key: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FINANCE_API_URL"),
            option_env!("FINANCE_CACHE_KEY"),
            option_env!("FINANCE_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, cache_key: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let cache_key = cache_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_CACHE_KEY)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_url,
            cache_key,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:2005");
        assert_eq!(config.cache_key, "bp_expenses");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), Some("expenses_v2"), Some("debug"));
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.cache_key, "expenses_v2");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = AppConfig::from_values(None, Some(""), Some("loud"));
        assert_eq!(config.cache_key, "bp_expenses");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}

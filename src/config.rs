use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Build-time settings. The browser has no process environment, so overrides
/// are baked in with `option_env!` when the bundle is compiled.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub currency_symbol: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FINANCE_API_URL"),
            option_env!("FINANCE_CURRENCY_SYMBOL"),
            option_env!("FINANCE_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, currency: Option<&str>, level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            currency_symbol: currency
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.currency_symbol),
            log_level: level
                .and_then(|v| v.trim().parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = Config::from_values(None, None, None);
        assert_eq!(cfg.api_base_url, "http://localhost:5000");
        assert_eq!(cfg.currency_symbol, "₹");
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn overrides_are_trimmed() {
        let cfg = Config::from_values(Some(" https://api.example.com/ "), Some("$"), Some("debug"));
        assert_eq!(cfg.api_base_url, "https://api.example.com");
        assert_eq!(cfg.currency_symbol, "$");
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn blank_or_bad_values_fall_back() {
        let cfg = Config::from_values(Some("  "), Some(""), Some("loud"));
        assert_eq!(cfg, Config::default());
    }
}

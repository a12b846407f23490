use std::env;

/// Environment variable holding the log filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the log output format.
pub const FORMAT_ENV: &str = "WAREHOUSE_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `warehouse_catalog=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            filter: lookup(FILTER_ENV)
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: lookup(FORMAT_ENV)
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.format),
        }
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
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "warehouse_catalog=debug"),
            (FORMAT_ENV, "Pretty"),
        ]));
        assert_eq!(config.filter, "warehouse_catalog=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "  "),
            (FORMAT_ENV, "xml"),
        ]));
        assert_eq!(config, ObservabilityConfig::default());
    }
}

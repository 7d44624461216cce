use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5050;
const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB
const DEFAULT_LAGRANGE_BIN: &str = "lagrange-solver";
const DEFAULT_NATIVE_TIMEOUT_MS: u64 = 5_000;

/// Service settings, read from the environment (and `.env` via dotenv).
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub json_limit: usize,
    /// Native solver executable; a bare name is looked up on `PATH`.
    pub lagrange_bin: PathBuf,
    pub native_timeout: Duration,
    pub native_enabled: bool,
    pub sentry_dsn: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT,
            lagrange_bin: PathBuf::from(DEFAULT_LAGRANGE_BIN),
            native_timeout: Duration::from_millis(DEFAULT_NATIVE_TIMEOUT_MS),
            native_enabled: true,
            sentry_dsn: None,
        }
    }
}

impl Settings {
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),
            json_limit: parse_var("JSON_PAYLOAD_LIMIT").unwrap_or(defaults.json_limit),
            lagrange_bin: env::var("LAGRANGE_BIN")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.lagrange_bin),
            native_timeout: parse_var::<u64>("NATIVE_SOLVER_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.native_timeout),
            native_enabled: parse_var("NATIVE_SOLVER_ENABLED").unwrap_or(defaults.native_enabled),
            sentry_dsn: env::var("SENTRY_DSN").ok().filter(|s| !s.trim().is_empty()),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "PORT",
        "JSON_PAYLOAD_LIMIT",
        "LAGRANGE_BIN",
        "NATIVE_SOLVER_TIMEOUT_MS",
        "NATIVE_SOLVER_ENABLED",
        "SENTRY_DSN",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables_uses_defaults() {
        clear_env();
        let settings = Settings::from_env();
        assert_eq!(settings.port, 5050);
        assert_eq!(settings.json_limit, 2 * 1024 * 1024);
        assert_eq!(settings.lagrange_bin, PathBuf::from("lagrange-solver"));
        assert_eq!(settings.native_timeout, Duration::from_secs(5));
        assert!(settings.native_enabled);
        assert!(settings.sentry_dsn.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        env::set_var("PORT", "9100");
        env::set_var("LAGRANGE_BIN", "/opt/lagrange/solver");
        env::set_var("NATIVE_SOLVER_TIMEOUT_MS", "250");
        env::set_var("NATIVE_SOLVER_ENABLED", "false");
        let settings = Settings::from_env();
        clear_env();

        assert_eq!(settings.port, 9100);
        assert_eq!(settings.lagrange_bin, PathBuf::from("/opt/lagrange/solver"));
        assert_eq!(settings.native_timeout, Duration::from_millis(250));
        assert!(!settings.native_enabled);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparsable_values() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("NATIVE_SOLVER_ENABLED", "maybe");
        env::set_var("SENTRY_DSN", "  ");
        let settings = Settings::from_env();
        clear_env();

        assert_eq!(settings.port, 5050);
        assert!(settings.native_enabled);
        assert!(settings.sentry_dsn.is_none());
    }
}

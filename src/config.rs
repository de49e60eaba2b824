use std::time::Duration;

/// Deployment mode. Only gates how much error detail leaves the process;
/// everything else behaves identically in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub(crate) fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Allowed cross-origin callers: either everyone or an exact-match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub pool_max_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub cors_origins: CorsOrigins,
    pub app_host: String,
    pub app_port: u16,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts());

        Ok(Self {
            database_url,
            pool_max_connections: env_parse("DB_POOL_MAX", 10),
            connect_timeout: Duration::from_secs(env_parse("DB_CONNECT_TIMEOUT_SECS", 10)),
            acquire_timeout: Duration::from_secs(env_parse("DB_ACQUIRE_TIMEOUT_SECS", 10)),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".into()),
            ),
            app_host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            app_port: env_parse("APP_PORT", 8080),
            environment: Environment::from_env_value(
                &std::env::var("APP_ENV").unwrap_or_default(),
            ),
        })
    }

    pub fn expose_error_detail(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn database_url_from_parts() -> String {
    let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
    let port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".into());
    let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
    let password = std::env::var("DB_PASSWORD").unwrap_or_default();
    let name = std::env::var("DB_NAME").unwrap_or_else(|_| "userdir".into());
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

pub(crate) fn parse_origins(raw: &str) -> CorsOrigins {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(
        raw.split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_empty_origins_allow_any() {
        assert_eq!(parse_origins("*"), CorsOrigins::Any);
        assert_eq!(parse_origins("  * "), CorsOrigins::Any);
        assert_eq!(parse_origins(""), CorsOrigins::Any);
    }

    #[test]
    fn origin_list_is_trimmed() {
        let parsed = parse_origins("http://localhost:3000, https://app.example.com ,");
        assert_eq!(
            parsed,
            CorsOrigins::List(vec![
                "http://localhost:3000".to_string(),
                "https://app.example.com".to_string(),
            ])
        );
    }

    #[test]
    fn environment_defaults_to_development() {
        assert_eq!(Environment::from_env_value(""), Environment::Development);
        assert_eq!(Environment::from_env_value("staging"), Environment::Development);
        assert_eq!(Environment::from_env_value("prod"), Environment::Production);
        assert_eq!(Environment::from_env_value("PRODUCTION"), Environment::Production);
    }
}

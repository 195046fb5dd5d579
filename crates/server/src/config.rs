use std::sync::OnceLock;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Deployment environment resolved from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value. Anything other than production means
    /// development.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Default public base URL for this environment.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:8080",
            Environment::Production => "https://www.idmawa.edu.vn",
        }
    }
}

/// Site-wide configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub environment: Environment,
    /// Absolute URL prefix for externally advertised links (no trailing slash).
    pub base_url: String,
}

impl SiteConfig {
    fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let override_url = std::env::var("SITE_BASE_URL").ok();
        let base_url = resolve_base_url(environment, override_url.as_deref());

        tracing::info!(?environment, %base_url, "site config resolved");
        Self {
            environment,
            base_url,
        }
    }
}

/// Pick the advertised base URL: an explicit override wins, otherwise the
/// environment default. Trailing slashes are trimmed so path joins stay exact.
pub fn resolve_base_url(environment: Environment, override_url: Option<&str>) -> String {
    override_url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| environment.default_base_url())
        .trim_end_matches('/')
        .to_string()
}

/// Resolve and cache the site config. Safe to call multiple times — only the
/// first call reads the process environment.
pub fn load_site_config() {
    let _ = site_config();
}

/// The cached site config, resolving from the environment on first use.
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(SiteConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn environment_parse() {
        assert_eq!(
            Environment::from_str_or_default("production"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str_or_default(""), Environment::Development);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn base_url_defaults_per_environment() {
        assert_eq!(
            resolve_base_url(Environment::Development, None),
            "http://localhost:8080"
        );
        assert_eq!(
            resolve_base_url(Environment::Production, None),
            "https://www.idmawa.edu.vn"
        );
    }

    #[test]
    fn base_url_override_wins() {
        assert_eq!(
            resolve_base_url(Environment::Production, Some("https://staging.idmawa.edu.vn")),
            "https://staging.idmawa.edu.vn"
        );
    }

    #[test]
    fn base_url_trailing_slash_trimmed_and_empty_override_ignored() {
        assert_eq!(
            resolve_base_url(Environment::Development, Some("http://localhost:3000/")),
            "http://localhost:3000"
        );
        assert_eq!(
            resolve_base_url(Environment::Production, Some("")),
            "https://www.idmawa.edu.vn"
        );
    }
}

use std::env;
use std::time::Duration;

pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Runtime settings read from the environment (and `.env` via dotenvy).
///
/// The CAPTCHA secret and the webhook url are optional at startup so the
/// server can still serve the site while unconfigured; the register route
/// answers 500 until both are present.
#[derive(Clone, Debug)]
pub struct Settings {
    pub recaptcha_secret: Option<String>,
    pub recaptcha_verify_url: String,
    pub google_script_url: Option<String>,
    pub bind_addr: String,
    pub frontend_dist: Option<String>,
    pub upstream_timeout: Duration,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let upstream_timeout = non_empty_var("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Self {
            recaptcha_secret: non_empty_var("RECAPTCHA_SECRET_KEY"),
            recaptcha_verify_url: non_empty_var("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
            google_script_url: non_empty_var("GOOGLE_SCRIPT_URL"),
            bind_addr: non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            frontend_dist: non_empty_var("FRONTEND_DIST"),
            upstream_timeout: Duration::from_secs(upstream_timeout),
            sentry_dsn: non_empty_var("SENTRY_DSN"),
        }
    }

    /// Both values the register route needs, or `None` if either is missing.
    pub fn registration_credentials(&self) -> Option<(&str, &str)> {
        match (&self.recaptcha_secret, &self.google_script_url) {
            (Some(secret), Some(url)) => Some((secret.as_str(), url.as_str())),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recaptcha_secret: None,
            recaptcha_verify_url: DEFAULT_RECAPTCHA_VERIFY_URL.to_string(),
            google_script_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            frontend_dist: None,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            sentry_dsn: None,
        }
    }
}

/// Logs a warning for every variable the register route depends on.
pub fn validate_env(settings: &Settings) {
    if settings.recaptcha_secret.is_none() {
        tracing::warn!("RECAPTCHA_SECRET_KEY is not set, registrations will be refused");
    }
    if settings.google_script_url.is_none() {
        tracing::warn!("GOOGLE_SCRIPT_URL is not set, registrations will be refused");
    }
    if settings.frontend_dist.is_none() {
        tracing::info!("FRONTEND_DIST is not set, serving the API only");
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_values() {
        let mut settings = Settings::default();
        assert!(settings.registration_credentials().is_none());

        settings.recaptcha_secret = Some("secret".to_string());
        assert!(settings.registration_credentials().is_none());

        settings.google_script_url = Some("https://script.example/exec".to_string());
        assert_eq!(
            settings.registration_credentials(),
            Some(("secret", "https://script.example/exec"))
        );
    }

    #[test]
    fn default_points_at_google_siteverify() {
        let settings = Settings::default();
        assert_eq!(settings.recaptcha_verify_url, DEFAULT_RECAPTCHA_VERIFY_URL);
        assert_eq!(settings.bind_addr, "127.0.0.1:3000");
    }
}


#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: the backend serves the bundle, same origin
}

/// Public reCAPTCHA site key, baked in at build time.
pub fn recaptcha_site_key() -> &'static str {
    option_env!("RECAPTCHA_SITE_KEY").unwrap_or("")
}

use std::env;

pub const RUN_MODE_ENV: &str = "RUN_MODE";
pub const GOOGLE_VERIFICATION_ENV: &str = "GOOGLE_SITE_VERIFICATION";

/// Deployment mode; only `production` switches the generated base URL to https.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

impl RunMode {
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Environment-derived settings shared with every handler.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    pub run_mode: RunMode,
    pub google_verification: String,
}

impl SiteConfig {
    #[must_use]
    pub fn from_values(run_mode: Option<String>, google_verification: Option<String>) -> Self {
        Self {
            run_mode: RunMode::from_flag(run_mode.as_deref()),
            google_verification: google_verification.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(RUN_MODE_ENV).ok(),
            env::var(GOOGLE_VERIFICATION_ENV).ok(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_flag_selects_production_mode() {
        assert_eq!(
            RunMode::from_flag(Some("production")),
            RunMode::Production
        );
        assert_eq!(RunMode::from_flag(Some("staging")), RunMode::Development);
        assert_eq!(RunMode::from_flag(None), RunMode::Development);
    }

    #[test]
    fn verification_token_defaults_to_empty() {
        let cfg = SiteConfig::from_values(None, None);
        assert_eq!(cfg.google_verification, "");

        let cfg = SiteConfig::from_values(None, Some("tok-123".to_string()));
        assert_eq!(cfg.google_verification, "tok-123");
    }
}

//! Configuration for field-length limits.
//!
//! Load order: `.masthead/config.toml` → environment variables → defaults.
//! Configured limits may only tighten the defaults, never loosen them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level masthead configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MastheadConfig {
    pub limits: LimitsConfig,
}

/// Inclusive character-count bounds for a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthLimit {
    pub min: usize,
    pub max: usize,
}

impl LengthLimit {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `other` lies entirely within `self`.
    pub fn covers(self, other: LengthLimit) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Whether `len` lies within `[min, max]`.
    pub fn contains(self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Length constraints applied to magazine names and article titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Magazine name length. Default: 2..=16.
    pub magazine_name: LengthLimit,
    /// Article title length. Default: 5..=50.
    pub article_title: LengthLimit,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            magazine_name: LengthLimit::new(2, 16),
            article_title: LengthLimit::new(5, 50),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var) {
        match v.parse() {
            Ok(n) => *target = n,
            Err(_) => tracing::warn!("ignoring {}={:?}: not a valid number", var, v),
        }
    }
}

impl MastheadConfig {
    /// Load config from `.masthead/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".masthead").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override(
            "MASTHEAD_MAGAZINE_NAME_MIN",
            &mut config.limits.magazine_name.min,
        );
        env_override(
            "MASTHEAD_MAGAZINE_NAME_MAX",
            &mut config.limits.magazine_name.max,
        );
        env_override("MASTHEAD_TITLE_MIN", &mut config.limits.article_title.min);
        env_override("MASTHEAD_TITLE_MAX", &mut config.limits.article_title.max);

        config.validate()?;
        tracing::debug!(
            "loaded masthead config: magazine_name={}..={} article_title={}..={}",
            config.limits.magazine_name.min,
            config.limits.magazine_name.max,
            config.limits.article_title.min,
            config.limits.article_title.max,
        );
        Ok(config)
    }

    /// Reject limits that no string could satisfy or that fall outside the
    /// default bounds (magazine name 2..=16, article title 5..=50).
    pub fn validate(&self) -> Result<()> {
        let bounds = LimitsConfig::default();
        for (field, limit, bound) in [
            (
                "magazine_name",
                self.limits.magazine_name,
                bounds.magazine_name,
            ),
            (
                "article_title",
                self.limits.article_title,
                bounds.article_title,
            ),
        ] {
            if !bound.covers(limit) {
                anyhow::bail!(
                    "{field} limits {}..={} must lie within {}..={}",
                    limit.min,
                    limit.max,
                    bound.min,
                    bound.max,
                );
            }
            if limit.min > limit.max {
                anyhow::bail!(
                    "{field}.min ({}) must not exceed {field}.max ({})",
                    limit.min,
                    limit.max,
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MastheadConfig::default();
        assert_eq!(config.limits.magazine_name, LengthLimit::new(2, 16));
        assert_eq!(config.limits.article_title, LengthLimit::new(5, 50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[limits.article_title]
min = 8
max = 40
"#;
        let config: MastheadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.limits.article_title, LengthLimit::new(8, 40));
        assert!(config.validate().is_ok());
        // Defaults for unspecified fields
        assert_eq!(config.limits.magazine_name, LengthLimit::new(2, 16));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = MastheadConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.limits.magazine_name.max, 16);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = MastheadConfig::default();
        config.limits.magazine_name = LengthLimit::new(10, 4);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("magazine_name.min (10)"));
    }

    #[test]
    fn test_validate_rejects_zero_minimum() {
        let mut config = MastheadConfig::default();
        config.limits.article_title = LengthLimit::new(0, 50);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_loosened_limits() {
        let mut config = MastheadConfig::default();
        config.limits.magazine_name = LengthLimit::new(1, 16);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must lie within 2..=16"));

        let mut config = MastheadConfig::default();
        config.limits.article_title = LengthLimit::new(5, 51);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_tightened_limits() {
        let mut config = MastheadConfig::default();
        config.limits.magazine_name = LengthLimit::new(4, 8);
        config.limits.article_title = LengthLimit::new(10, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_keeps_value_on_unparsable_input() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("MASTHEAD_TEST_UNPARSABLE_LIMIT", "twelve") };
        let mut target = 16usize;
        env_override("MASTHEAD_TEST_UNPARSABLE_LIMIT", &mut target);
        assert_eq!(target, 16);

        unsafe { std::env::set_var("MASTHEAD_TEST_PARSABLE_LIMIT", "12") };
        env_override("MASTHEAD_TEST_PARSABLE_LIMIT", &mut target);
        assert_eq!(target, 12);
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let limit = LengthLimit::new(2, 16);
        assert!(!limit.contains(1));
        assert!(limit.contains(2));
        assert!(limit.contains(16));
        assert!(!limit.contains(17));
    }
}

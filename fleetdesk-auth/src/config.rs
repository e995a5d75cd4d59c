//! Session configuration.
//!
//! Controls where role strings are read from in the identity provider's
//! claims and how strictly claim expiry is checked. Loaded from environment
//! variables with defaults matching the provider's standard claim layout.

use fleetdesk_rbac::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// How a session principal is built from provider claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key in `user_metadata` holding a single role string.
    pub role_claim: String,

    /// Key in `app_metadata` holding a list of role strings.
    pub roles_claim: String,

    /// Clock skew tolerated when checking expiry, in seconds.
    pub leeway_secs: u64,

    /// Role string assigned when the claims carry no catalog role.
    ///
    /// Unset leaves the principal without roles.
    pub fallback_role: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role_claim: "role".to_string(),
            roles_claim: "roles".to_string(),
            leeway_secs: 30,
            fallback_role: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FLEETDESK_ROLE_CLAIM`: single-role key in `user_metadata` (default: role)
    /// - `FLEETDESK_ROLES_CLAIM`: role-list key in `app_metadata` (default: roles)
    /// - `FLEETDESK_CLOCK_LEEWAY_SECS`: expiry leeway in seconds (default: 30)
    /// - `FLEETDESK_FALLBACK_ROLE`: role for sessions without one (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            role_claim: lookup("FLEETDESK_ROLE_CLAIM").unwrap_or(default.role_claim),
            roles_claim: lookup("FLEETDESK_ROLES_CLAIM").unwrap_or(default.roles_claim),
            leeway_secs: lookup("FLEETDESK_CLOCK_LEEWAY_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.leeway_secs),
            fallback_role: lookup("FLEETDESK_FALLBACK_ROLE").filter(|s| !s.is_empty()),
        }
    }

    /// Parsed fallback role, if one is configured and valid.
    pub fn fallback(&self) -> Option<Role> {
        self.fallback_role.as_deref().and_then(Role::parse)
    }

    /// Check that claim keys are set and the fallback names a catalog role.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.role_claim.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "FLEETDESK_ROLE_CLAIM".to_string(),
                message: "claim key must not be empty".to_string(),
            });
        }
        if self.roles_claim.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "FLEETDESK_ROLES_CLAIM".to_string(),
                message: "claim key must not be empty".to_string(),
            });
        }
        if let Some(fallback) = &self.fallback_role {
            if Role::parse(fallback).is_none() {
                return Err(ConfigError::InvalidValue {
                    key: "FLEETDESK_FALLBACK_ROLE".to_string(),
                    message: format!("'{}' is not a catalog role", fallback),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.role_claim, "role");
        assert_eq!(config.roles_claim, "roles");
        assert_eq!(config.leeway_secs, 30);
        assert!(config.fallback_role.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("FLEETDESK_ROLE_CLAIM", "fd_role"),
            ("FLEETDESK_CLOCK_LEEWAY_SECS", "5"),
            ("FLEETDESK_FALLBACK_ROLE", "data_entry"),
        ]));
        assert_eq!(config.role_claim, "fd_role");
        assert_eq!(config.roles_claim, "roles");
        assert_eq!(config.leeway_secs, 5);
        assert_eq!(config.fallback(), Some(Role::DataEntry));
    }

    #[test]
    fn test_unparseable_leeway_uses_default() {
        let config =
            SessionConfig::from_lookup(lookup(&[("FLEETDESK_CLOCK_LEEWAY_SECS", "soon")]));
        assert_eq!(config.leeway_secs, 30);
    }

    #[test]
    fn test_empty_fallback_is_unset() {
        let config = SessionConfig::from_lookup(lookup(&[("FLEETDESK_FALLBACK_ROLE", "")]));
        assert!(config.fallback_role.is_none());
    }

    #[test]
    fn test_validate_rejects_unknown_fallback() {
        let config = SessionConfig {
            fallback_role: Some("Admin".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "FLEETDESK_FALLBACK_ROLE"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_claim_key() {
        let config = SessionConfig {
            roles_claim: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

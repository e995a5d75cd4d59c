//! Identity provider claims
//!
//! The decoded session payload handed over by the identity provider.
//! Signature verification happens upstream; this module only reads the
//! fields the back office needs and locates role strings inside them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{AuthError, AuthResult};

/// Decoded session claims.
///
/// Role strings live in two places: a single role under
/// `user_metadata.<role_claim>` and a list under `app_metadata.<roles_claim>`.
/// Both keys come from [`SessionConfig`].
///
/// # Example
///
/// ```
/// use fleetdesk_auth::{SessionClaims, SessionConfig};
///
/// let claims = SessionClaims::from_json(r#"{
///     "sub": "0190f3c2-7a4e-7d1b-9c55-3b1f2e6a8d00",
///     "email": "dispatch@example.com",
///     "exp": 4102444800,
///     "iat": 1700000000,
///     "user_metadata": {"role": "supervisor"}
/// }"#).unwrap();
///
/// assert_eq!(claims.role_strings(&SessionConfig::default()), ["supervisor"]);
/// assert!(claims.user_id().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,

    /// User email
    #[serde(default)]
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,

    /// Profile data the user may edit
    #[serde(default)]
    pub user_metadata: HashMap<String, Value>,

    /// Data only the back end may write
    #[serde(default)]
    pub app_metadata: HashMap<String, Value>,
}

impl SessionClaims {
    /// Create claims for a user, valid for `duration` from now.
    pub fn new(user_id: Uuid, email: impl Into<String>, duration: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            exp: (now + duration).timestamp(),
            iat: now.timestamp(),
            user_metadata: HashMap::new(),
            app_metadata: HashMap::new(),
        }
    }

    /// Decode claims from a JSON payload.
    pub fn from_json(payload: &str) -> AuthResult<Self> {
        let claims: Self = serde_json::from_str(payload)?;
        if claims.sub.is_empty() {
            return Err(AuthError::MissingClaim("sub".to_string()));
        }
        Ok(claims)
    }

    /// Get the user ID as UUID.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Check if the claims are expired, allowing `leeway_secs` of skew.
    pub fn is_expired(&self, leeway_secs: u64) -> bool {
        let leeway = i64::try_from(leeway_secs).unwrap_or(i64::MAX);
        Utc::now().timestamp() >= self.exp.saturating_add(leeway)
    }

    /// Get expiration as DateTime.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Raw role strings carried by the claims, in claim order.
    ///
    /// The `user_metadata` role comes first, followed by the `app_metadata`
    /// list. Values of the wrong JSON type are skipped.
    pub fn role_strings(&self, config: &SessionConfig) -> Vec<String> {
        let mut roles = Vec::new();

        if let Some(Value::String(role)) = self.user_metadata.get(&config.role_claim) {
            roles.push(role.clone());
        }

        match self.app_metadata.get(&config.roles_claim) {
            Some(Value::Array(items)) => {
                roles.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
            }
            Some(Value::String(role)) => roles.push(role.clone()),
            _ => {}
        }

        roles
    }

    /// Set the single role under `user_metadata.role`.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.user_metadata
            .insert("role".to_string(), Value::String(role.into()));
        self
    }

    /// Set the role list under `app_metadata.roles`.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(|role| Value::String(role.into()))
            .collect();
        self.app_metadata
            .insert("roles".to_string(), Value::Array(roles));
        self
    }
}

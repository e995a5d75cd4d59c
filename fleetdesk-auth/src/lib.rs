//! # FleetDesk Session
//!
//! This crate turns the identity provider's decoded session into a
//! [`Principal`] and answers access questions for it through
//! `fleetdesk-rbac`.
//!
//! ## Overview
//!
//! The fleetdesk-auth crate handles:
//! - **Claims**: Decoded provider payload (`sub`, `email`, `exp`, metadata)
//! - **Configuration**: Claim keys, expiry leeway and fallback role
//! - **Principal**: Zero or more roles, primary role, any-role checks, gate
//!
//! Token signatures are verified before claims reach this crate.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Duration;
//! use fleetdesk_auth::{Principal, SessionClaims, SessionConfig};
//! use fleetdesk_rbac::{Action, GateOutcome, Permission, Resource, Role};
//! use uuid::Uuid;
//!
//! let config = SessionConfig::default();
//! let claims = SessionClaims::new(Uuid::now_v7(), "gm@example.com", Duration::hours(1))
//!     .with_role("general_manager");
//!
//! let principal = Principal::from_claims(&claims, &config).unwrap();
//! assert_eq!(principal.primary_role(), Some(Role::GeneralManager));
//!
//! let void = Permission::new(Resource::Invoices, Action::Void);
//! assert_eq!(principal.gate(Role::GeneralManager, Some(void)), GateOutcome::Allow);
//! ```

pub mod claims;
pub mod config;
pub mod error;
pub mod principal;

// Re-export main types
pub use claims::SessionClaims;
pub use config::{ConfigError, SessionConfig};
pub use error::{AuthError, AuthResult};
pub use principal::Principal;

//! JWT authentication and password hashing library for Notable.
//!
//! This crate provides:
//! - JWT HS256 encoding and decoding carrying the full caller identity
//! - Argon2id password hashing with fixed parameters
//!
//! # Example
//!
//! ```rust
//! use notable_auth::{decode_token, encode_token, Claims};
//! use notable_core::{TenantId, TenantPlan, UserId, UserRole};
//!
//! let claims = Claims::builder()
//!     .user_id(UserId::new())
//!     .email("admin@acme.test")
//!     .role(UserRole::Admin)
//!     .tenant_id(TenantId::new())
//!     .tenant_slug("acme")
//!     .tenant_plan(TenantPlan::Free)
//!     .build();
//!
//! let token = encode_token(&claims, b"a-shared-secret-of-sufficient-len").unwrap();
//! let decoded = decode_token(&token, b"a-shared-secret-of-sufficient-len").unwrap();
//! assert_eq!(decoded, claims);
//! ```

mod claims;
mod error;
mod jwt;
mod password;

// Re-export public API
pub use claims::{Claims, ClaimsBuilder, TOKEN_VALIDITY_HOURS};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_with_config, encode_token, ValidationConfig};
pub use password::{hash_password, verify_password, PasswordHasher};

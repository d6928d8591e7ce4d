//! Authentication utilities library
//!
//! Provides the stateless building blocks for session authentication:
//! - Password hashing (Argon2id)
//! - Signed session token issuance and validation (JWT, HMAC-SHA256)
//!
//! Both halves are pure computation with no I/O: the directory lookup that
//! produces a stored hash, and the request pipeline that consumes decoded
//! claims, live in the service crates.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::JwtCodec;
//! use chrono::Duration;
//!
//! let codec = JwtCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(10));
//! let token = codec.issue("alice", "MANAGER").unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.role, "MANAGER");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;

//! Authentication adapters.
//!
//! Implementations of the credential and session ports:
//!
//! - `bcrypt_hasher` - Salted password hashing
//! - `jwt` - HS256 bearer tokens, issued at login and validated per request
//! - `mock` - Test implementations that don't require real tokens

mod bcrypt_hasher;
mod jwt;
mod mock;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt::JwtTokenService;
pub use mock::MockSessionValidator;

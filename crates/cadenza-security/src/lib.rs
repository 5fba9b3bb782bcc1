//! # Cadenza Security
//!
//! Password hashing for register/login, using Argon2id.

mod password;

pub use password::PasswordHasher;

// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;

pub use password::{generate, generate_easy, generate_for, PasswordGenerator};
pub use random::SecureRandom;

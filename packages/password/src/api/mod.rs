//! Fluent derivation API
//!
//! Usage: `Password::from_seeds(seeds).with_length(12).derive().await`

pub mod password_builder;

pub use password_builder::{
    Password, PasswordBuilder, PasswordBuilderWithHandler, PasswordBuilderWithLength,
};

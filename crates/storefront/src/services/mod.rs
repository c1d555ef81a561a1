//! Business logic services for the storefront.
//!
//! - `auth` - password registration and login

pub mod auth;

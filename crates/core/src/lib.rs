//! Karigar Core - Shared domain types.
//!
//! This crate provides the types every Karigar component agrees on:
//! - `storefront` - marketplace API and in-memory store
//! - `integration-tests` - end-to-end tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, ratings, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

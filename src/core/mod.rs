//! Core library components.
//!
//! This module contains the reusable business logic for account storage,
//! encryption at rest, and vocabulary record management.

pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod store;
pub mod vault;

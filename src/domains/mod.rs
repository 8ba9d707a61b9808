//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, tools, backed by the upstream
//! intelligence API in [`crate::api`].

pub mod tools;

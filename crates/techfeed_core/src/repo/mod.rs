//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define read-only data access contracts for tech articles.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories borrow a caller-owned connection and never manage its
//!   lifecycle.
//! - "Not found" is an absent value (`Ok(None)`), never an error.

pub mod article_repo;

//! Domain model for published tech articles.
//!
//! # Responsibility
//! - Define the canonical record read by the repository layer.
//! - Keep the record storage-engine agnostic.
//!
//! # Invariants
//! - Every stored article is identified by a storage-assigned `ArticleId`.

pub mod article;

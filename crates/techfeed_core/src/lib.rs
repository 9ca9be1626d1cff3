//! Core data access for published tech articles.
//! This crate owns the article schema and its read-only queries.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    column_spec, ArticleId, ColumnSpec, ColumnType, TechArticle, TECH_ARTICLE_COLUMNS,
    TECH_ARTICLE_TABLE,
};
pub use repo::article_repo::{
    format_publication_date, ArticleRepository, RepoError, RepoResult, SqliteArticleRepository,
};
pub use service::article_service::ArticleService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

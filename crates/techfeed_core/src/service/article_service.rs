//! Tech article use-case service.
//!
//! # Responsibility
//! - Provide stable read entry points for outer layers.
//! - Delegate every query to a repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository query contracts.
//! - Service layer remains storage-agnostic.

use crate::model::article::TechArticle;
use crate::repo::article_repo::{ArticleRepository, RepoResult};

/// Use-case service wrapper for article queries.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored article.
    pub fn list_articles(&self) -> RepoResult<Vec<TechArticle>> {
        self.repo.list_articles()
    }

    /// Gets one article by exact title and description.
    ///
    /// `description: None` targets articles stored without a description.
    /// `Ok(None)` means "not found" and is not an error.
    pub fn get_article_by_title_and_description(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> RepoResult<Option<TechArticle>> {
        self.repo.find_by_title_and_description(title, description)
    }

    /// Lists one category, most recent publication first.
    pub fn list_articles_by_category(&self, category: &str) -> RepoResult<Vec<TechArticle>> {
        self.repo.list_by_category(category)
    }

    pub fn list_categories(&self) -> RepoResult<Vec<String>> {
        self.repo.list_categories()
    }
}

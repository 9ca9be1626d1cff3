//! TechArticle record and its declarative column table.
//!
//! # Responsibility
//! - Define the canonical shape of one published technical article.
//! - Describe the storage mapping (column names, types, limits) without
//!   depending on any storage engine.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - `title`, `category`, `date_of_publication` and `content` are always
//!   present on stored records.
//! - Length/nullability limits are enforced by storage at write time; this
//!   model carries them as metadata only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned primary key for a tech article.
pub type ArticleId = i64;

/// Table name used by the storage adapter.
pub const TECH_ARTICLE_TABLE: &str = "tech_articles";

/// Logical column type, independent of the SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    /// Bounded (`max_len`) or unbounded string.
    Text,
    /// Calendar date without time or zone.
    Date,
}

/// Declarative metadata for one stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name exactly as stored.
    pub name: &'static str,
    pub column_type: ColumnType,
    /// Maximum length in characters. `None` means unbounded.
    pub max_len: Option<usize>,
    pub nullable: bool,
    pub primary_key: bool,
}

impl ColumnSpec {
    const fn new(
        name: &'static str,
        column_type: ColumnType,
        max_len: Option<usize>,
        nullable: bool,
    ) -> Self {
        Self {
            name,
            column_type,
            max_len,
            nullable,
            primary_key: false,
        }
    }
}

/// Column table for `tech_articles`, in storage order.
pub const TECH_ARTICLE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "id",
        column_type: ColumnType::Integer,
        max_len: None,
        nullable: false,
        primary_key: true,
    },
    ColumnSpec::new("Title", ColumnType::Text, Some(255), false),
    ColumnSpec::new("Category", ColumnType::Text, Some(100), false),
    ColumnSpec::new("imagePath", ColumnType::Text, Some(500), true),
    ColumnSpec::new("Date_of_publication", ColumnType::Date, None, false),
    ColumnSpec::new("Description", ColumnType::Text, None, true),
    ColumnSpec::new("Content", ColumnType::Text, None, false),
];

/// Looks up column metadata by stored column name.
pub fn column_spec(name: &str) -> Option<&'static ColumnSpec> {
    TECH_ARTICLE_COLUMNS.iter().find(|column| column.name == name)
}

/// One published technical article.
///
/// Serialized with the stored column names so JSON consumers see the same
/// field spelling as the table (`Title`, `imagePath`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechArticle {
    pub id: ArticleId,
    #[serde(rename = "Title")]
    pub title: String,
    /// Free-form category label; any string is valid.
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(rename = "Date_of_publication")]
    pub date_of_publication: NaiveDate,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Full article body.
    #[serde(rename = "Content")]
    pub content: String,
}

impl TechArticle {
    /// Creates an article with the required fields set and optional ones empty.
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        category: impl Into<String>,
        date_of_publication: NaiveDate,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            image_path: None,
            date_of_publication,
            description: None,
            content: content.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }
}

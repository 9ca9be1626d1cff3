//! Tech article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the read-only query APIs over `tech_articles` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The repository only borrows its connection; it never opens, closes or
//!   wraps queries in transactions.
//! - Read paths reject invalid persisted dates instead of masking them.
//! - String filters use exact SQLite equality (binary collation, no trimming).

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::article::{ArticleId, TechArticle, TECH_ARTICLE_COLUMNS, TECH_ARTICLE_TABLE};
use chrono::NaiveDate;
use log::warn;
use rusqlite::{params, Connection, Row, Rows};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    Title,
    Category,
    imagePath,
    Date_of_publication,
    Description,
    Content
FROM tech_articles";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for article queries.
///
/// Engine failures are carried unchanged inside `Db`.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted row cannot be converted to `TechArticle`.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "article repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "article repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "article repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted article data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read-only query interface for tech articles.
pub trait ArticleRepository {
    /// Returns every stored article exactly once, ordered by `id`.
    fn list_articles(&self) -> RepoResult<Vec<TechArticle>>;
    /// Returns the first article whose title and description both match
    /// exactly, or `None`.
    ///
    /// `description: None` matches articles stored without a description;
    /// `Some("")` only matches an empty stored description.
    fn find_by_title_and_description(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> RepoResult<Option<TechArticle>>;
    /// Returns articles of one category, newest publication date first.
    fn list_by_category(&self, category: &str) -> RepoResult<Vec<TechArticle>>;
    /// Returns each distinct category once, sorted ascending.
    fn list_categories(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed article repository borrowing a caller-owned connection.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Creates repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is not the latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the table
    ///   shape does not match the article column table.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_article_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn list_articles(&self) -> RepoResult<Vec<TechArticle>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} ORDER BY id ASC;"))?;
        let articles = collect_articles(stmt.query([])?);
        articles
    }

    fn find_by_title_and_description(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> RepoResult<Option<TechArticle>> {
        let Some(found) = first_title_description_match(self.conn, title, description)? else {
            return Ok(None);
        };

        if let Some(duplicate_id) = found.duplicate_id {
            warn!(
                "event=article_lookup module=repo status=ambiguous returned_id={} duplicate_id={}",
                found.article.id, duplicate_id
            );
        }

        Ok(Some(found.article))
    }

    fn list_by_category(&self, category: &str) -> RepoResult<Vec<TechArticle>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_SELECT_SQL}
             WHERE Category = ?1
             ORDER BY Date_of_publication DESC, id ASC;"
        ))?;
        let articles = collect_articles(stmt.query([category])?);
        articles
    }

    fn list_categories(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT Category
             FROM tech_articles
             ORDER BY Category ASC;",
        )?;

        let categories = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }
}

/// First (lowest id) title/description match, plus the id of a second
/// match when the pair is not unique.
#[derive(Debug)]
struct TitleDescriptionMatch {
    article: TechArticle,
    duplicate_id: Option<ArticleId>,
}

fn first_title_description_match(
    conn: &Connection,
    title: &str,
    description: Option<&str>,
) -> RepoResult<Option<TitleDescriptionMatch>> {
    // `IS` is NULL-safe equality. Two rows are enough to detect ambiguity.
    let mut stmt = conn.prepare(&format!(
        "{ARTICLE_SELECT_SQL}
         WHERE Title = ?1
           AND Description IS ?2
         ORDER BY id ASC
         LIMIT 2;"
    ))?;

    let mut rows = stmt.query(params![title, description])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let article = parse_article_row(row)?;
    let duplicate_id = match rows.next()? {
        Some(row) => Some(row.get::<_, ArticleId>("id")?),
        None => None,
    };

    Ok(Some(TitleDescriptionMatch {
        article,
        duplicate_id,
    }))
}

fn collect_articles(mut rows: Rows<'_>) -> RepoResult<Vec<TechArticle>> {
    let mut articles = Vec::new();
    while let Some(row) = rows.next()? {
        articles.push(parse_article_row(row)?);
    }
    Ok(articles)
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<TechArticle> {
    let id: ArticleId = row.get("id")?;
    let date_text: String = row.get("Date_of_publication")?;
    let date_of_publication = parse_publication_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date `{date_text}` in tech_articles.Date_of_publication for id {id}"
        ))
    })?;

    Ok(TechArticle {
        id,
        title: row.get("Title")?,
        category: row.get("Category")?,
        image_path: row.get("imagePath")?,
        date_of_publication,
        description: row.get("Description")?,
        content: row.get("Content")?,
    })
}

/// Parses the stored `YYYY-MM-DD` representation of a publication date.
pub(crate) fn parse_publication_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Formats a publication date the way it is stored.
pub fn format_publication_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn ensure_article_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, TECH_ARTICLE_TABLE)? {
        return Err(RepoError::MissingRequiredTable(TECH_ARTICLE_TABLE));
    }

    for column in TECH_ARTICLE_COLUMNS {
        if !table_has_column(conn, TECH_ARTICLE_TABLE, column.name)? {
            return Err(RepoError::MissingRequiredColumn {
                table: TECH_ARTICLE_TABLE,
                column: column.name,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

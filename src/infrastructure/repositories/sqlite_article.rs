use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, DateWindow, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, author_id, title, content, created_at";

/// The one place the two-predicate ownership filter is spelled out. Both the
/// owner-scoped UPDATE and DELETE are built from it.
const OWNED_FILTER: &str = "id = ? AND author_id = ?";

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            title,
            content,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (author_id, title, content, created_at) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(created_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let ArticleUpdate {
            id,
            author_id,
            title,
            content,
        } = update;

        let sql = format!(
            "UPDATE articles SET title = ?, content = ? WHERE {OWNED_FILTER} RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(i64::from(id))
            .bind(i64::from(author_id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete_owned(&self, id: ArticleId, author: UserId) -> DomainResult<u64> {
        let sql = format!("DELETE FROM articles WHERE {OWNED_FILTER}");
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .bind(i64::from(author))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn list_by_author(
        &self,
        author: UserId,
        created_within: Option<DateWindow>,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = "
        ));
        builder.push_bind(i64::from(author));

        if let Some(window) = created_within {
            builder.push(" AND created_at >= ");
            builder.push_bind(window.start());
            builder.push(" AND created_at < ");
            builder.push_bind(window.end());
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

/// Owner-scoped content overwrite. `author_id` is part of the record filter,
/// not a mutable field: a non-matching owner behaves like a missing id.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

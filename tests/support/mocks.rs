// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use kiji_core::application::ports::time::Clock;
use kiji_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, DateWindow,
    NewArticle,
};
use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::user::UserId;

/// Clock whose reading tests can move around, so `created_at` values land in
/// known calendar years.
pub struct MutableClock {
    now: Mutex<DateTime<Utc>>,
}

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for MutableClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Repositories whose every call fails, for exercising the 500 path.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn delete_owned(&self, _id: ArticleId, _author: UserId) -> DomainResult<u64> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn list_by_author(
        &self,
        _author: UserId,
        _created_within: Option<DateWindow>,
    ) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

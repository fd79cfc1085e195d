use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, DateWindow};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the update to the row matching both id and owner. Returns
    /// `None` when no such row exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// Removes the row matching both id and owner, returning how many rows
    /// went away (zero or one).
    async fn delete_owned(&self, id: ArticleId, author: UserId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_by_author(
        &self,
        author: UserId,
        created_within: Option<DateWindow>,
    ) -> DomainResult<Vec<Article>>;
}

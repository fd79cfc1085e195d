use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing shape of an article. The author id and creation timestamp stay
/// internal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
        }
    }
}

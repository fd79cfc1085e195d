// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<()> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        let new_article = NewArticle {
            author_id: actor.id,
            title,
            content,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::debug!(article_id = i64::from(created.id), "article created");
        Ok(())
    }
}

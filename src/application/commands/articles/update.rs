use super::ArticleCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Returns `None` when no article matches both the id and the caller.
    /// A foreign article is indistinguishable from a missing one.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<()>> {
        // Ids that cannot exist behave like any other miss.
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(None);
        };

        let update = ArticleUpdate {
            id,
            author_id: actor.id,
            title: ArticleTitle::new(command.title)?,
            content: ArticleContent::new(command.content)?,
        };

        match self.write_repo.update(update).await? {
            Some(updated) => {
                tracing::debug!(article_id = i64::from(updated.id), "article updated");
                Ok(Some(()))
            }
            None => Ok(None),
        }
    }
}

// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deleting a nonexistent or foreign article is a silent no-op.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(());
        };

        let removed = self.write_repo.delete_owned(id, actor.id).await?;
        tracing::debug!(article_id = command.id, removed, "article delete processed");
        Ok(())
    }
}

use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::DateWindow,
};

pub struct ListArticlesQuery {
    /// Restrict to articles created within this UTC calendar year.
    pub year: Option<i32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let created_within = query.year.map(DateWindow::calendar_year).transpose()?;

        let records = self
            .read_repo
            .list_by_author(actor.id, created_within)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}

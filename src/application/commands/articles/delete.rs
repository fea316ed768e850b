use super::ArticleCommandService;
use crate::{
    application::{
        ApplicationResult, ResultCode,
        error::ResultCodeExt,
        validation::{Rule, field},
    },
    domain::article::ArticleId,
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = field("id", Rule::Min { min: 1 }, ArticleId::new(command.id))?;

        self.ensure_article_exists(id).await?;

        self.article_repo
            .soft_delete(id, self.clock.now())
            .await
            .or_missing(ResultCode::ArticleNotFound, ResultCode::DeleteArticleFail)?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}

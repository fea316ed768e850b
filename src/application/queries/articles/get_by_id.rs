use super::ArticleQueryService;
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::ArticleDto,
        error::{ApplicationError, ResultCodeExt},
        validation::{Rule, field},
    },
    domain::article::ArticleId,
};

#[derive(Debug, Clone, Copy)]
pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = field("id", Rule::Min { min: 1 }, ArticleId::new(query.id))?;

        let exists = self
            .repo
            .exists_by_id(id)
            .await
            .or_code(ResultCode::CheckArticleExistFail)?;
        if !exists {
            return Err(ApplicationError::not_found(ResultCode::ArticleNotFound));
        }

        let article = self
            .repo
            .find_by_id(id)
            .await
            .or_code(ResultCode::GetArticleFail)?
            .ok_or_else(|| ApplicationError::not_found(ResultCode::ArticleNotFound))?;
        Ok(article.into())
    }
}

use super::{
    ArticleCommandService,
    service::{ACTOR_MAX_LEN, check_body},
};
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::ArticleDto,
        error::ResultCodeExt,
        validation::{Rule, Validate, Validator, field},
    },
    domain::{
        article::{ArticleId, ArticleState, ArticleUpdate},
        tag::TagId,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub tag_id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub state: i16,
    pub modified_by: String,
}

impl Validate for UpdateArticleCommand {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        v.min("id", self.id, 1);
        check_body(
            &mut v,
            self.tag_id,
            &self.title,
            &self.description,
            &self.content,
            self.state,
        );
        v.required("modified_by", &self.modified_by)
            .max_size("modified_by", &self.modified_by, ACTOR_MAX_LEN);
        v.finish()
    }
}

impl ArticleCommandService {
    /// The article is checked before the tag, so a request naming both a
    /// missing article and a missing tag reports the article.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        command.validate()?;
        let id = field("id", Rule::Min { min: 1 }, ArticleId::new(command.id))?;
        let tag_id = field("tag_id", Rule::Min { min: 1 }, TagId::new(command.tag_id))?;
        let state = field(
            "state",
            Rule::Range { min: 0, max: 1 },
            ArticleState::try_from(command.state),
        )?;

        self.ensure_article_exists(id).await?;
        self.ensure_tag_exists(tag_id).await?;

        let update = ArticleUpdate {
            id,
            tag_id,
            title: command.title,
            description: command.description,
            content: command.content,
            state,
            modified_by: command.modified_by,
            modified_at: None,
        }
        .touch(self.clock.now());

        let updated = self
            .article_repo
            .update(update)
            .await
            .or_missing(ResultCode::ArticleNotFound, ResultCode::EditArticleFail)?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}

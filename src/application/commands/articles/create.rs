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
        article::{ArticleState, NewArticle},
        tag::TagId,
    },
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub tag_id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub state: i16,
    pub created_by: String,
}

impl Validate for CreateArticleCommand {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        check_body(
            &mut v,
            self.tag_id,
            &self.title,
            &self.description,
            &self.content,
            self.state,
        );
        v.required("created_by", &self.created_by)
            .max_size("created_by", &self.created_by, ACTOR_MAX_LEN);
        v.finish()
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        command.validate()?;
        let tag_id = field("tag_id", Rule::Min { min: 1 }, TagId::new(command.tag_id))?;
        let state = field(
            "state",
            Rule::Range { min: 0, max: 1 },
            ArticleState::try_from(command.state),
        )?;

        self.ensure_tag_exists(tag_id).await?;

        let new_article = NewArticle {
            tag_id,
            title: command.title,
            description: command.description,
            content: command.content,
            state,
            created_by: command.created_by,
            created_at: None,
            modified_at: None,
        }
        .stamp(self.clock.now());

        let created = self
            .article_repo
            .insert(new_article)
            .await
            .or_code(ResultCode::AddArticleFail)?;

        tracing::info!(article_id = %created.id, tag_id = %created.tag_id, "article created");
        Ok(created.into())
    }
}

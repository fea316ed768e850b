use super::ArticleQueryService;
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::{ArticleDto, ListPage},
        error::ResultCodeExt,
        validation::{Rule, Validate, Validator, field},
    },
    domain::{
        article::{ArticleFilter, ArticleState},
        pagination::PageRequest,
        tag::TagId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub state: Option<i16>,
    pub tag_id: Option<i64>,
    pub created_by: Option<String>,
    pub page: Option<i64>,
}

impl Validate for ListArticlesQuery {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        if let Some(state) = self.state {
            v.range("state", i64::from(state), 0, 1);
        }
        if let Some(tag_id) = self.tag_id {
            v.min("tag_id", tag_id, 1);
        }
        if let Some(created_by) = &self.created_by {
            v.max_size("created_by", created_by, 100);
        }
        v.finish()
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ListPage<ArticleDto>> {
        query.validate()?;
        let state = query
            .state
            .map(|raw| {
                field(
                    "state",
                    Rule::Range { min: 0, max: 1 },
                    ArticleState::try_from(raw),
                )
            })
            .transpose()?;
        let tag_id = query
            .tag_id
            .map(|raw| field("tag_id", Rule::Min { min: 1 }, TagId::new(raw)))
            .transpose()?;

        let filter = ArticleFilter {
            state,
            tag_id,
            created_by: query.created_by.filter(|name| !name.is_empty()),
        };
        let page = PageRequest::from_page(query.page, self.page_size);

        let total = self
            .repo
            .count(&filter)
            .await
            .or_code(ResultCode::CountArticleFail)?;
        let articles = self
            .repo
            .list_page(&filter, page)
            .await
            .or_code(ResultCode::GetArticlesFail)?;

        Ok(ListPage::new(
            articles.into_iter().map(Into::into).collect(),
            total,
        ))
    }
}

use super::TagQueryService;
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::{ListPage, TagDto},
        error::ResultCodeExt,
        validation::{Rule, Validate, Validator, field},
    },
    domain::{
        pagination::PageRequest,
        tag::{TagFilter, TagState},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery {
    pub name: Option<String>,
    pub state: Option<i16>,
    pub page: Option<i64>,
}

impl Validate for ListTagsQuery {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        if let Some(name) = &self.name {
            v.max_size("name", name, 100);
        }
        if let Some(state) = self.state {
            v.range("state", i64::from(state), 0, 1);
        }
        v.finish()
    }
}

impl TagQueryService {
    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<ListPage<TagDto>> {
        query.validate()?;
        let state = query
            .state
            .map(|raw| field("state", Rule::Range { min: 0, max: 1 }, TagState::try_from(raw)))
            .transpose()?;

        let filter = TagFilter {
            name: query.name.filter(|name| !name.is_empty()),
            state,
        };
        let page = PageRequest::from_page(query.page, self.page_size);

        let tags = self
            .repo
            .list_page(&filter, page)
            .await
            .or_code(ResultCode::GetTagsFail)?;
        let total = self
            .repo
            .count(&filter)
            .await
            .or_code(ResultCode::CountTagFail)?;

        Ok(ListPage::new(tags.into_iter().map(Into::into).collect(), total))
    }
}

use super::{
    TagCommandService,
    service::{ACTOR_MAX_LEN, NAME_MAX_LEN},
};
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::TagDto,
        error::ResultCodeExt,
        validation::{Rule, Validate, Validator, field},
    },
    domain::tag::{TagId, TagState, TagUpdate},
};

#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    pub id: i64,
    pub name: String,
    pub state: i16,
    pub modified_by: String,
}

impl Validate for UpdateTagCommand {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        v.min("id", self.id, 1)
            .required("name", &self.name)
            .max_size("name", &self.name, NAME_MAX_LEN)
            .required("modified_by", &self.modified_by)
            .max_size("modified_by", &self.modified_by, ACTOR_MAX_LEN)
            .range("state", i64::from(self.state), 0, 1);
        v.finish()
    }
}

impl TagCommandService {
    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        command.validate()?;
        let id = field("id", Rule::Min { min: 1 }, TagId::new(command.id))?;
        let state = field(
            "state",
            Rule::Range { min: 0, max: 1 },
            TagState::try_from(command.state),
        )?;

        self.ensure_exists(id).await?;

        let update = TagUpdate {
            id,
            name: command.name,
            state,
            modified_by: command.modified_by,
            modified_at: None,
        }
        .touch(self.clock.now());

        let updated = self
            .repo
            .update(update)
            .await
            .or_missing(ResultCode::TagNotFound, ResultCode::EditTagFail)?;

        tracing::info!(tag_id = %updated.id, "tag updated");
        Ok(updated.into())
    }
}

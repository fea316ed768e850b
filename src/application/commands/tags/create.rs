use super::{
    TagCommandService,
    service::{ACTOR_MAX_LEN, NAME_MAX_LEN},
};
use crate::{
    application::{
        ApplicationResult, ResultCode,
        dto::TagDto,
        error::{ApplicationError, ResultCodeExt},
        validation::{Rule, Validate, Validator, field},
    },
    domain::tag::{NewTag, TagState},
};

#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    pub name: String,
    pub state: i16,
    pub created_by: String,
}

impl Validate for CreateTagCommand {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .max_size("name", &self.name, NAME_MAX_LEN)
            .required("created_by", &self.created_by)
            .max_size("created_by", &self.created_by, ACTOR_MAX_LEN)
            .range("state", i64::from(self.state), 0, 1);
        v.finish()
    }
}

impl TagCommandService {
    /// Name uniqueness is checked here, not by a storage constraint, so two
    /// concurrent creations with the same name can both succeed.
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        command.validate()?;
        let state = field(
            "state",
            Rule::Range { min: 0, max: 1 },
            TagState::try_from(command.state),
        )?;

        let taken = self
            .repo
            .exists_by_name(&command.name)
            .await
            .or_code(ResultCode::CheckTagExistFail)?;
        if taken {
            return Err(ApplicationError::conflict(ResultCode::TagExists));
        }

        let new_tag = NewTag::new(command.name, state, command.created_by).stamp(self.clock.now());
        let created = self
            .repo
            .insert(new_tag)
            .await
            .or_code(ResultCode::AddTagFail)?;

        tracing::info!(tag_id = %created.id, name = %created.name, "tag created");
        Ok(created.into())
    }
}

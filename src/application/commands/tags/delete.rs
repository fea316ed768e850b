use super::TagCommandService;
use crate::{
    application::{
        ApplicationResult, ResultCode,
        error::ResultCodeExt,
        validation::{Rule, field},
    },
    domain::tag::TagId,
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    /// Marks the tag deleted; the row stays in storage but disappears from reads.
    pub async fn delete_tag(&self, command: DeleteTagCommand) -> ApplicationResult<()> {
        let id = field("id", Rule::Min { min: 1 }, TagId::new(command.id))?;

        self.ensure_exists(id).await?;

        self.repo
            .soft_delete(id, self.clock.now())
            .await
            .or_missing(ResultCode::TagNotFound, ResultCode::DeleteTagFail)?;

        tracing::info!(tag_id = %id, "tag deleted");
        Ok(())
    }
}

use serde::{Serialize, Serializer};
use std::fmt;

/// Business status carried in the `code` field of every response envelope.
///
/// Each failure site has its own code so clients and logs can tell a failed
/// count from a failed listing without any transport-level detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Success,
    Error,
    InvalidParams,

    TagExists,
    CheckTagExistFail,
    TagNotFound,
    GetTagsFail,
    CountTagFail,
    AddTagFail,
    EditTagFail,
    DeleteTagFail,

    ArticleNotFound,
    CheckArticleExistFail,
    AddArticleFail,
    DeleteArticleFail,
    EditArticleFail,
    CountArticleFail,
    GetArticlesFail,
    GetArticleFail,

    AuthCheckTokenFail,
    AuthCheckTokenTimeout,
    AuthTokenFail,
    AuthFail,
}

impl ResultCode {
    pub const fn code(self) -> u32 {
        match self {
            Self::Success => 200,
            Self::Error => 500,
            Self::InvalidParams => 400,

            Self::TagExists => 10001,
            Self::CheckTagExistFail => 10002,
            Self::TagNotFound => 10003,
            Self::GetTagsFail => 10004,
            Self::CountTagFail => 10005,
            Self::AddTagFail => 10006,
            Self::EditTagFail => 10007,
            Self::DeleteTagFail => 10008,

            Self::ArticleNotFound => 10011,
            Self::CheckArticleExistFail => 10012,
            Self::AddArticleFail => 10013,
            Self::DeleteArticleFail => 10014,
            Self::EditArticleFail => 10015,
            Self::CountArticleFail => 10016,
            Self::GetArticlesFail => 10017,
            Self::GetArticleFail => 10018,

            Self::AuthCheckTokenFail => 20001,
            Self::AuthCheckTokenTimeout => 20002,
            Self::AuthTokenFail => 20003,
            Self::AuthFail => 20004,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Error => "fail",
            Self::InvalidParams => "invalid request parameters",

            Self::TagExists => "tag name already exists",
            Self::CheckTagExistFail => "failed to check whether the tag exists",
            Self::TagNotFound => "tag does not exist",
            Self::GetTagsFail => "failed to list tags",
            Self::CountTagFail => "failed to count tags",
            Self::AddTagFail => "failed to add tag",
            Self::EditTagFail => "failed to edit tag",
            Self::DeleteTagFail => "failed to delete tag",

            Self::ArticleNotFound => "article does not exist",
            Self::CheckArticleExistFail => "failed to check whether the article exists",
            Self::AddArticleFail => "failed to add article",
            Self::DeleteArticleFail => "failed to delete article",
            Self::EditArticleFail => "failed to edit article",
            Self::CountArticleFail => "failed to count articles",
            Self::GetArticlesFail => "failed to list articles",
            Self::GetArticleFail => "failed to get article",

            Self::AuthCheckTokenFail => "token authentication failed",
            Self::AuthCheckTokenTimeout => "token has expired",
            Self::AuthTokenFail => "failed to generate token",
            Self::AuthFail => "invalid username or password",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

use crate::domain::errors::DomainError;

const CNT_ARTICLE_TAG: &str = "blog_article_tag_id_fkey";
const CNT_AUTH_USERNAME: &str = "blog_auth_username_key";
const CNT_TAG_STATE: &str = "blog_tag_state_chk";
const CNT_ARTICLE_STATE: &str = "blog_article_state_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_AUTH_USERNAME => {
                        DomainError::Validation("username already exists".into())
                    }
                    CNT_TAG_STATE | CNT_ARTICLE_STATE => {
                        DomainError::Validation("state must be 0 or 1".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// `COUNT(*)` comes back as `BIGINT`; it is never negative in practice.
pub(super) fn to_count(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or_default()
}

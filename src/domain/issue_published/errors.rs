use crate::domain::issue_published::models::locale::LocaleError;

#[derive(thiserror::Error, Debug)]
pub enum IssuePublishedError {
    #[error("Invalid job configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<LocaleError> for IssuePublishedError {
    fn from(value: LocaleError) -> Self {
        Self::InvalidConfiguration(value.to_string())
    }
}

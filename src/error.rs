use thiserror::Error;

pub type PreviewResult<T> = Result<T, PreviewError>;

/// Input problems that abort an operation before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("content is required")]
    MissingContent,

    #[error("no persona selected")]
    MissingPersona,

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("title is required")]
    MissingTitle,

    #[error("invalid {kind}: {value}")]
    InvalidTag { kind: &'static str, value: String },
}

impl PreviewError {
    pub fn invalid_tag(kind: &'static str, value: &str) -> Self {
        PreviewError::InvalidTag {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown trait `{0}`")]
    UnknownTrait(String),

    #[error("unknown allergen `{0}`")]
    UnknownAllergen(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

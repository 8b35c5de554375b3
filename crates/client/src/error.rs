use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// `error` and `message` are the matching fields of the JSON body, when
    /// the server sent one.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        error: Option<String>,
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid header value for `{0}`")]
    InvalidHeader(&'static str),

    #[error("{0}")]
    Validate(#[from] midining_shared::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// The `error` field of a rejected request's body.
    pub fn server_error(&self) -> Option<&str> {
        match self {
            Self::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// The `message` field of a rejected request's body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Decode(value.to_string());
        }

        Self::Unreachable(value)
    }
}

/// Error body shapes the backend uses.
#[derive(Deserialize, Default)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

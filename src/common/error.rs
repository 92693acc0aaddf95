use thiserror::Error;

/// Everything that can go wrong while talking to the board.
///
/// All variants are recovered by the UI state and rendered as a single error
/// line; none of them terminate the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("server responded with {status}: {body}")]
    Server { status: u16, body: String },
}

impl BoardError {
    /// Text shown under the compose form. Server errors are replaced by
    /// `fallback`; transport errors keep their own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            BoardError::Validation(message) | BoardError::Network(message) => message.clone(),
            BoardError::Server { .. } => fallback.to_string(),
        }
    }

    /// Like [`user_message`](Self::user_message), but a non-empty server body
    /// wins over the fallback.
    pub fn user_message_with_body(&self, fallback: &str) -> String {
        match self {
            BoardError::Server { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            other => other.user_message(fallback),
        }
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Network(err.to_string())
    }
}

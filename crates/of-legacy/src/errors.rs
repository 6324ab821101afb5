use of_api::ApiError;
use thiserror::Error;

/// Legacy join translation error types
#[derive(Error, Debug)]
pub enum LegacyError {
    /// The legacy client always sends `user`, `serverId` and `sessionId`
    #[error("Legacy join request is missing the `{0}` parameter")]
    MissingParameter(&'static str),

    #[error("sessionId is not of the form token:<accessToken>:<uuid>")]
    MalformedSessionId,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LegacyError {
    /// Whether the error points at a caller that broke the legacy protocol
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::MalformedSessionId)
    }
}

pub type Result<T> = std::result::Result<T, LegacyError>;

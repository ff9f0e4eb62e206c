use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaderboardError {
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),
    #[error("score store failure: {0}")]
    Storage(String),
}

/// Failure of a remote score call, as shown to the player.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("could not reach the leaderboard server: {0}")]
    Connect(String),
    #[error("score rejected: {0}")]
    Rejected(String),
    #[error("leaderboard server error: {0}")]
    Server(String),
}

impl From<LeaderboardError> for ReportError {
    fn from(error: LeaderboardError) -> Self {
        match error {
            LeaderboardError::InvalidSubmission(message) => ReportError::Rejected(message),
            LeaderboardError::Storage(message) => ReportError::Server(message),
        }
    }
}

impl From<tonic::Status> for ReportError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::InvalidArgument => ReportError::Rejected(status.message().to_string()),
            tonic::Code::Unavailable => ReportError::Connect(status.message().to_string()),
            _ => ReportError::Server(status.message().to_string()),
        }
    }
}

impl From<LeaderboardError> for tonic::Status {
    fn from(error: LeaderboardError) -> Self {
        match error {
            LeaderboardError::InvalidSubmission(message) => tonic::Status::invalid_argument(message),
            LeaderboardError::Storage(message) => tonic::Status::internal(message),
        }
    }
}

use std::time::Duration;

use common::leaderboard::{LeaderboardEntry, ReportError, ScoreReporter, ScoreSubmission};
use common::proto::leaderboard_service_client::LeaderboardServiceClient;
use common::proto::{GetLeaderboardRequest, SubmitScoreRequest};
use tonic::transport::{Channel, Endpoint};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Reports to the leaderboard server. The channel connects on first use and
/// reconnects by itself, so an unreachable server only fails individual calls.
#[derive(Clone)]
pub struct GrpcScoreReporter {
    client: LeaderboardServiceClient<Channel>,
}

impl GrpcScoreReporter {
    /// Must be called inside a tokio runtime.
    pub fn connect_lazy(address: &str) -> Result<Self, String> {
        let endpoint = Endpoint::from_shared(address.to_string())
            .map_err(|e| format!("Invalid server address {}: {}", address, e))?
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT);

        Ok(Self {
            client: LeaderboardServiceClient::new(endpoint.connect_lazy()),
        })
    }
}

impl ScoreReporter for GrpcScoreReporter {
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<String, ReportError> {
        let mut client = self.client.clone();
        let response = client
            .submit_score(SubmitScoreRequest::from(submission))
            .await?
            .into_inner();

        if response.success {
            Ok(response.message)
        } else {
            Err(ReportError::Rejected(response.message))
        }
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ReportError> {
        let mut client = self.client.clone();
        let response = client
            .get_leaderboard(GetLeaderboardRequest {})
            .await?
            .into_inner();

        Ok(response.entries.into_iter().map(LeaderboardEntry::from).collect())
    }
}

use tonic::{Request, Response, Status};

use common::leaderboard::{Leaderboard, ScoreStore, ScoreSubmission};
use common::log;
use common::proto::{
    GetLeaderboardRequest, GetLeaderboardResponse, SubmitScoreRequest, SubmitScoreResponse,
    leaderboard_service_server::LeaderboardService,
};

pub struct LeaderboardGrpcService<S: ScoreStore> {
    leaderboard: Leaderboard<S>,
}

impl<S: ScoreStore> LeaderboardGrpcService<S> {
    pub fn new(leaderboard: Leaderboard<S>) -> Self {
        Self { leaderboard }
    }
}

#[tonic::async_trait]
impl<S: ScoreStore> LeaderboardService for LeaderboardGrpcService<S> {
    async fn submit_score(
        &self,
        request: Request<SubmitScoreRequest>,
    ) -> Result<Response<SubmitScoreResponse>, Status> {
        let submission = ScoreSubmission::from(request.into_inner());

        let record = self.leaderboard.submit(submission).map_err(|e| {
            log!("Rejected gRPC score submission: {}", e);
            Status::from(e)
        })?;

        Ok(Response::new(SubmitScoreResponse {
            success: true,
            message: format!("Score {} saved for {}", record.score, record.player_name),
        }))
    }

    async fn get_leaderboard(
        &self,
        _request: Request<GetLeaderboardRequest>,
    ) -> Result<Response<GetLeaderboardResponse>, Status> {
        let entries = self.leaderboard.top()?;

        Ok(Response::new(GetLeaderboardResponse {
            entries: entries.into_iter().map(Into::into).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::InMemoryConfigProvider;
    use common::leaderboard::{ConfigScoreStore, InMemoryScoreStore};

    fn service() -> LeaderboardGrpcService<InMemoryScoreStore> {
        LeaderboardGrpcService::new(Leaderboard::new(InMemoryScoreStore::new()))
    }

    fn submit_request(name: &str, score: u32) -> Request<SubmitScoreRequest> {
        Request::new(SubmitScoreRequest {
            player_name: name.to_string(),
            score,
            game_duration: 3.0,
        })
    }

    #[tokio::test]
    async fn test_submit_and_get() {
        let service = service();
        let reply = service.submit_score(submit_request("alice", 20)).await.unwrap().into_inner();
        assert!(reply.success);
        service.submit_score(submit_request("bob", 60)).await.unwrap();

        let entries = service
            .get_leaderboard(Request::new(GetLeaderboardRequest {}))
            .await
            .unwrap()
            .into_inner()
            .entries;
        let names: Vec<&str> = entries.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
        assert!(entries[0].created_at_ms > 0);
    }

    #[tokio::test]
    async fn test_blank_name_is_invalid_argument() {
        let status = service().submit_score(submit_request("  ", 20)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let store = ConfigScoreStore::new(InMemoryConfigProvider::with_content("records: 12"));
        let service = LeaderboardGrpcService::new(Leaderboard::new(store));

        let status = service
            .get_leaderboard(Request::new(GetLeaderboardRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}

pub mod proto {
    tonic::include_proto!("leaderboard");
}

pub mod config;
pub mod defaults;
pub mod games;
pub mod leaderboard;
pub mod logger;

mod broadcaster;
mod scheduler;
mod session_rng;

pub mod snake;

pub use broadcaster::{GameBroadcaster, GameOverSummary};
pub use scheduler::{TickControl, TickScheduler};
pub use session_rng::SessionRng;

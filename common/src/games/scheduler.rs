use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Cancellable fixed-period task. The first tick fires one period after `start`;
/// each callback is awaited before the next tick, so ticks never overlap.
pub struct TickScheduler {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Replaces any task that is already running.
    pub fn start<F, Fut>(&mut self, mut on_tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TickControl> + Send + 'static,
    {
        self.stop();

        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;
                if on_tick().await == TickControl::Stop {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    const PERIOD: Duration = Duration::from_millis(150);

    fn counting_scheduler(stop_after: Option<u32>) -> (TickScheduler, Arc<AtomicU32>) {
        let counter = Arc::new(AtomicU32::new(0));
        let mut scheduler = TickScheduler::new(PERIOD);
        let tick_counter = counter.clone();
        scheduler.start(move || {
            let tick_counter = tick_counter.clone();
            async move {
                let count = tick_counter.fetch_add(1, Ordering::SeqCst) + 1;
                match stop_after {
                    Some(limit) if count >= limit => TickControl::Stop,
                    _ => TickControl::Continue,
                }
            }
        });
        (scheduler, counter)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_fires_after_one_period() {
        let (scheduler, counter) = counting_scheduler(None);

        tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert!(scheduler.is_running());
        assert_eq!(scheduler.period(), PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_future_ticks() {
        let (mut scheduler, counter) = counting_scheduler(None);

        tokio::time::sleep(PERIOD * 2 + Duration::from_millis(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        scheduler.stop();
        assert!(!scheduler.is_running());
        tokio::time::sleep(PERIOD * 10).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_can_end_the_task() {
        let (scheduler, counter) = counting_scheduler(Some(3));

        tokio::time::sleep(PERIOD * 10).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (scheduler, counter) = counting_scheduler(None);
        drop(scheduler);

        tokio::time::sleep(PERIOD * 5).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Source of the pauses that fake typing.
#[async_trait(?Send)]
pub trait Scheduler {
    async fn sleep(&self, duration: Duration);
}

/// Real timers: tokio on native targets, browser timeouts on the web.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClockScheduler;

#[async_trait(?Send)]
impl Scheduler for WallClockScheduler {
    async fn sleep(&self, duration: Duration) {
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
    }
}

/// Returns at once and remembers every requested pause.
#[derive(Clone, Debug, Default)]
pub struct ImmediateScheduler {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl Scheduler for ImmediateScheduler {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut log) = self.requested.lock() {
            log.push(duration);
        }
    }
}

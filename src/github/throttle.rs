// src/github/throttle.rs
// =============================================================================
// A one-slot request gate: at least `min_interval` between outbound calls.
//
// Anonymous GitHub API access has a small hourly quota, so every request
// in this crate passes through `wait_if_needed()` right before it is sent.
//
// The throttle is an ordinary value shared through an Arc. The last-call
// timestamp sits behind an async mutex that stays locked while we sleep,
// which means two callers can never both decide "enough time has passed"
// at the same moment. They queue on the lock instead.
// =============================================================================

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Default spacing between two outbound requests.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Enforces a minimum wall-clock interval between outbound HTTP calls.
#[derive(Debug)]
pub struct RequestThrottle {
    min_interval: Duration,
    // None until the first request has gone out
    last_call: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Suspends the caller until `min_interval` has passed since the previous
    /// call returned, then records the current time as the new last call.
    ///
    /// The first call on a fresh throttle returns immediately.
    pub async fn wait_if_needed(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let remaining = self.min_interval - elapsed;
                tracing::trace!(?remaining, "throttling outbound request");
                sleep(remaining).await;
            }
        }

        *last_call = Some(Instant::now());
    }
}

impl Default for RequestThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // start_paused = true gives us a virtual clock: sleeps advance it
    // instantly and nothing else moves it, so the timings below are exact.

    #[tokio::test(start_paused = true)]
    async fn test_first_call_does_not_wait() {
        let throttle = RequestThrottle::default();
        let start = Instant::now();
        throttle.wait_if_needed().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_calls_wait_for_remaining_interval() {
        let throttle = RequestThrottle::new(Duration::from_secs(1));
        throttle.wait_if_needed().await;

        tokio::time::advance(Duration::from_millis(300)).await;

        let before = Instant::now();
        throttle.wait_if_needed().await;
        assert!(before.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_do_not_wait() {
        let throttle = RequestThrottle::new(Duration::from_secs(1));
        throttle.wait_if_needed().await;

        tokio::time::advance(Duration::from_secs(2)).await;

        let before = Instant::now();
        throttle.wait_if_needed().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_throttle_serializes_callers() {
        let throttle = Arc::new(RequestThrottle::new(Duration::from_secs(1)));
        let start = Instant::now();

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let throttle = Arc::clone(&throttle);
                tokio::spawn(async move { throttle.wait_if_needed().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        // First call is free, the next two pay one interval each
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}

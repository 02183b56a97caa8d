//! Timer wrapper
//!
//! One-shot delays on top of `setTimeout`, through `gloo-timers` futures.

use authview::Timer;
use std::time::Duration;

/// Browser implementation of the shell's delay source.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait::async_trait(?Send)]
impl Timer for BrowserTimer {
    /// Resolve after `duration`.
    ///
    /// # Arguments
    /// * `duration` - delay; rounded down to whole milliseconds by `setTimeout`
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

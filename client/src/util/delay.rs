//! Simulated request latency for submit flows that have no backend yet.

use std::time::Duration;

pub const LOGIN_LATENCY: Duration = Duration::from_millis(1000);
pub const REGISTER_LATENCY: Duration = Duration::from_millis(2000);
pub const USER_SAVE_LATENCY: Duration = Duration::from_millis(1000);
pub const REFRESH_LATENCY: Duration = Duration::from_millis(1000);

/// Sleep for `duration` in the browser; resolve immediately elsewhere.
pub async fn simulated_latency(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}

use gloo_timers::future::TimeoutFuture;

use crate::core::error::Result;

/// Stand-in for a backend call: waits `delay_ms` and always succeeds.
pub async fn simulate_request(delay_ms: u32) -> Result<()> {
    log::debug!("Simulating request ({} ms)", delay_ms);
    TimeoutFuture::new(delay_ms).await;
    Ok(())
}

//! Sleep that works in the browser and on native targets.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(millis: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(millis as u64)).await;
}

//! Platform seams for timers and task spawning.
//! The browser build uses gloo timers, native builds use tokio.

use futures_util::future::LocalBoxFuture;
use std::future::Future;
use std::time::Duration;

/// Runs `!Send` futures on the UI thread's executor.
pub trait Spawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawner backed by a tokio `LocalSet`; the caller must be inside one.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLocalSpawner;

#[cfg(not(target_arch = "wasm32"))]
impl Spawner for TokioLocalSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Resolve `fut`, or `None` once `limit` has elapsed.
#[cfg(target_arch = "wasm32")]
pub async fn with_timeout<F: Future>(limit: Duration, fut: F) -> Option<F::Output> {
    use futures_util::future::{select, Either};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(limit));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn with_timeout<F: Future>(limit: Duration, fut: F) -> Option<F::Output> {
    tokio::time::timeout(limit, fut).await.ok()
}

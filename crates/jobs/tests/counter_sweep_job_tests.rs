use sitegate_application::ports::CounterStore;
use sitegate_jobs::{CounterSweepJob, JobRunner};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCounterStore;

#[tokio::test(start_paused = true)]
async fn test_sweep_runs_on_interval() {
    let store = Arc::new(MockCounterStore::new());
    let job = Arc::new(CounterSweepJob::new(store.clone()).with_interval(30));

    let _handle = job.start().await;

    sleep(Duration::from_secs(10)).await;
    assert_eq!(store.purge_calls(), 0);

    sleep(Duration::from_secs(25)).await;
    assert_eq!(store.purge_calls(), 1);

    sleep(Duration::from_secs(60)).await;
    assert_eq!(store.purge_calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_removes_expired_counters() {
    let store = Arc::new(MockCounterStore::new());
    store.increment("ratelimit:1:10.0.0.1").await.unwrap();
    store
        .expire("ratelimit:1:10.0.0.1", Duration::from_secs(60))
        .await
        .unwrap();
    store.increment("ratelimit:1:10.0.0.2").await.unwrap();
    store
        .expire("ratelimit:1:10.0.0.2", Duration::from_secs(300))
        .await
        .unwrap();

    let job = Arc::new(CounterSweepJob::new(store.clone()).with_interval(90));
    let _handle = job.start().await;

    sleep(Duration::from_secs(91)).await;

    assert_eq!(store.purge_calls(), 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_survives_store_errors() {
    let store = Arc::new(MockCounterStore::new());
    store.set_should_fail(true);

    let job = Arc::new(CounterSweepJob::new(store.clone()).with_interval(5));
    let handle = job.start().await;

    sleep(Duration::from_secs(16)).await;

    assert_eq!(store.purge_calls(), 3);
    assert!(!handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_stops_job() {
    let store = Arc::new(MockCounterStore::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        CounterSweepJob::new(store.clone())
            .with_interval(5)
            .with_cancellation(token.clone()),
    );

    let handle = job.start().await;
    sleep(Duration::from_secs(6)).await;
    token.cancel();
    handle.await.unwrap();

    sleep(Duration::from_secs(60)).await;
    assert_eq!(store.purge_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_is_clamped() {
    let store = Arc::new(MockCounterStore::new());
    let job = Arc::new(CounterSweepJob::new(store.clone()).with_interval(0));

    let _handle = job.start().await;
    sleep(Duration::from_millis(2_500)).await;

    assert_eq!(store.purge_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_runner_starts_registered_jobs() {
    let store = Arc::new(MockCounterStore::new());
    let token = CancellationToken::new();

    let handles = JobRunner::new()
        .with_counter_sweep(
            CounterSweepJob::new(store.clone())
                .with_interval(10)
                .with_cancellation(token.clone()),
        )
        .start()
        .await;

    assert_eq!(handles.len(), 1);
    sleep(Duration::from_secs(11)).await;
    assert_eq!(store.purge_calls(), 1);

    token.cancel();
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_empty_runner_starts_nothing() {
    let handles = JobRunner::default().start().await;

    assert!(handles.is_empty());
}

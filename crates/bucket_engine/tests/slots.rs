use std::time::Duration;

use bucket_engine::SlotPool;

#[tokio::test]
async fn slots_are_counted_on_acquire_and_release() {
    let pool = SlotPool::new(3);
    assert_eq!(pool.capacity(), 3);
    assert_eq!(pool.available(), 3);

    let first = pool.acquire().await.unwrap();
    let second = pool.acquire().await.unwrap();
    assert_eq!(pool.in_use(), 2);
    assert_eq!(pool.acquired(), 2);
    assert_eq!(pool.released(), 0);

    drop(first);
    assert_eq!(pool.available(), 2);
    assert_eq!(pool.released(), 1);

    drop(second);
    assert_eq!(pool.in_use(), 0);
    assert_eq!(pool.acquired(), pool.released());
}

#[tokio::test]
async fn exhausted_pool_blocks_until_release() {
    let pool = SlotPool::new(1);
    let held = pool.acquire().await.unwrap();

    let blocked = tokio::time::timeout(Duration::from_millis(50), pool.acquire()).await;
    assert!(blocked.is_err(), "second slot must wait");

    drop(held);
    let slot = tokio::time::timeout(Duration::from_millis(500), pool.acquire())
        .await
        .expect("slot freed")
        .unwrap();
    drop(slot);
    assert_eq!(pool.acquired(), 2);
    assert_eq!(pool.released(), 2);
}

#[tokio::test]
async fn slot_is_released_when_task_panics() {
    let pool = std::sync::Arc::new(SlotPool::new(1));
    let slot = pool.acquire().await.unwrap();

    let handle = tokio::spawn(async move {
        let _slot = slot;
        panic!("probe blew up");
    });
    assert!(handle.await.is_err());

    assert_eq!(pool.available(), 1);
    assert_eq!(pool.released(), 1);
}

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use SyncQueueMini::core::buildcore::WorkQueueSystem;
use SyncQueueMini::core::log::State;
use SyncQueueMini::core::sync::SyncQueue;

#[test]
fn test_fifo_order_preserved() {
    let queue = SyncQueue::new();
    assert!(queue.push(1));
    assert!(queue.push(2));
    queue.stop();

    assert_eq!(queue.get(), Some(1));
    assert_eq!(queue.get(), Some(2));
    assert_eq!(queue.get(), None);
    // Complete is terminal: get keeps returning None.
    assert_eq!(queue.get(), None);
}

#[test]
fn test_stop_on_empty_queue() {
    let queue = SyncQueue::<u32>::new();
    queue.stop();

    assert_eq!(queue.get(), None);
    assert!(queue.is_complete());
    // join on an already-empty closed queue must not block
    queue.join();
}

#[test]
fn test_push_rejected_after_stop() {
    let queue = SyncQueue::new();
    assert!(queue.push(1));
    queue.stop();
    assert!(!queue.push(1));

    // Rejection does not disturb the backlog
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.get(), Some(1));
    assert_eq!(queue.get(), None);
}

#[test]
fn test_push_rejected_after_join() {
    let queue = SyncQueue::<u32>::new();
    queue.join();
    assert!(!queue.push(7));
    assert!(queue.is_complete());
}

#[test]
fn test_backlog_survives_stop() {
    let queue = SyncQueue::new();
    for i in 0..5 {
        assert!(queue.push(i));
    }
    queue.stop();

    for i in 0..5 {
        assert_eq!(queue.get(), Some(i));
    }
    assert_eq!(queue.get(), None);
}

#[test]
fn test_is_complete_requires_both_conditions() {
    let queue = SyncQueue::new();
    assert!(!queue.is_complete()); // open and empty

    assert!(queue.push(1));
    queue.stop();
    assert!(!queue.is_complete()); // closing but not drained

    assert_eq!(queue.get(), Some(1));
    assert!(queue.is_complete()); // closing and drained
}

#[test]
fn test_blocked_get_wakes_on_push() {
    let queue = Arc::new(SyncQueue::new());

    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || queue.get())
    };

    // Give the consumer time to block on the empty queue.
    thread::sleep(Duration::from_millis(50));
    assert!(queue.push(7));

    assert_eq!(consumer.join().unwrap(), Some(7));
}

#[test]
fn test_blocked_get_wakes_on_stop() {
    let queue = Arc::new(SyncQueue::<u32>::new());

    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || queue.get())
    };

    thread::sleep(Duration::from_millis(50));
    queue.stop();

    assert_eq!(consumer.join().unwrap(), None);
}

#[test]
fn test_join_blocks_until_drained() {
    let queue = Arc::new(SyncQueue::new());
    for i in 0..5 {
        assert!(queue.push(i));
    }

    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || {
            let mut seen = 0;
            while queue.get().is_some() {
                seen += 1;
                thread::sleep(Duration::from_millis(10));
            }
            seen
        })
    };

    queue.join();
    // join returned, so every item must already have been dequeued
    assert!(queue.is_empty());
    assert!(queue.is_complete());
    assert_eq!(consumer.join().unwrap(), 5);
}

#[test]
fn test_mpmc_no_loss_no_duplication() {
    const PRODUCERS: i64 = 4;
    const ITEMS_PER_PRODUCER: i64 = 250;
    const CONSUMERS: usize = 3;

    let queue = Arc::new(SyncQueue::new());

    let mut producers = Vec::new();
    for p in 0..PRODUCERS {
        let queue = queue.clone();
        producers.push(thread::spawn(move || {
            for i in 0..ITEMS_PER_PRODUCER {
                assert!(queue.push(p * ITEMS_PER_PRODUCER + i));
            }
        }));
    }

    let mut consumers = Vec::new();
    for _ in 0..CONSUMERS {
        let queue = queue.clone();
        consumers.push(thread::spawn(move || {
            let mut received = Vec::new();
            while let Some(item) = queue.get() {
                received.push(item);
            }
            received
        }));
    }

    for handle in producers {
        handle.join().unwrap();
    }
    // All producers done: close the queue and wait for the drain.
    queue.join();

    let mut all: Vec<i64> = Vec::new();
    for handle in consumers {
        all.extend(handle.join().unwrap());
    }

    assert_eq!(all.len(), (PRODUCERS * ITEMS_PER_PRODUCER) as usize);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), (PRODUCERS * ITEMS_PER_PRODUCER) as usize);
}

#[test]
fn test_per_producer_order_preserved() {
    // Single consumer: items must come out in exactly the push order.
    let queue = Arc::new(SyncQueue::new());

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for i in 0..100 {
                assert!(queue.push(i));
            }
            queue.join();
        })
    };

    let mut received = Vec::new();
    while let Some(item) = queue.get() {
        received.push(item);
    }
    producer.join().unwrap();

    assert_eq!(received, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_system_logs_push_and_get_outcomes() {
    let system = WorkQueueSystem::new("testq".to_string());
    assert!(system.push("item1".to_string()));
    system.stop();
    assert!(!system.push("item2".to_string()));

    assert_eq!(system.get(), Some("item1".to_string()));
    assert_eq!(system.get(), None);

    let logs = system.logs();
    let states: Vec<State> = logs.iter().map(|e| e.state.clone()).collect();
    assert_eq!(
        states,
        vec![
            State::Accepted,
            State::Closing,
            State::Rejected,
            State::Delivered,
            State::Drained,
        ]
    );
    assert!(logs.iter().all(|e| e.queue_label == "testq"));
}

#[test]
fn test_system_join_drains_through_consumer() {
    let system = Arc::new(WorkQueueSystem::new("joinq".to_string()));
    for i in 0..3 {
        assert!(system.push(i));
    }

    let consumer = {
        let system = system.clone();
        thread::spawn(move || {
            let mut seen = 0;
            while system.get().is_some() {
                seen += 1;
            }
            seen
        })
    };

    system.join();
    let (len, empty) = system.queue_state();
    assert_eq!(len, 0);
    assert!(empty);
    assert_eq!(consumer.join().unwrap(), 3);
}

//! Concurrent access tests
//!
//! Producers, consumers, and the control path all contend on the queue's
//! single lock; these tests check that counters and contents stay
//! consistent under that contention.

#[cfg(test)]
mod tests {
    use crate::queue::api::{FifoError, FifoQueue, Queue};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_producers_preserve_every_item() {
        let queue: Arc<FifoQueue<u64>> = Arc::new(FifoQueue::new(None).unwrap());
        let producers: usize = 4;
        let per_producer: usize = 250;

        let handles: Vec<_> = (0..producers)
            .map(|p| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..per_producer {
                        queue.put((p * per_producer + i) as u64).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let total = producers * per_producer;
        assert_eq!(queue.len(), total);
        assert_eq!(queue.stats().messages_received, total as u64);

        // Every item put must come out exactly once
        let mut seen = HashSet::new();
        while let Some(item) = queue.get().unwrap() {
            assert!(seen.insert(item), "duplicate item {}", item);
        }
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_concurrent_producer_and_consumer() {
        let queue: Arc<FifoQueue<u64>> = Arc::new(FifoQueue::new(None).unwrap());
        let total = 1000u64;

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..total {
                    queue.put(i).unwrap();
                }
            })
        };

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut received = Vec::new();
                while (received.len() as u64) < total {
                    match queue.get().unwrap() {
                        Some(item) => received.push(item),
                        // Empty is a normal poll outcome; spin and retry
                        None => thread::yield_now(),
                    }
                }
                received
            })
        };

        producer.join().unwrap();
        let received = consumer.join().unwrap();

        // Single consumer sees the exact production order
        let expected: Vec<u64> = (0..total).collect();
        assert_eq!(received, expected);

        let stats = queue.stats();
        assert_eq!(stats.messages_received, total);
        assert_eq!(stats.messages_sent, total);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_sent_never_exceeds_received_under_contention() {
        let queue: Arc<FifoQueue<u64>> = Arc::new(FifoQueue::new(None).unwrap());

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..500 {
                    if queue.put(i).is_err() {
                        break; // closed underneath us
                    }
                }
            })
        };

        let observer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for _ in 0..200 {
                    let stats = queue.stats();
                    assert!(stats.messages_sent <= stats.messages_received);
                    let _ = queue.get();
                }
            })
        };

        producer.join().unwrap();
        observer.join().unwrap();

        let stats = queue.stats();
        assert!(stats.messages_sent <= stats.messages_received);
    }

    #[test]
    fn test_close_during_traffic_is_clean() {
        let queue: Arc<FifoQueue<u64>> = Arc::new(FifoQueue::new(None).unwrap());

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut accepted = 0u64;
                for i in 0..10_000 {
                    match queue.put(i) {
                        Ok(()) => accepted += 1,
                        Err(FifoError::Closed) => break,
                        Err(err) => panic!("unexpected error: {:?}", err),
                    }
                }
                accepted
            })
        };

        let closer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                thread::yield_now();
                queue.close().unwrap();
            })
        };

        let accepted = producer.join().unwrap();
        closer.join().unwrap();

        assert!(queue.closed());
        // Only successful puts were counted
        assert_eq!(queue.stats().messages_received, accepted);
    }
}

//! Lock-free latest-wins handoff between one producer and one consumer.
//!
//! [`LatestSlot`] holds at most one pending value. Publishing replaces any
//! unconsumed value (overwrite, never queue), taking clears the slot. Both
//! operations are single pointer-wide atomic exchanges on a boxed payload,
//! so the producer never blocks on the consumer and vice versa. Intermediate
//! values between two drains are dropped; only the newest reaches the
//! consumer.

use crossbeam_utils::atomic::AtomicCell;

/// Single-slot overwrite buffer bridging an asynchronous producer and a
/// periodic consumer.
///
/// Safe under exactly one concurrent publisher and one concurrent consumer
/// with no additional synchronization. Memory stays bounded at one value
/// regardless of the publish/take rate ratio.
pub struct LatestSlot<T> {
    cell: AtomicCell<Option<Box<T>>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            cell: AtomicCell::new(None),
        }
    }

    /// Replaces the pending value with `value`, dropping whatever was still
    /// unconsumed. Non-blocking, constant time.
    pub fn publish(&self, value: T) {
        let _previous = self.cell.swap(Some(Box::new(value)));
    }

    /// Retrieves and clears the pending value, or `None` when nothing was
    /// published since the last take. Non-blocking, constant time.
    pub fn take(&self) -> Option<T> {
        self.cell.take().map(|boxed| *boxed)
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn take_clears_the_slot() {
        let slot = LatestSlot::new();
        slot.publish(7u32);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None, "second take must observe an empty slot");
    }

    #[test]
    fn publish_after_take_is_visible() {
        let slot = LatestSlot::new();
        slot.publish(1u32);
        assert_eq!(slot.take(), Some(1));
        slot.publish(2);
        assert_eq!(slot.take(), Some(2));
    }

    #[test]
    fn newer_publish_overwrites_unconsumed_value() {
        let slot = LatestSlot::new();
        slot.publish(1u32);
        slot.publish(2);
        assert_eq!(slot.take(), Some(2), "older value must be dropped, not queued");
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn concurrent_publisher_and_consumer_observe_monotonic_values() {
        let slot = Arc::new(LatestSlot::new());
        let producer_slot = Arc::clone(&slot);
        let producer = thread::spawn(move || {
            for i in 1..=1000u64 {
                producer_slot.publish(i);
            }
        });

        // The final publish always stays pending until taken, so observing
        // 1000 is guaranteed to terminate the loop.
        let mut last_seen = 0u64;
        while last_seen != 1000 {
            if let Some(value) = slot.take() {
                assert!(
                    value > last_seen,
                    "takes must observe publishes in order: got {value} after {last_seen}"
                );
                last_seen = value;
            }
        }
        producer.join().expect("producer thread panicked");
        assert_eq!(slot.take(), None);
    }
}

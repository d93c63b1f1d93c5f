//! Snapshot subscription for frontends.
//!
//! The engine itself is synchronous; this module fans finished snapshots
//! out to any number of consumers over a broadcast channel. A subscriber
//! sees a lazy, unbounded sequence of [`TimerSnapshot`] values and can be
//! dropped and re-created at any time. A slow consumer that falls behind
//! the channel buffer skips ahead to the oldest retained snapshot rather
//! than terminating.

use tokio::sync::broadcast;

use crate::timer::TimerSnapshot;

/// Broadcast buffer size used by [`SnapshotPublisher::default`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Fan-out publisher for engine snapshots.
pub struct SnapshotPublisher {
    tx: broadcast::Sender<TimerSnapshot>,
}

impl SnapshotPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a snapshot to all current subscribers.
    ///
    /// A send with no live subscribers is not an error; the snapshot is
    /// simply dropped.
    pub fn publish(&self, snapshot: TimerSnapshot) {
        let _ = self.tx.send(snapshot);
    }

    /// Open a new snapshot stream starting at the next published value.
    pub fn subscribe(&self) -> SnapshotStream {
        SnapshotStream {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SnapshotPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// One subscriber's view of the snapshot sequence.
pub struct SnapshotStream {
    rx: broadcast::Receiver<TimerSnapshot>,
}

impl SnapshotStream {
    /// Wait for the next snapshot.
    ///
    /// Returns `None` once the publisher has been dropped and the buffer
    /// is drained - the session is over.
    pub async fn next(&mut self) -> Option<TimerSnapshot> {
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "snapshot subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerConfig, TimerEngine};

    fn snapshot() -> TimerSnapshot {
        TimerEngine::new(TimerConfig::pomodoro()).snapshot()
    }

    #[tokio::test]
    async fn subscriber_receives_published_snapshots() {
        let publisher = SnapshotPublisher::default();
        let mut stream = publisher.subscribe();

        publisher.publish(snapshot());
        let received = stream.next().await.unwrap();
        assert_eq!(received.config_id, "pomodoro");
    }

    #[tokio::test]
    async fn multiple_subscribers_see_the_same_sequence() {
        let publisher = SnapshotPublisher::default();
        let mut a = publisher.subscribe();
        let mut b = publisher.subscribe();

        publisher.publish(snapshot());
        publisher.publish(snapshot());

        for stream in [&mut a, &mut b] {
            assert!(stream.next().await.is_some());
            assert!(stream.next().await.is_some());
        }
    }

    #[tokio::test]
    async fn stream_is_restartable() {
        let publisher = SnapshotPublisher::default();

        let mut first = publisher.subscribe();
        publisher.publish(snapshot());
        assert!(first.next().await.is_some());
        drop(first);

        // A fresh subscription picks up from the next publish.
        let mut second = publisher.subscribe();
        publisher.publish(snapshot());
        assert!(second.next().await.is_some());
    }

    #[tokio::test]
    async fn stream_ends_when_publisher_drops() {
        let publisher = SnapshotPublisher::default();
        let mut stream = publisher.subscribe();
        drop(publisher);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn lagged_subscriber_skips_ahead_instead_of_failing() {
        let publisher = SnapshotPublisher::new(2);
        let mut stream = publisher.subscribe();

        for _ in 0..5 {
            publisher.publish(snapshot());
        }
        // Buffer holds the 2 newest; the stream recovers and yields them.
        assert!(stream.next().await.is_some());
        assert!(stream.next().await.is_some());
    }
}

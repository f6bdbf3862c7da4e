//! Snapshot pub/sub: the store's live-read mechanism.
//!
//! Consumers subscribe and receive the **full current ordered item list**
//! on every change, not individual deltas. This mirrors the remote
//! collaborator's push model (each remote change re-delivers the whole
//! record set) so both store variants read the same way.

use std::sync::{Mutex, mpsc};
use std::time::Duration;

/// A live-read subscription.
///
/// Each subscription gets every published snapshot. Designed for
/// single-threaded consumption; a UI loop typically alternates between
/// `try_recv` and its own event handling.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: mpsc::Receiver<T>,
}

impl<T> Subscription<T> {
    pub fn new(receiver: mpsc::Receiver<T>) -> Self {
        Self { receiver }
    }

    /// Block until the next snapshot is available.
    pub fn recv(&self) -> Result<T, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a snapshot without blocking.
    pub fn try_recv(&self) -> Result<T, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain to the most recent snapshot, if any arrived.
    ///
    /// Intermediate snapshots are superseded by later ones (each push is the
    /// full state), so consumers that fell behind only care about the last.
    pub fn latest(&self) -> Option<T> {
        let mut latest = None;
        while let Ok(snapshot) = self.receiver.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }
}

/// Fan-out publisher for state snapshots.
///
/// - No IO / no async
/// - Best-effort broadcast; dead subscribers are dropped on publish
/// - Publishing with no subscribers is a no-op
#[derive(Debug)]
pub struct SnapshotPublisher<T> {
    subscribers: Mutex<Vec<mpsc::Sender<T>>>,
}

impl<T> SnapshotPublisher<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for SnapshotPublisher<T> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> SnapshotPublisher<T> {
    /// Deliver `snapshot` to every live subscriber.
    pub fn publish(&self, snapshot: T) {
        let mut subs = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_every_snapshot() {
        let publisher = SnapshotPublisher::new();
        let a = publisher.subscribe();
        let b = publisher.subscribe();

        publisher.publish(vec![1]);
        publisher.publish(vec![1, 2]);

        assert_eq!(a.try_recv().unwrap(), vec![1]);
        assert_eq!(a.try_recv().unwrap(), vec![1, 2]);
        assert_eq!(b.try_recv().unwrap(), vec![1]);
        assert_eq!(b.try_recv().unwrap(), vec![1, 2]);
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let publisher = SnapshotPublisher::new();
        drop(publisher.subscribe());
        let live = publisher.subscribe();

        publisher.publish(7);
        assert_eq!(live.try_recv().unwrap(), 7);
    }

    #[test]
    fn latest_drains_to_the_most_recent_snapshot() {
        let publisher = SnapshotPublisher::new();
        let sub = publisher.subscribe();

        publisher.publish("stale");
        publisher.publish("current");

        assert_eq!(sub.latest(), Some("current"));
        assert_eq!(sub.latest(), None);
    }
}

//! Bounded multi-producer, single-consumer intent queue.
//!
//! Backed by `tokio::sync::mpsc`, used without a runtime: producers call
//! `try_send`, the owner thread calls `try_recv`. Neither side blocks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};

use super::intents::Intent;
use crate::error::QueueError;

/// Creates a queue holding at most `capacity` undelivered intents.
///
/// A capacity of zero is raised to one.
pub fn intent_queue(capacity: usize) -> (IntentSender, IntentReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let dropped = Arc::new(AtomicU64::new(0));
    (
        IntentSender {
            tx,
            dropped: Arc::clone(&dropped),
        },
        IntentReceiver { rx, dropped },
    )
}

/// Producer handle. Cheap to clone and safe to move into OS callbacks.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::Sender<Intent>,
    dropped: Arc<AtomicU64>,
}

impl IntentSender {
    /// Enqueue an intent without blocking.
    ///
    /// When the queue is full the intent is dropped and counted.
    pub fn send(&self, intent: Intent) -> Result<(), QueueError> {
        match self.tx.try_send(intent) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(intent)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Intent queue full, dropping {}", intent);
                Err(QueueError::Full)
            }
            Err(TrySendError::Closed(_)) => Err(QueueError::Closed),
        }
    }

    /// True once the receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer handle, owned by the thread that owns the overlay state.
#[derive(Debug)]
pub struct IntentReceiver {
    rx: mpsc::Receiver<Intent>,
    dropped: Arc<AtomicU64>,
}

impl IntentReceiver {
    /// Next pending intent, if any.
    pub fn try_next(&mut self) -> Option<Intent> {
        match self.rx.try_recv() {
            Ok(intent) => Some(intent),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Takes the intents already queued when called, in arrival order.
    ///
    /// Intents sent while draining are left for the next call, so a producer
    /// that never pauses cannot keep one drain running.
    pub fn drain(&mut self) -> Vec<Intent> {
        let pending = self.rx.len();
        let mut intents = Vec::with_capacity(pending);
        for _ in 0..pending {
            match self.try_next() {
                Some(intent) => intents.push(intent),
                None => break,
            }
        }
        intents
    }

    /// Number of intents dropped because the queue was full.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

//! Background email queue with fixed-backoff retry.
//!
//! [`EmailQueue::start`] spawns a worker that owns the receiving half of a
//! bounded channel. Handlers call [`EmailQueue::enqueue`], which never
//! waits: a full or closed queue is reported as [`EnqueueError`]. The worker
//! exits once every `EmailQueue` clone has been dropped and the channel is
//! drained.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::mailer::{EmailMessage, Mailer};

/// Default retry delays in seconds (1s, 2s, 4s), followed by a final attempt.
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// Messages buffered before `enqueue` reports [`EnqueueError::Full`].
const QUEUE_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

/// Delays between delivery attempts. A message is attempted
/// `delays.len() + 1` times before it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delays: Vec<Duration>,
}

impl RetryPolicy {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    pub fn max_attempts(&self) -> usize {
        self.delays.len() + 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_DELAYS_SECS.iter().map(|s| Duration::from_secs(*s)).collect())
    }
}

// ---------------------------------------------------------------------------
// EmailQueue
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnqueueError {
    #[error("Email queue is full")]
    Full,

    #[error("Email queue is closed")]
    Closed,
}

/// Cloneable handle for submitting email to the background worker.
#[derive(Clone)]
pub struct EmailQueue {
    sender: mpsc::Sender<EmailMessage>,
}

impl EmailQueue {
    /// Spawn the worker and return the queue handle with its task.
    pub fn start(mailer: Arc<dyn Mailer>, policy: RetryPolicy) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        let worker = EmailWorker { mailer, policy };
        let handle = tokio::spawn(worker.run(receiver));
        (Self { sender }, handle)
    }

    /// Queue a message for delivery without waiting.
    pub fn enqueue(&self, message: EmailMessage) -> Result<(), EnqueueError> {
        self.sender.try_send(message).map_err(|e| {
            let (err, message) = match e {
                mpsc::error::TrySendError::Full(m) => (EnqueueError::Full, m),
                mpsc::error::TrySendError::Closed(m) => (EnqueueError::Closed, m),
            };
            tracing::warn!(
                to = %message.to,
                subject = %message.subject,
                error = %err,
                "Email dropped",
            );
            err
        })
    }
}

// ---------------------------------------------------------------------------
// EmailWorker
// ---------------------------------------------------------------------------

struct EmailWorker {
    mailer: Arc<dyn Mailer>,
    policy: RetryPolicy,
}

impl EmailWorker {
    async fn run(self, mut receiver: mpsc::Receiver<EmailMessage>) {
        while let Some(message) = receiver.recv().await {
            self.deliver(&message).await;
        }
        tracing::info!("Email queue closed, worker shutting down");
    }

    /// Attempt delivery, sleeping between failures per the policy.
    async fn deliver(&self, message: &EmailMessage) {
        for (attempt, delay) in self.policy.delays.iter().enumerate() {
            match self.mailer.send(message).await {
                Ok(()) => return,
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        to = %message.to,
                        error = %e,
                        "Email delivery attempt failed, retrying"
                    );
                    tokio::time::sleep(*delay).await;
                }
            }
        }

        // Final attempt after the last backoff.
        if let Err(e) = self.mailer.send(message).await {
            tracing::error!(
                to = %message.to,
                subject = %message.subject,
                attempts = self.policy.max_attempts(),
                error = %e,
                "Email delivery failed after all retries"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

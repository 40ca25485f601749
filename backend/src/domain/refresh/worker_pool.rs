//! Bounded worker pool with keyed de-duplication.
//!
//! Jobs are queued on a bounded channel and executed by a fixed set of
//! workers. Submissions never block: a duplicate key, a full queue or a
//! closed pool all drop the job and tell the caller why, so the caller can
//! release any lock it took before submitting.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::error;

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

struct KeyedJob {
    key: String,
    job: Job,
}

/// Outcome of a [`WorkerPool::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The job was queued for execution.
    Scheduled,
    /// A job with the same key is already queued or running.
    AlreadyScheduled,
    /// The job queue is at capacity.
    QueueFull,
    /// The pool is closed and no longer accepts jobs.
    Closed,
}

/// Fixed-size pool executing keyed jobs from a bounded queue.
pub struct WorkerPool {
    sender: Mutex<Option<mpsc::Sender<KeyedJob>>>,
    scheduled: Arc<Mutex<HashSet<String>>>,
    workers: tokio::sync::Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Spawn `max_workers` workers sharing a queue of capacity `max_pool`.
    ///
    /// Both bounds are clamped to at least one.
    pub fn new(max_workers: usize, max_pool: usize) -> Self {
        let (sender, receiver) = mpsc::channel(max_pool.max(1));
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let scheduled = Arc::new(Mutex::new(HashSet::new()));

        let workers = (0..max_workers.max(1))
            .map(|_| {
                tokio::spawn(Self::worker(
                    Arc::clone(&receiver),
                    Arc::clone(&scheduled),
                ))
            })
            .collect();

        Self {
            sender: Mutex::new(Some(sender)),
            scheduled,
            workers: tokio::sync::Mutex::new(workers),
        }
    }

    async fn worker(
        receiver: Arc<tokio::sync::Mutex<mpsc::Receiver<KeyedJob>>>,
        scheduled: Arc<Mutex<HashSet<String>>>,
    ) {
        loop {
            // Scope the guard so other workers can receive while this job runs.
            let next = { receiver.lock().await.recv().await };
            let Some(KeyedJob { key, job }) = next else {
                break;
            };
            job.await;
            scheduled
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key);
        }
    }

    /// Queue a job under `key` without blocking.
    ///
    /// The key stays reserved until the job has finished running, so repeat
    /// submissions while a job is queued or in flight report
    /// [`SubmitOutcome::AlreadyScheduled`].
    pub fn submit<F>(&self, key: impl Into<String>, job: F) -> SubmitOutcome
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let key = key.into();
        let sender = {
            let guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
            match guard.as_ref() {
                Some(sender) => sender.clone(),
                None => return SubmitOutcome::Closed,
            }
        };

        {
            let mut keys = self
                .scheduled
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if !keys.insert(key.clone()) {
                return SubmitOutcome::AlreadyScheduled;
            }
        }

        match sender.try_send(KeyedJob {
            key: key.clone(),
            job: Box::pin(job),
        }) {
            Ok(()) => SubmitOutcome::Scheduled,
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.release_key(&key);
                SubmitOutcome::QueueFull
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.release_key(&key);
                SubmitOutcome::Closed
            }
        }
    }

    fn release_key(&self, key: &str) {
        self.scheduled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    /// Stop accepting jobs and wait until queued and running jobs finish.
    ///
    /// Safe to call more than once; later calls return once the first drain
    /// completes.
    pub async fn close(&self) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(sender);

        let handles = {
            let mut guard = self.workers.lock().await;
            std::mem::take(&mut *guard)
        };
        for handle in handles {
            if let Err(join_error) = handle.await {
                error!(%join_error, "refresh worker terminated abnormally");
            }
        }
    }
}

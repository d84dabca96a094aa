use std::sync::RwLock;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::handler::Handler;

/// What travels through the channel: work, or a flush barrier.
enum Message<T> {
    Item(T),
    Flush(oneshot::Sender<()>),
}

/// A bounded FIFO queue drained by a single background task.
///
/// Must be created inside a tokio runtime. Producers share the pipeline by
/// reference (or behind an `Arc`); the receiving side never leaves the
/// worker task.
pub struct Pipeline<T> {
    name: String,
    capacity: usize,
    sender: RwLock<Option<mpsc::Sender<Message<T>>>>,
    worker: Mutex<Option<JoinHandle<u64>>>,
}

impl<T: Send + 'static> Pipeline<T> {
    /// Start the worker task and return the producer handle.
    pub fn spawn<H>(config: PipelineConfig, handler: H) -> Self
    where
        H: Handler<T>,
    {
        let capacity = config.capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        let worker = tokio::spawn(run_worker(config.name.clone(), rx, handler));

        debug!(pipeline = %config.name, capacity, "pipeline started");

        Self {
            name: config.name,
            capacity,
            sender: RwLock::new(Some(tx)),
            worker: Mutex::new(Some(worker)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enqueue an item, waiting while the buffer is full.
    pub async fn submit(&self, item: T) -> PipelineResult<()> {
        let sender = self.sender()?;
        sender
            .send(Message::Item(item))
            .await
            .map_err(|_| self.closed())
    }

    /// Resolve once every item submitted before this call has been handled.
    pub async fn flush(&self) -> PipelineResult<()> {
        let sender = self.sender()?;
        let (ack, done) = oneshot::channel();
        sender
            .send(Message::Flush(ack))
            .await
            .map_err(|_| self.closed())?;
        drop(sender);
        done.await.map_err(|_| self.closed())
    }

    /// Stop accepting items and wait for the worker to drain the queue.
    ///
    /// Returns the number of items the worker handled over its lifetime.
    /// Calling this more than once is harmless; later calls return `0`.
    pub async fn close(&self) -> PipelineResult<u64> {
        let sender = {
            let mut guard = self
                .sender
                .write()
                .map_err(|e| PipelineError::LockPoisoned(e.to_string()))?;
            guard.take()
        };
        // The worker exits once the last sender clone is gone.
        drop(sender);

        let worker = self.worker.lock().await.take();
        match worker {
            Some(handle) => handle.await.map_err(|e| PipelineError::WorkerFailed {
                pipeline: self.name.clone(),
                reason: e.to_string(),
            }),
            None => Ok(0),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender
            .read()
            .map(|sender| sender.is_none())
            .unwrap_or(true)
    }

    fn sender(&self) -> PipelineResult<mpsc::Sender<Message<T>>> {
        let guard = self
            .sender
            .read()
            .map_err(|e| PipelineError::LockPoisoned(e.to_string()))?;
        guard.clone().ok_or_else(|| self.closed())
    }

    fn closed(&self) -> PipelineError {
        PipelineError::Closed {
            pipeline: self.name.clone(),
        }
    }
}

async fn run_worker<T, H>(name: String, mut rx: mpsc::Receiver<Message<T>>, mut handler: H) -> u64
where
    T: Send + 'static,
    H: Handler<T>,
{
    let mut processed = 0u64;

    while let Some(message) = rx.recv().await {
        match message {
            Message::Item(item) => {
                if let Err(err) = handler.handle(item).await {
                    warn!(pipeline = %name, error = %err, "failed to process item");
                }
                processed += 1;
            }
            Message::Flush(ack) => {
                // The flusher may have given up waiting.
                let _ = ack.send(());
            }
        }
    }

    handler.finish().await;
    info!(pipeline = %name, processed, "worker stopped");
    processed
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use microblog_pipeline::{FnHandler, Handler, Pipeline, PipelineConfig, PipelineError};
use tokio::sync::Semaphore;
use tokio::time::timeout;

/// Records every item after waiting for a permit, so tests can stall it.
struct GatedRecorder {
    gate: Arc<Semaphore>,
    seen: Arc<Mutex<Vec<u32>>>,
    finished: Arc<Mutex<bool>>,
}

#[async_trait]
impl Handler<u32> for GatedRecorder {
    type Error = String;

    async fn handle(&mut self, item: u32) -> Result<(), String> {
        let permit = self.gate.acquire().await.map_err(|e| e.to_string())?;
        permit.forget();
        self.seen.lock().unwrap().push(item);
        Ok(())
    }

    async fn finish(&mut self) {
        *self.finished.lock().unwrap() = true;
    }
}

fn gated(capacity: usize) -> (Pipeline<u32>, Arc<Semaphore>, Arc<Mutex<Vec<u32>>>, Arc<Mutex<bool>>) {
    let gate = Arc::new(Semaphore::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let finished = Arc::new(Mutex::new(false));
    let pipeline = Pipeline::spawn(
        PipelineConfig::new("gated", capacity),
        GatedRecorder {
            gate: Arc::clone(&gate),
            seen: Arc::clone(&seen),
            finished: Arc::clone(&finished),
        },
    );
    (pipeline, gate, seen, finished)
}

#[tokio::test]
async fn items_are_handled_in_submission_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let pipeline = Pipeline::spawn(
        PipelineConfig::new("ordered", 16),
        FnHandler::new(move |item: u32| -> Result<(), String> {
            sink.lock().unwrap().push(item);
            Ok(())
        }),
    );

    for i in 0..500 {
        pipeline.submit(i).await.unwrap();
    }
    let processed = pipeline.close().await.unwrap();

    assert_eq!(processed, 500);
    assert_eq!(*seen.lock().unwrap(), (0..500).collect::<Vec<_>>());
}

#[tokio::test]
async fn handler_errors_do_not_stop_the_worker() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let pipeline = Pipeline::spawn(
        PipelineConfig::named("flaky"),
        FnHandler::new(move |item: u32| {
            if item % 2 == 0 {
                return Err(format!("even item {item}"));
            }
            sink.lock().unwrap().push(item);
            Ok(())
        }),
    );

    for i in 0..6 {
        pipeline.submit(i).await.unwrap();
    }
    assert_eq!(pipeline.close().await.unwrap(), 6);
    assert_eq!(*seen.lock().unwrap(), vec![1, 3, 5]);
}

#[tokio::test]
async fn submit_after_close_is_rejected() {
    let pipeline = Pipeline::spawn(
        PipelineConfig::named("closed"),
        FnHandler::new(|_: u32| -> Result<(), String> { Ok(()) }),
    );
    pipeline.close().await.unwrap();

    let err = pipeline.submit(1).await.unwrap_err();
    assert_eq!(
        err,
        PipelineError::Closed {
            pipeline: "closed".into()
        }
    );
    assert!(pipeline.flush().await.is_err());
}

#[tokio::test]
async fn close_drains_already_enqueued_items() {
    let (pipeline, gate, seen, finished) = gated(8);
    for i in 0..5 {
        pipeline.submit(i).await.unwrap();
    }
    assert!(seen.lock().unwrap().is_empty());

    gate.add_permits(5);
    let processed = pipeline.close().await.unwrap();

    assert_eq!(processed, 5);
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    assert!(*finished.lock().unwrap());
}

#[tokio::test]
async fn full_buffer_applies_backpressure() {
    let (pipeline, gate, seen, _) = gated(1);

    // The worker takes item 0 and stalls on the gate; item 1 fills the buffer.
    pipeline.submit(0).await.unwrap();
    pipeline.submit(1).await.unwrap();

    let blocked = timeout(Duration::from_millis(50), pipeline.submit(2)).await;
    assert!(blocked.is_err(), "submit should wait while the buffer is full");

    gate.add_permits(3);
    pipeline.submit(3).await.unwrap();
    pipeline.flush().await.unwrap();

    // Item 2 was abandoned by the timed-out caller and never enqueued.
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 3]);
    pipeline.close().await.unwrap();
}

#[tokio::test]
async fn concurrent_producers_lose_nothing() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let pipeline = Arc::new(Pipeline::spawn(
        PipelineConfig::new("fan-in", 4),
        FnHandler::new(move |item: u32| -> Result<(), String> {
            sink.lock().unwrap().push(item);
            Ok(())
        }),
    ));

    let mut tasks = Vec::new();
    for producer in 0..8u32 {
        let pipeline = Arc::clone(&pipeline);
        tasks.push(tokio::spawn(async move {
            for i in 0..25u32 {
                pipeline.submit(producer * 100 + i).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    pipeline.close().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 200);
    // Per-producer order is preserved even though producers interleave.
    for producer in 0..8u32 {
        let mine: Vec<u32> = seen
            .iter()
            .copied()
            .filter(|item| item / 100 == producer)
            .collect();
        assert_eq!(mine, (0..25).map(|i| producer * 100 + i).collect::<Vec<_>>());
    }
}

// src/crawler/worker.rs
// =============================================================================
// This module runs the fixed pool of crawl workers.
//
// Each worker is a tokio task looping: pop from the frontier -> process
// the task -> mark it done -> repeat. A worker exits when pop() reports
// the frontier drained (empty queue, nothing in flight), so the pool as a
// whole winds down exactly when no task can produce further work.
//
// task_done() is called only after process() has fully returned - that is,
// after the task's child links were pushed - which is what makes the
// frontier's drain detection sound.
// =============================================================================

use crate::crawler::frontier::Frontier;
use crate::crawler::processor::PageProcessor;
use futures::future::join_all;
use std::sync::Arc;

// Runs `worker_count` workers until the frontier is drained.
//
// Suspends the caller until every worker has exited. Processing order
// across workers is not deterministic, and doesn't need to be: word
// counts are order-independent.
pub async fn run_worker_pool(
    worker_count: usize,
    frontier: Arc<Frontier>,
    processor: Arc<PageProcessor>,
) {
    let workers: Vec<_> = (0..worker_count)
        .map(|_| {
            let frontier = Arc::clone(&frontier);
            let processor = Arc::clone(&processor);
            tokio::spawn(async move {
                while let Some(task) = frontier.pop().await {
                    processor.process(&task).await;
                    frontier.task_done();
                }
            })
        })
        .collect();

    // A worker task only ends by returning (nothing aborts it), so these
    // joins can't fail in practice; a panic inside a worker would surface
    // here and is a bug we'd want loudly
    for result in join_all(workers).await {
        result.expect("crawl worker panicked");
    }
}

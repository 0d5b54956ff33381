// src/crawler/frontier.rs
// =============================================================================
// This module implements the crawl frontier: the shared queue of pending
// (URL, depth) work items, plus the two pieces of bookkeeping that make a
// concurrent crawl correct:
//
// 1. The visited set. A URL enters it at most once, at enqueue time, under
//    the same lock as the queue - so two workers can never both enqueue
//    (and later process) the same URL, no matter how many link paths lead
//    to it.
//
// 2. The in-flight counter. "Queue is empty" is NOT the same as "crawl is
//    finished": a worker that popped the last task may be about to push
//    ten more. The frontier is only drained when the queue is empty AND
//    no popped task is still being processed. pop() blocks on exactly
//    that condition.
//
// Rust concepts:
// - tokio::sync::Mutex: one lock guards queue + visited together
// - AtomicUsize: lock-free in-flight count
// - tokio::sync::Notify: wakes sleeping workers on push and on task_done
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, Notify};

// One unit of crawl work.
//
// Created by the seed and by link discovery, consumed exactly once by a
// worker, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    /// Link distance from the seed; the seed itself is depth 1
    pub depth: usize,
}

// Queue and visited set live under one mutex so the "not yet visited?
// then mark and enqueue" step is atomic with respect to concurrent
// pushers.
struct FrontierState {
    queue: VecDeque<CrawlTask>,
    visited: HashSet<String>,
}

// Thread-safe crawl frontier with built-in dedup and drain detection.
pub struct Frontier {
    state: Mutex<FrontierState>,
    /// Tasks popped but not yet finished (task_done not yet called)
    in_flight: AtomicUsize,
    /// Wakes sleeping pop() calls after a push or a task completion
    wakeup: Notify,
    max_depth: usize,
}

impl Frontier {
    pub fn new(max_depth: usize) -> Self {
        Self {
            state: Mutex::new(FrontierState {
                queue: VecDeque::new(),
                visited: HashSet::new(),
            }),
            in_flight: AtomicUsize::new(0),
            wakeup: Notify::new(),
            max_depth,
        }
    }

    // Enqueues a task unless it is over-depth or its URL was already seen.
    //
    // The depth check comes BEFORE the visited check: an over-depth URL
    // must not enter the visited set, otherwise it could never be crawled
    // later via a shorter path.
    //
    // Returns true if the task was actually enqueued.
    pub async fn push(&self, url: String, depth: usize) -> bool {
        if depth > self.max_depth {
            return false;
        }

        let mut state = self.state.lock().await;
        if !state.visited.insert(url.clone()) {
            // Already visited (or already queued) - drop it
            return false;
        }
        state.queue.push_back(CrawlTask { url, depth });
        drop(state);

        self.wakeup.notify_waiters();
        true
    }

    // Takes the next task, waiting if the queue is momentarily empty but
    // other workers still hold tasks that might push more.
    //
    // Returns None once the frontier is drained: queue empty and nothing
    // in flight. Every worker eventually sees that None and exits.
    pub async fn pop(&self) -> Option<CrawlTask> {
        loop {
            // Register for wakeups BEFORE checking the queue; a push that
            // lands between our check and our sleep would otherwise be a
            // lost wakeup and this worker would sleep forever.
            let notified = self.wakeup.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock().await;
                if let Some(task) = state.queue.pop_front() {
                    // Count the task as in flight while we still hold the
                    // lock, so no other worker can observe "empty queue,
                    // zero in flight" in between
                    self.in_flight.fetch_add(1, Ordering::SeqCst);
                    return Some(task);
                }
                if self.in_flight.load(Ordering::SeqCst) == 0 {
                    return None;
                }
            }

            notified.await;
        }
    }

    // Marks a popped task as fully processed, including any pushes it
    // performed. Must be called exactly once per successful pop().
    pub fn task_done(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        // Waiters re-check the drain condition (and any newly pushed work)
        self.wakeup.notify_waiters();
    }

    /// Number of distinct URLs ever enqueued.
    pub async fn visited_count(&self) -> usize {
        self.state.lock().await.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_push_deduplicates() {
        let frontier = Frontier::new(3);
        assert!(frontier.push("https://example.com/".to_string(), 1).await);
        assert!(!frontier.push("https://example.com/".to_string(), 1).await);
        assert!(!frontier.push("https://example.com/".to_string(), 2).await);
        assert_eq!(frontier.visited_count().await, 1);
    }

    #[tokio::test]
    async fn test_over_depth_rejected_before_dedup() {
        let frontier = Frontier::new(2);
        // Rejected for depth, and must NOT be remembered as visited
        assert!(!frontier.push("https://example.com/deep".to_string(), 3).await);
        assert_eq!(frontier.visited_count().await, 0);
        // The same URL reached via a shorter path is still crawlable
        assert!(frontier.push("https://example.com/deep".to_string(), 2).await);
    }

    #[tokio::test]
    async fn test_pop_returns_tasks_in_order() {
        let frontier = Frontier::new(2);
        frontier.push("https://example.com/a".to_string(), 1).await;
        frontier.push("https://example.com/b".to_string(), 2).await;

        let first = frontier.pop().await.unwrap();
        assert_eq!(first.url, "https://example.com/a");
        assert_eq!(first.depth, 1);
        let second = frontier.pop().await.unwrap();
        assert_eq!(second.url, "https://example.com/b");
    }

    #[tokio::test]
    async fn test_empty_frontier_is_drained_immediately() {
        let frontier = Frontier::new(2);
        assert_eq!(frontier.pop().await, None);
    }

    #[tokio::test]
    async fn test_pop_waits_for_in_flight_task() {
        let frontier = Arc::new(Frontier::new(2));
        frontier.push("https://example.com/".to_string(), 1).await;

        // Worker 1 holds the only task
        let task = frontier.pop().await.unwrap();
        assert_eq!(task.depth, 1);

        // Worker 2 must NOT see "drained" yet - worker 1 might still push
        let waiter = {
            let frontier = Arc::clone(&frontier);
            tokio::spawn(async move { frontier.pop().await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        // Worker 1 pushes a child, then finishes; worker 2 gets the child
        frontier.push("https://example.com/child".to_string(), 2).await;
        frontier.task_done();

        let picked = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(picked.unwrap().url, "https://example.com/child");
    }

    #[tokio::test]
    async fn test_drained_after_last_task_done() {
        let frontier = Arc::new(Frontier::new(1));
        frontier.push("https://example.com/".to_string(), 1).await;

        let task = frontier.pop().await.unwrap();
        assert_eq!(task.url, "https://example.com/");

        let waiter = {
            let frontier = Arc::clone(&frontier);
            tokio::spawn(async move { frontier.pop().await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        // No pushes happened; completing the task drains the frontier
        frontier.task_done();
        let result = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result, None);
    }
}

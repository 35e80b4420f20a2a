use std::thread::{self, JoinHandle};

use flume::{Receiver, Sender, unbounded};

use crate::error::InvalidPatternError;
use crate::finder::{self, Match, SearchQuery};

/// One finished search, tagged with the sequence number of the request
/// that produced it. A completion whose `seq` is older than the latest
/// issued request is stale and must not be applied.
#[derive(Debug)]
pub struct SearchCompletion {
    pub seq: u64,
    pub result: Result<Vec<Match>, InvalidPatternError>,
}

struct SearchTask {
    seq: u64,
    document: String,
    query: SearchQuery,
}

/// Runs searches on a dedicated thread so the owning thread never blocks
/// on a large document or an expensive pattern.
///
/// Requests move in over one channel, completions come back over another;
/// the owning thread polls or blocks on `try_complete`/`recv_complete`
/// and stays the only place navigator state is touched.
pub struct SearchWorker {
    tasks_tx: Option<Sender<SearchTask>>,
    completions_rx: Receiver<SearchCompletion>,
    next_seq: u64,
    thread: Option<JoinHandle<()>>,
}

impl SearchWorker {
    pub fn spawn() -> Self {
        let (tasks_tx, tasks_rx) = unbounded::<SearchTask>();
        let (completions_tx, completions_rx) = unbounded();
        let thread = thread::spawn(move || run(tasks_rx, completions_tx));

        Self {
            tasks_tx: Some(tasks_tx),
            completions_rx,
            next_seq: 0,
            thread: Some(thread),
        }
    }

    /// Queues a search over a snapshot of `document` without blocking.
    /// Returns the sequence number identifying this request.
    pub fn submit(&mut self, document: String, query: SearchQuery) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let task = SearchTask {
            seq,
            document,
            query,
        };
        if let Some(tasks_tx) = &self.tasks_tx {
            let _ = tasks_tx.send(task);
        }
        seq
    }

    /// The most recent sequence number issued by `submit`.
    pub fn latest_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn try_complete(&self) -> Option<SearchCompletion> {
        self.completions_rx.try_recv().ok()
    }

    /// Blocks until the next completion arrives. Returns `None` only if
    /// the worker thread has exited.
    pub fn recv_complete(&self) -> Option<SearchCompletion> {
        self.completions_rx.recv().ok()
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the task channel ends the worker loop.
        self.tasks_tx.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run(tasks_rx: Receiver<SearchTask>, completions_tx: Sender<SearchCompletion>) {
    while let Ok(mut task) = tasks_rx.recv() {
        // Anything still queued supersedes this task; its result could
        // only ever be discarded as stale, so skip straight to the most
        // recent request.
        while let Ok(newer) = tasks_rx.try_recv() {
            log::debug!("search #{} superseded before it ran", task.seq);
            task = newer;
        }

        let result = finder::find(&task.document, &task.query);
        match &result {
            Ok(matches) => log::debug!("search #{} found {} matches", task.seq, matches.len()),
            Err(err) => log::debug!("search #{} failed: {}", task.seq, err),
        }

        let completion = SearchCompletion {
            seq: task.seq,
            result,
        };
        if completions_tx.send(completion).is_err() {
            break;
        }
    }
}

//! Fan-out of independent jobs over worker threads.
//!
//! Workers pull job indices from a shared counter until every index has been
//! handed out. A failing job is recorded and the worker moves on to the next
//! index, so one bad input never holds back the others. A job that panics is
//! recorded as [`Error::JobPanicked`] the same way.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use crate::error::{Error, Result};

/// What a batch produced, ordered by job index.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub completed: Vec<(usize, T)>,
    pub failed: Vec<(usize, Error)>,
    /// Worker threads that died outside of a job.
    pub panicked_workers: Vec<usize>,
}

impl<T> BatchOutcome<T> {
    /// The error of the lowest failed job, else a panic report, else `None`.
    pub fn into_first_failure(self) -> Option<Error> {
        if let Some((_, e)) = self.failed.into_iter().next() {
            return Some(e);
        }
        self.panicked_workers
            .first()
            .map(|&thread_id| Error::WorkerPanicked(thread_id))
    }
}

/// Runs `job(0) .. job(num_jobs - 1)` on up to `num_threads` threads.
pub fn run_batch<T, F>(num_jobs: usize, num_threads: usize, job: F) -> BatchOutcome<T>
where
    T: Send + 'static,
    F: Fn(usize) -> Result<T> + Send + Sync + 'static,
{
    let num_threads = num_threads.max(1).min(num_jobs.max(1));
    let job = Arc::new(job);
    let next_job = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..num_threads)
        .map(|_thread_id| {
            let job = Arc::clone(&job);
            let next_job = Arc::clone(&next_job);

            thread::spawn(move || {
                let mut local_completed = Vec::new();
                let mut local_failed = Vec::new();
                loop {
                    let index = next_job.fetch_add(1, Ordering::Relaxed);
                    if index >= num_jobs {
                        break;
                    }
                    match panic::catch_unwind(AssertUnwindSafe(|| job(index))) {
                        Ok(Ok(result)) => local_completed.push((index, result)),
                        Ok(Err(e)) => local_failed.push((index, e)),
                        Err(_) => local_failed.push((index, Error::JobPanicked(index))),
                    }
                }
                (local_completed, local_failed)
            })
        })
        .collect();

    let mut outcome = BatchOutcome {
        completed: Vec::with_capacity(num_jobs),
        failed: Vec::new(),
        panicked_workers: Vec::new(),
    };
    for (thread_id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok((local_completed, local_failed)) => {
                outcome.completed.extend(local_completed);
                outcome.failed.extend(local_failed);
            }
            Err(_) => outcome.panicked_workers.push(thread_id),
        }
    }
    outcome.completed.sort_by_key(|(index, _)| *index);
    outcome.failed.sort_by_key(|(index, _)| *index);
    outcome
}

//! Runs a closure on several threads that start together.
//!
//! # Examples
//!
//! ```
//! use gnuopt_test_helpers::threads;
//!
//! let doubled = threads::run_together(4, |index| index * 2).expect("threads join");
//! assert_eq!(doubled, [0, 2, 4, 6]);
//! ```

use std::sync::Barrier;
use std::thread;

use anyhow::{Result, anyhow};

/// Runs `task(index)` on `count` scoped threads released by a shared
/// barrier, returning the results in index order.
///
/// # Errors
///
/// Returns an error naming the first thread that panicked.
pub fn run_together<T, F>(count: usize, task: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let barrier = Barrier::new(count);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..count)
            .map(|index| {
                let (barrier, task) = (&barrier, &task);
                scope.spawn(move || {
                    barrier.wait();
                    task(index)
                })
            })
            .collect();
        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| {
                handle
                    .join()
                    .map_err(|_| anyhow!("thread {index} panicked"))
            })
            .collect()
    })
}

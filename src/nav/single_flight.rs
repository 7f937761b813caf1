//! Request coalescing: concurrent identical requests share one task.
//!
//! DESIGN
//! ======
//! A map from request key to a `Shared` handle on the in-flight future.
//! The first caller for a key starts the task; callers arriving before it
//! settles join the same handle, so every one of them observes the same
//! resolved value and exactly one underlying operation runs. The entry is
//! removed once the task settles.
//!
//! Single-threaded (event-loop) concurrency only: `Rc`/`RefCell`, no locks.
//! Suspension happens solely at the awaited task; the map is never borrowed
//! across an await point.

#[cfg(test)]
#[path = "single_flight_test.rs"]
mod single_flight_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use futures::FutureExt as _;
use futures::future::{LocalBoxFuture, Shared};

type SharedTask<T> = Shared<LocalBoxFuture<'static, T>>;

/// Deduplicates concurrent asynchronous work by key.
pub struct SingleFlight<K, T> {
    in_flight: RefCell<HashMap<K, SharedTask<T>>>,
}

impl<K, T> Default for SingleFlight<K, T> {
    fn default() -> Self {
        Self {
            in_flight: RefCell::new(HashMap::new()),
        }
    }
}

impl<K, T> SingleFlight<K, T>
where
    K: Clone + Eq + Hash,
    T: Clone + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `start` for `key`, or join the task a previous caller started.
    ///
    /// `start` is invoked only if no task for `key` is in flight. The entry
    /// is cleared when the task settles; a later `run` starts fresh work.
    pub async fn run<F, Fut>(&self, key: K, start: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + 'static,
    {
        let task = {
            let mut in_flight = self.in_flight.borrow_mut();
            if let Some(existing) = in_flight.get(&key) {
                existing.clone()
            } else {
                let task = start().boxed_local().shared();
                in_flight.insert(key.clone(), task.clone());
                task
            }
        };

        let value = task.clone().await;

        // Clear on settlement, but only our own entry: `forget`/`clear` may
        // have replaced it with a successor task in the meantime.
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.get(&key).is_some_and(|current| current.ptr_eq(&task)) {
            in_flight.remove(&key);
        }

        value
    }

    /// Drop the in-flight task for `key`, if any. Callers already joined to
    /// it still complete with its value; new callers start fresh work.
    pub fn forget(&self, key: &K) {
        self.in_flight.borrow_mut().remove(key);
    }

    /// Drop every in-flight task.
    pub fn clear(&self) {
        self.in_flight.borrow_mut().clear();
    }

    /// Whether a task for `key` is currently in flight.
    pub fn contains(&self, key: &K) -> bool {
        self.in_flight.borrow().contains_key(key)
    }
}

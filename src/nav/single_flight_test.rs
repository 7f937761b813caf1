use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt as _;

use super::*;

#[test]
fn concurrent_callers_join_one_task() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let flight = Rc::new(SingleFlight::<&'static str, i32>::new());
    let starts = Rc::new(Cell::new(0));
    let results = Rc::new(RefCell::new(Vec::new()));

    let (tx, rx) = oneshot::channel::<i32>();
    let rx = Rc::new(RefCell::new(Some(rx)));

    for _ in 0..3 {
        let flight = Rc::clone(&flight);
        let starts = Rc::clone(&starts);
        let results = Rc::clone(&results);
        let rx = Rc::clone(&rx);
        spawner
            .spawn_local(async move {
                let value = flight
                    .run("enrollments", move || {
                        starts.set(starts.get() + 1);
                        let rx = rx.borrow_mut().take().expect("only one task may start");
                        async move { rx.await.unwrap_or(0) }
                    })
                    .await;
                results.borrow_mut().push(value);
            })
            .expect("spawn");
    }

    pool.run_until_stalled();
    assert_eq!(starts.get(), 1, "exactly one task started");
    assert!(flight.contains(&"enrollments"));

    tx.send(7).expect("receiver alive");
    pool.run();

    assert_eq!(*results.borrow(), vec![7, 7, 7]);
    assert!(!flight.contains(&"enrollments"), "entry cleared on settlement");
}

#[test]
fn sequential_runs_start_fresh_tasks() {
    let mut pool = LocalPool::new();
    let flight = SingleFlight::<u8, i32>::new();
    let starts = Cell::new(0);

    for expected in [1, 2] {
        let value = pool.run_until(flight.run(0, || {
            starts.set(starts.get() + 1);
            async { 5 }
        }));
        assert_eq!(value, 5);
        assert_eq!(starts.get(), expected);
    }
}

#[test]
fn distinct_keys_run_distinct_tasks() {
    let mut pool = LocalPool::new();
    let flight = SingleFlight::<u8, u8>::new();
    let a = pool.run_until(flight.run(1, || async { 10 }));
    let b = pool.run_until(flight.run(2, || async { 20 }));
    assert_eq!((a, b), (10, 20));
}

#[test]
fn forget_detaches_inflight_task_from_new_callers() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let flight = Rc::new(SingleFlight::<&'static str, i32>::new());
    let (tx, rx) = oneshot::channel::<i32>();
    let first = Rc::new(RefCell::new(None));

    {
        let flight = Rc::clone(&flight);
        let first = Rc::clone(&first);
        spawner
            .spawn_local(async move {
                let value = flight
                    .run("k", move || async move { rx.await.unwrap_or(0) })
                    .await;
                *first.borrow_mut() = Some(value);
            })
            .expect("spawn");
    }
    pool.run_until_stalled();
    assert!(flight.contains(&"k"));

    flight.forget(&"k");
    assert!(!flight.contains(&"k"));

    // A new caller starts fresh work instead of joining the dropped task.
    let fresh = pool.run_until(flight.run("k", || async { 99 }));
    assert_eq!(fresh, 99);

    // The original caller still completes with the old task's value.
    tx.send(1).expect("receiver alive");
    pool.run();
    assert_eq!(*first.borrow(), Some(1));
}

#[test]
fn settlement_does_not_clear_successor_entry() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let flight = Rc::new(SingleFlight::<&'static str, i32>::new());
    let (tx_old, rx_old) = oneshot::channel::<i32>();
    let (_tx_new, rx_new) = oneshot::channel::<i32>();

    {
        let flight = Rc::clone(&flight);
        spawner
            .spawn_local(async move {
                let _ = flight
                    .run("k", move || async move { rx_old.await.unwrap_or(0) })
                    .await;
            })
            .expect("spawn");
    }
    pool.run_until_stalled();

    // Replace the entry with a successor while the old task is in flight.
    flight.forget(&"k");
    {
        let flight = Rc::clone(&flight);
        spawner
            .spawn_local(async move {
                let _ = flight
                    .run("k", move || async move { rx_new.await.unwrap_or(0) })
                    .await;
            })
            .expect("spawn");
    }
    pool.run_until_stalled();
    assert!(flight.contains(&"k"));

    // Settling the old task must not evict the successor's entry.
    tx_old.send(1).expect("receiver alive");
    pool.run_until_stalled();
    assert!(flight.contains(&"k"));
}

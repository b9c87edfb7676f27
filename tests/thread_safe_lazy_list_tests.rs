//! Integration tests for lazy lists shared across threads.
//!
//! These tests verify that, with the `arc` feature enabled, concurrent first
//! accesses to a tail run its computation exactly once and every thread
//! observes the same nodes.

#![cfg(feature = "arc")]

use lazy_list::sequence::LazyList;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[rstest]
fn concurrent_tail_forced_exactly_once() {
    for _ in 0..100 {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&calls);
        let list = LazyList::new(1, move || {
            handle.fetch_add(1, Ordering::SeqCst);
            LazyList::singleton(2)
        });

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let list = list.clone();
                thread::spawn(move || list.tail().and_then(|tail| tail.head().copied()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("Thread panicked"), Some(2));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

#[rstest]
fn concurrent_iteration_pulls_source_once() {
    let pulls = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&pulls);
    let list = LazyList::from_source((0..1_000).inspect(move |_| {
        handle.fetch_add(1, Ordering::SeqCst);
    }))
    .map(|value| value * 2);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let list = list.clone();
            thread::spawn(move || list.iter().sum::<i32>())
        })
        .collect();

    let expected: i32 = (0..1_000).map(|value| value * 2).sum();
    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
    assert_eq!(pulls.load(Ordering::SeqCst), 1_000);
}

#[rstest]
fn concurrent_filter_observes_identical_nodes() {
    let list = LazyList::from_source(0..500).filter(|value| value % 7 == 0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let list = list.clone();
            thread::spawn(move || list.iter().collect::<Vec<_>>())
        })
        .collect();

    let results: Vec<Vec<i32>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(results[0].len(), 72);
}

#[rstest]
fn inspection_does_not_wait_for_running_computation() {
    let started = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));
    let list = {
        let started = Arc::clone(&started);
        let release = Arc::clone(&release);
        LazyList::new(1, move || {
            started.wait();
            release.wait();
            LazyList::singleton(2)
        })
    };

    let forcing = {
        let list = list.clone();
        thread::spawn(move || list.tail().and_then(|tail| tail.head().copied()))
    };

    started.wait();
    assert_eq!(format!("{list:?}"), "LazyList[1, ..]");
    assert!(!list.is_tail_forced());
    assert!(!list.is_tail_poisoned());
    release.wait();

    assert_eq!(forcing.join().expect("Thread panicked"), Some(2));
    assert!(list.is_tail_forced());
    assert_eq!(format!("{list:?}"), "LazyList[1, 2]");
}

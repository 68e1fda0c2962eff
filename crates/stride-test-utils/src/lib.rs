//! Test utilities and mock oracles for Stride development.
//!
//! Provides [`CountingOracle`], an instrumented
//! [`AdmissibilityOracle`] decorator that records every probe and scratch
//! allocation, plus standard scenario [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    corridor, corridor_oracle, random_state, seeded_rng, wall_world, CORRIDOR_BAND, CORRIDOR_LEN,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use stride_core::{AdmissibilityOracle, ManifoldInstanceId, State};

/// Wraps another oracle and records how it is used.
///
/// Counts admissibility checks, allocations and releases, and keeps a
/// copy of every state passed to `is_admissible` in call order. Intended
/// for asserting probe counts and probe ordering in validator tests.
pub struct CountingOracle {
    inner: Box<dyn AdmissibilityOracle>,
    checks: AtomicUsize,
    allocs: AtomicUsize,
    releases: AtomicUsize,
    probed: Mutex<Vec<State>>,
}

impl CountingOracle {
    pub fn new(inner: impl AdmissibilityOracle + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            checks: AtomicUsize::new(0),
            allocs: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
            probed: Mutex::new(Vec::new()),
        }
    }

    /// Number of `is_admissible` calls since construction or last reset.
    pub fn admissibility_checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    /// Number of `alloc_state` calls.
    pub fn allocations(&self) -> usize {
        self.allocs.load(Ordering::SeqCst)
    }

    /// Number of `release_state` calls.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Every state passed to `is_admissible`, in call order.
    pub fn probed(&self) -> Vec<State> {
        self.probed.lock().unwrap().clone()
    }

    /// Zero all counters and forget recorded probes.
    pub fn reset(&self) {
        self.checks.store(0, Ordering::SeqCst);
        self.allocs.store(0, Ordering::SeqCst);
        self.releases.store(0, Ordering::SeqCst);
        self.probed.lock().unwrap().clear();
    }
}

impl AdmissibilityOracle for CountingOracle {
    fn is_admissible(&self, state: &State) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.probed.lock().unwrap().push(state.clone());
        self.inner.is_admissible(state)
    }

    fn alloc_state(&self) -> State {
        self.allocs.fetch_add(1, Ordering::SeqCst);
        self.inner.alloc_state()
    }

    fn release_state(&self, state: State) {
        self.releases.fetch_add(1, Ordering::SeqCst);
        self.inner.release_state(state);
    }

    fn manifold_id(&self) -> Option<ManifoldInstanceId> {
        self.inner.manifold_id()
    }
}

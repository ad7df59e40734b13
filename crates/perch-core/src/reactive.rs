//! Dependency tracking between signals and observers.
//!
//! An observer is a closure run under tracking: every `Signal::get` it performs
//! records an edge, and a later write to that signal re-runs the observer.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap};

use crate::{Dispose, effect};

pub type SignalId = u64;

slotmap::new_key_type! {
    pub struct ObserverId;
}

thread_local! {
    static CURRENT_OBSERVER: Cell<Option<ObserverId>> = const { Cell::new(None) };
    static NEXT_SIGNAL: Cell<SignalId> = const { Cell::new(1) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
}

#[derive(Default)]
struct DepGraph {
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, BTreeSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: SecondaryMap<ObserverId, BTreeSet<SignalId>>,
    observers: SlotMap<ObserverId, Rc<dyn Fn()>>,
    running: BTreeSet<ObserverId>,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                    if set.is_empty() {
                        self.edges.remove(&s);
                    }
                }
            }
        }
    }

    fn remove_observer(&mut self, obs: ObserverId) {
        self.observers.remove(obs);
        self.remove_all_edges_for(obs);
        self.running.remove(&obs);
    }
}

pub(crate) fn next_signal_id() -> SignalId {
    NEXT_SIGNAL.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

pub fn register_signal_read(sig: SignalId) {
    if let Some(obs) = CURRENT_OBSERVER.with(Cell::get) {
        GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            g.edges.entry(sig).or_default().insert(obs);
            if let Some(set) = g.back.entry(obs) {
                set.or_default().insert(sig);
            }
        });
    }
}

/// Re-runs every observer that read `sig`. An observer already running is
/// skipped, so a rule writing to its own dependency does not recurse.
pub fn signal_changed(sig: SignalId) {
    let dependents: Vec<ObserverId> = GRAPH.with(|g| {
        g.borrow()
            .edges
            .get(&sig)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    });

    for obs in dependents {
        run_guarded(obs);
    }
}

fn run_guarded(obs: ObserverId) {
    let begun = GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        if g.running.contains(&obs) || !g.observers.contains_key(obs) {
            false
        } else {
            g.running.insert(obs);
            true
        }
    });
    if begun {
        run_tracked(obs);
        GRAPH.with(|g| g.borrow_mut().running.remove(&obs));
    }
}

fn run_tracked(obs: ObserverId) {
    let f = GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        // clear previous deps before recompute
        g.remove_all_edges_for(obs);
        g.observers.get(obs).cloned()
    });
    let Some(f) = f else {
        return;
    };

    let prev = CURRENT_OBSERVER.with(|co| co.replace(Some(obs)));
    f();
    CURRENT_OBSERVER.with(|co| co.set(prev));
}

pub fn new_observer(f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| g.borrow_mut().observers.insert(Rc::new(f)))
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    GRAPH.with(|g| g.borrow_mut().remove_observer(id));
}

pub fn run_observer_now(id: ObserverId) {
    run_guarded(id);
}

/// Runs `f` now under tracking and again whenever a signal it read changes.
///
/// The observer lives until the returned `Dispose` runs, which happens
/// automatically when the enclosing scope is disposed.
pub fn observe(f: impl Fn() + 'static) -> Dispose {
    effect(move || {
        let id = new_observer(f);
        run_observer_now(id);
        Dispose::new(move || remove_observer(id))
    })
}

pub fn observer_count() -> usize {
    GRAPH.with(|g| g.borrow().observers.len())
}

/// Signals that currently have at least one observer.
pub fn observed_signal_count() -> usize {
    GRAPH.with(|g| g.borrow().edges.len())
}

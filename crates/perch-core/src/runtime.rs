use std::cell::Cell;

use crate::host::Host;
use crate::lifecycle;
use crate::scope::Scope;
use crate::View;

thread_local! {
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Ask the scheduler for another frame. Every signal write calls this.
pub fn request_frame() {
    FRAME_REQUESTED.with(|f| f.set(true));
}

pub fn frame_requested() -> bool {
    FRAME_REQUESTED.with(Cell::get)
}

fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|f| f.replace(false))
}

/// One composition pass. Effects created outside any mounted instance belong
/// to the guard's scope and are cleaned up when the guard drops.
pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        lifecycle::begin_frame();
        ComposeGuard {
            scope: Scope::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Drives frames: compose, present, commit.
pub struct Scheduler {
    frames: u64,
    /// Upper bound on frames run by one [`Scheduler::settle`] call.
    pub max_settle_frames: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            frames: 0,
            max_settle_frames: 16,
        }
    }

    /// Frames composed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Builds the view tree. Writes made while building request another frame.
    pub fn compose<F>(&mut self, build_root: F) -> View
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        let guard = ComposeGuard::begin();
        take_frame_request();
        let root = guard.scope().run(|| build_root(self));
        self.frames += 1;
        root
    }

    /// One full frame: compose, hand the tree to the host, run lifecycle hooks.
    pub fn frame<F>(&mut self, host: &mut dyn Host, build_root: F) -> View
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        let root = self.compose(build_root);
        host.present(&root);
        lifecycle::commit(host);
        root
    }

    /// Runs frames until no signal was written during the last one.
    pub fn settle<F>(&mut self, host: &mut dyn Host, mut build_root: F) -> View
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let mut root = self.frame(host, &mut build_root);
        for _ in 1..self.max_settle_frames {
            if !frame_requested() {
                return root;
            }
            root = self.frame(host, &mut build_root);
        }
        if frame_requested() {
            log::warn!(
                "scheduler: still dirty after {} frames; giving up until the next request",
                self.max_settle_frames
            );
        }
        root
    }
}

//! Scoped periodic tasks for content data sources.
//!
//! A periodic task is owned by the view that started it. Dropping or cancelling the owning
//! [`ScopedInterval`] tears the browser timer down and releases its [`MountToken`], so any
//! callback that still fires afterwards observes an unmounted owner and skips its update.

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{logging, on_cleanup, set_interval_with_handle};

#[derive(Debug, Clone)]
/// Shared liveness flag between an owner and the callbacks it scheduled.
pub struct MountToken(Rc<Cell<bool>>);

impl MountToken {
    /// Creates a live token.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Returns whether the owner is still mounted.
    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Marks the owner as unmounted. Idempotent.
    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of offering one tick to a [`TickGate`].
pub enum TickOutcome {
    /// The tick body ran to completion.
    Ran,
    /// The owner was already unmounted.
    SkippedUnmounted,
    /// A previous tick was still running.
    SkippedBusy,
}

#[derive(Debug, Default)]
/// Serializes ticks of one periodic task: a tick never starts while another is in progress.
pub struct TickGate {
    busy: Cell<bool>,
}

impl TickGate {
    /// Runs `tick` unless the owner is gone or a previous tick has not finished.
    pub fn run(&self, token: &MountToken, tick: impl FnOnce()) -> TickOutcome {
        if !token.is_live() {
            return TickOutcome::SkippedUnmounted;
        }
        if self.busy.replace(true) {
            return TickOutcome::SkippedBusy;
        }
        tick();
        self.busy.set(false);
        TickOutcome::Ran
    }
}

/// Timer handles that can be torn down exactly once.
pub trait IntervalCancel {
    /// Stops the timer.
    fn cancel(self);
}

impl IntervalCancel for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

#[derive(Debug)]
/// Owned periodic task. The timer is cancelled on [`ScopedInterval::cancel`] or on drop.
pub struct ScopedInterval<H: IntervalCancel = IntervalHandle> {
    handle: Option<H>,
    token: MountToken,
}

impl<H: IntervalCancel> ScopedInterval<H> {
    /// Wraps a running timer and the token its callback checks.
    pub fn new(handle: H, token: MountToken) -> Self {
        Self {
            handle: Some(handle),
            token,
        }
    }

    /// Returns a clone of the liveness token shared with the timer callback.
    pub fn token(&self) -> MountToken {
        self.token.clone()
    }

    /// Returns whether the timer is still scheduled.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Releases the token and stops the timer. Safe to call more than once.
    pub fn cancel(&mut self) {
        self.token.release();
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: IntervalCancel> Drop for ScopedInterval<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Starts a browser interval whose ticks run through a [`TickGate`].
///
/// Returns `None` (after logging) when the host refuses to schedule the timer.
pub fn spawn_scoped_interval(
    period: Duration,
    tick: impl Fn() + 'static,
) -> Option<ScopedInterval> {
    let token = MountToken::new();
    let gate = TickGate::default();
    let tick_token = token.clone();
    match set_interval_with_handle(
        move || {
            gate.run(&tick_token, &tick);
        },
        period,
    ) {
        Ok(handle) => Some(ScopedInterval::new(handle, token)),
        Err(err) => {
            logging::warn!("periodic task scheduling failed: {err:?}");
            None
        }
    }
}

/// Starts a scoped interval bound to the current reactive owner.
///
/// The timer is cancelled when the owner is cleaned up. The returned token lets async work
/// started from a tick check whether the owner is still mounted.
pub fn use_scoped_interval(period: Duration, tick: impl Fn() + 'static) -> MountToken {
    match spawn_scoped_interval(period, tick) {
        Some(task) => {
            let token = task.token();
            on_cleanup(move || drop(task));
            token
        }
        None => {
            let token = MountToken::new();
            token.release();
            token
        }
    }
}

//! Shared contract types between the desktop window manager runtime and hosted window content.
//!
//! The runtime owns every window's position, size and stacking tier. Content receives a
//! [`WindowContentProps`] bundle and may only report interactions back through it. Periodic
//! data sources used by content are scoped through [`scheduler`] so they stop with their owner.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod entropy;
pub mod scheduler;

use std::time::Duration;

use leptos::{Callable, Callback, Signal, SignalGetUntracked, View};

pub use clock::{now_unix_ms, ClockSnapshot};
pub use entropy::{BrowserEntropy, Entropy, ScriptedEntropy};
pub use scheduler::{
    spawn_scoped_interval, use_scoped_interval, IntervalCancel, MountToken, ScopedInterval,
    TickGate, TickOutcome,
};

#[derive(Clone, Copy)]
/// Inputs supplied by the window manager to every hosted window content view.
pub struct WindowContentProps {
    /// Whether the hosting window currently holds input focus.
    pub is_active: Signal<bool>,
    /// Requests that the hosting window be closed.
    pub on_close: Callback<()>,
    /// Requests focus for the hosting window.
    pub on_focus: Callback<()>,
}

impl WindowContentProps {
    /// Creates a props bundle from runtime-owned signals and callbacks.
    pub fn new(is_active: Signal<bool>, on_close: Callback<()>, on_focus: Callback<()>) -> Self {
        Self {
            is_active,
            on_close,
            on_focus,
        }
    }

    /// Raises the hosting window. Content calls this on any interaction that should focus it.
    pub fn request_focus(&self) {
        self.on_focus.call(());
    }

    /// Closes the hosting window.
    pub fn request_close(&self) {
        self.on_close.call(());
    }

    /// Reads the focus flag without subscribing the caller.
    pub fn is_active_untracked(&self) -> bool {
        self.is_active.get_untracked()
    }
}

#[derive(Clone, Copy)]
/// Per-window mount context injected by the runtime when content is rendered.
pub struct ContentMountContext {
    /// Focus/close contract for the hosting window.
    pub props: WindowContentProps,
    /// Refresh period for content that samples periodic data, when it has one.
    pub refresh_every: Option<Duration>,
    /// Number of samples kept by content that renders a history strip.
    pub history_len: usize,
    /// DOM id the content puts on its primary input; the host focuses it when the window is raised.
    pub primary_input_id: Option<&'static str>,
}

/// Static mount function used by the runtime content catalog.
pub type ContentMountFn = fn(ContentMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable content module descriptor used by the runtime window catalog.
pub struct ContentModule {
    mount_fn: ContentMountFn,
}

impl ContentModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: ContentMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the content view with a runtime-provided context.
    pub fn mount(self, context: ContentMountContext) -> View {
        (self.mount_fn)(context)
    }
}

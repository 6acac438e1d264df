//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use desktop_app_contract::now_unix_ms;
use leptos::*;

use crate::{
    config::{shell_config, ShellConfig},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, WindowKind, WindowRect},
    overlays,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host resources for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Embedded shell configuration.
    pub config: &'static ShellConfig,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current desktop viewport available to maximized windows.
    pub fn viewport(&self) -> WindowRect {
        let taskbar_height = i32::try_from(self.config.taskbar_height_px).unwrap_or(i32::MAX);
        self.host.get_value().desktop_viewport_rect(taskbar_height)
    }

    /// Single launch entry point shared by desktop icons and the launcher menu.
    pub fn open(&self, kind: WindowKind) {
        self.dispatch_action(DesktopAction::OpenWindow { kind });
    }

    pub fn focus(&self, kind: WindowKind) {
        self.dispatch_action(DesktopAction::FocusWindow { kind });
    }

    pub fn close(&self, kind: WindowKind) {
        self.dispatch_action(DesktopAction::CloseWindow { kind });
    }

    pub fn toggle_maximize(&self, kind: WindowKind) {
        self.dispatch_action(DesktopAction::ToggleMaximize {
            kind,
            viewport: self.viewport(),
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    let state = create_rw_signal(overlays::seeded_desktop_state(now_unix_ms()));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
        config: shell_config(),
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    let teardown_host = host.get_value();
    on_cleanup(move || teardown_host.teardown());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

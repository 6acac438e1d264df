//! Desktop shell UI composition and interaction surfaces.

mod chatbot;
mod menus;
mod notifications;
mod taskbar;
mod window;

use desktop_app_contract::{use_scoped_interval, ClockSnapshot};
use leptos::*;

use self::{
    chatbot::ChatbotPanel, menus::SystemMenu, notifications::NotificationPanel,
    taskbar::Taskbar, window::DesktopWindow,
};

use crate::{
    apps::{self, LaunchEntry},
    model::{PointerPosition, OVERLAY_Z_INDEX},
    overlays,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Desktop surface: icons, clock widget, open windows, overlay panels and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if overlays::any_open(&state.get_untracked().overlays) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::DismissOverlays);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let any_overlay_open =
        create_memo(move |_| state.with(|desktop| overlays::any_open(&desktop.overlays)));
    let open_kinds = create_memo(move |_| state.with(|desktop| desktop.open_kinds()));

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-kind="desktop-root"
        >
            <div class="desktop-wallpaper" aria-hidden="true"></div>

            <nav class="desktop-icons" aria-label="Desktop">
                {apps::desktop_icons()
                    .iter()
                    .map(|entry| view! { <DesktopIcon entry=*entry /> })
                    .collect_view()}
            </nav>

            <ClockWidget />

            <div class="desktop-window-layer">
                <For each=move || open_kinds.get() key=|kind| *kind let:kind>
                    <DesktopWindow kind=kind />
                </For>
            </div>

            <Show when=move || any_overlay_open.get() fallback=|| ()>
                <div
                    class="overlay-backdrop"
                    style=format!("z-index:{OVERLAY_Z_INDEX};")
                    aria-hidden="true"
                    on:mousedown=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::DismissOverlays);
                    }
                ></div>
            </Show>

            <NotificationPanel />
            <SystemMenu />
            <ChatbotPanel />
            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(entry: LaunchEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let inert = entry.action().is_none();

    view! {
        <button
            type="button"
            class="desktop-icon"
            data-launch-id=entry.id
            aria-disabled=inert.to_string()
            on:click=move |_| {
                if let Some(action) = entry.action() {
                    runtime.dispatch_action(action);
                }
            }
        >
            <span class="desktop-icon-glyph" aria-hidden="true">{entry.glyph}</span>
            <span class="desktop-icon-label">{entry.label}</span>
        </button>
    }
}

#[component]
fn ClockWidget() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let now = create_rw_signal(ClockSnapshot::now());

    use_scoped_interval(runtime.config.clock_tick(), move || {
        now.set(ClockSnapshot::now());
    });

    view! {
        <div class="desktop-clock" role="timer" aria-live="off">
            <div class="desktop-clock-time">{move || now.get().time_label()}</div>
            <div class="desktop-clock-date">{move || now.get().date_label()}</div>
        </div>
    }
}

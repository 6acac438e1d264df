use super::*;
use crate::{
    model::Overlay,
    taskbar::{project_taskbar, TaskbarEntry},
};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let entries = create_memo(move |_| state.with(project_taskbar));
    let overlay_open =
        move |overlay: Overlay| state.with(|desktop| overlays::is_open(&desktop.overlays, overlay));
    let notification_count = move || state.with(|desktop| desktop.notifications.len());
    let toggle =
        move |overlay: Overlay| runtime.dispatch_action(DesktopAction::ToggleOverlay(overlay));

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!(
                "height:{}px;z-index:{};",
                runtime.config.taskbar_height_px,
                OVERLAY_Z_INDEX
            )
        >
            <div class="taskbar-launcher">
                <button
                    type="button"
                    class="taskbar-button taskbar-launcher-button"
                    aria-label="Applications"
                    aria-haspopup="menu"
                    aria-expanded=move || overlay_open(Overlay::LauncherMenu).to_string()
                    on:click=move |_| toggle(Overlay::LauncherMenu)
                >
                    "\u{2630}"
                </button>
                <Show when=move || overlay_open(Overlay::LauncherMenu) fallback=|| ()>
                    <LauncherMenu />
                </Show>
            </div>

            <div class="taskbar-windows">
                <For each=move || entries.get() key=|entry| (entry.kind, entry.active) let:entry>
                    <TaskbarWindowButton entry=entry />
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="taskbar-tray-status" aria-label="Network, volume and battery">
                    "\u{1f4f6} \u{1f50a} \u{1f50b}"
                </span>
                <button
                    type="button"
                    class="taskbar-button taskbar-notifications"
                    aria-label="Notifications"
                    aria-expanded=move || overlay_open(Overlay::Notifications).to_string()
                    on:click=move |_| toggle(Overlay::Notifications)
                >
                    "\u{1f514}"
                    <Show when=move || { notification_count() > 0 } fallback=|| ()>
                        <span class="taskbar-badge">{notification_count}</span>
                    </Show>
                </button>
                <button
                    type="button"
                    class="taskbar-button taskbar-chatbot"
                    aria-label="Assistant"
                    aria-expanded=move || overlay_open(Overlay::Chatbot).to_string()
                    on:click=move |_| toggle(Overlay::Chatbot)
                >
                    "\u{1f916}"
                </button>
                <button
                    type="button"
                    class="taskbar-button taskbar-system"
                    aria-label="System menu"
                    aria-haspopup="menu"
                    aria-expanded=move || overlay_open(Overlay::SystemMenu).to_string()
                    on:click=move |_| toggle(Overlay::SystemMenu)
                >
                    "\u{23fb}"
                </button>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let kind = entry.kind;

    view! {
        <button
            type="button"
            class="taskbar-window-button"
            class:active=entry.active
            aria-pressed=entry.active.to_string()
            on:click=move |_| runtime.focus(kind)
        >
            {entry.label}
        </button>
    }
}

#[component]
fn LauncherMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());
    let matches = Signal::derive(move || query.with(|query| apps::search_launcher(query)));

    let launch = move |entry: LaunchEntry| {
        for action in entry.launcher_actions() {
            runtime.dispatch_action(action);
        }
    };

    view! {
        <div id="launcher-menu" class="launcher-menu" role="menu" aria-label="Applications">
            <input
                class="launcher-search"
                type="search"
                placeholder="Search applications..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="launcher-grid">
                <For each=move || matches.get() key=|entry| entry.id let:entry>
                    <button
                        type="button"
                        class="launcher-entry"
                        role="menuitem"
                        aria-disabled=entry.action().is_none().to_string()
                        on:click=move |_| launch(entry)
                    >
                        <span class="launcher-entry-glyph" aria-hidden="true">{entry.glyph}</span>
                        <span class="launcher-entry-label">{entry.label}</span>
                    </button>
                </For>
            </div>
            <Show when=move || matches.with(Vec::is_empty) fallback=|| ()>
                <p class="launcher-empty">"No applications found"</p>
            </Show>
        </div>
    }
}

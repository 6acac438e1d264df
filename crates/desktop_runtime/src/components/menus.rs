use super::*;
use desktop_app_contract::now_unix_ms;

use crate::model::{NotificationDraft, NotificationLevel, Overlay, WindowKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SystemMenuItem {
    Profile,
    Settings,
    PowerOptions,
}

impl SystemMenuItem {
    const ALL: [SystemMenuItem; 3] = [Self::Profile, Self::Settings, Self::PowerOptions];

    fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::PowerOptions => "Power Options",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Profile => "\u{1f464}",
            Self::Settings => "\u{2699}",
            Self::PowerOptions => "\u{23fb}",
        }
    }

    /// Only Settings is backed by a window; the other items close the menu.
    fn opens(self) -> Option<WindowKind> {
        match self {
            Self::Settings => Some(WindowKind::Settings),
            Self::Profile | Self::PowerOptions => None,
        }
    }

    /// Notice pushed to the notification panel by items without a window.
    fn notice(self, now_unix_ms: u64) -> Option<NotificationDraft> {
        let message = match self {
            Self::Profile => "Signed in as user on localhost.",
            Self::PowerOptions => "Power actions are not available in this session.",
            Self::Settings => return None,
        };
        Some(NotificationDraft {
            level: NotificationLevel::Info,
            title: self.label().to_string(),
            message: message.to_string(),
            timestamp_unix_ms: now_unix_ms,
        })
    }
}

#[component]
pub(super) fn SystemMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = move || state.with(|desktop| desktop.overlays.system_menu);

    let activate = move |item: SystemMenuItem| {
        runtime.dispatch_action(DesktopAction::SetOverlay {
            overlay: Overlay::SystemMenu,
            open: false,
        });
        if let Some(kind) = item.opens() {
            runtime.open(kind);
        }
        if let Some(draft) = item.notice(now_unix_ms()) {
            runtime.dispatch_action(DesktopAction::PushNotification(draft));
        }
    };

    view! {
        <Show when=open fallback=|| ()>
            <div
                id="system-menu"
                class="overlay-panel system-menu"
                role="menu"
                aria-label="System"
                style=format!("z-index:{OVERLAY_Z_INDEX};")
            >
                {SystemMenuItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                type="button"
                                class="system-menu-item"
                                role="menuitem"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    activate(item);
                                }
                            >
                                <span aria-hidden="true">{item.glyph()}</span>
                                <span>{item.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

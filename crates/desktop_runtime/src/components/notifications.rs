use super::*;
use crate::model::{Notification, NotificationLevel};

fn level_glyph(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "\u{2139}",
        NotificationLevel::Warning => "\u{26a0}",
        NotificationLevel::Success => "\u{2714}",
        NotificationLevel::Error => "\u{2716}",
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "notification-info",
        NotificationLevel::Warning => "notification-warning",
        NotificationLevel::Success => "notification-success",
        NotificationLevel::Error => "notification-error",
    }
}

/// Local wall-clock label for a notification timestamp.
fn timestamp_label(notification: &Notification) -> String {
    ClockSnapshot::at_unix_ms(notification.timestamp_unix_ms).time_label()
}

#[component]
pub(super) fn NotificationPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = move || state.with(|desktop| desktop.overlays.notifications);
    let notifications = create_memo(move |_| state.with(|desktop| desktop.notifications.clone()));

    view! {
        <Show when=open fallback=|| ()>
            <aside
                id="notification-panel"
                class="overlay-panel notification-panel"
                aria-label="Notifications"
                style=format!("z-index:{OVERLAY_Z_INDEX};")
            >
                <h2 class="notification-panel-title">"Notifications"</h2>
                <For
                    each=move || notifications.get()
                    key=|notification| notification.id
                    let:notification
                >
                    <NotificationCard notification=notification />
                </For>
                <Show when=move || notifications.with(Vec::is_empty) fallback=|| ()>
                    <p class="notification-empty">"No new notifications"</p>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = notification.id;
    let timestamp = timestamp_label(&notification);

    view! {
        <div class=format!("notification-card {}", level_class(notification.level)) role="status">
            <span class="notification-glyph" aria-hidden="true">{level_glyph(notification.level)}</span>
            <div class="notification-body">
                <div class="notification-title">{notification.title}</div>
                <div class="notification-message">{notification.message}</div>
                <div class="notification-time">{timestamp}</div>
            </div>
            <button
                type="button"
                class="notification-dismiss"
                aria-label="Dismiss notification"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::DismissNotification { id });
                }
            >
                "\u{d7}"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn timestamp_renders_as_wall_clock_time() {
        let notification = Notification {
            id: 1,
            level: NotificationLevel::Success,
            title: "System Update".to_string(),
            message: "Updated".to_string(),
            timestamp_unix_ms: 3_723_000,
        };
        assert_eq!(timestamp_label(&notification), "01:02:03");
    }

    #[test]
    fn each_level_has_its_own_class() {
        let classes = [
            NotificationLevel::Info,
            NotificationLevel::Warning,
            NotificationLevel::Success,
            NotificationLevel::Error,
        ]
        .map(level_class);
        assert_eq!(
            classes,
            [
                "notification-info",
                "notification-warning",
                "notification-success",
                "notification-error",
            ]
        );
    }
}

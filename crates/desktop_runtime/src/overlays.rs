//! Overlay toggles and the notification channel.
//!
//! Overlays sit outside the window registry: they carry no geometry, never take focus and are
//! dismissed together by the shared backdrop.

use crate::model::{
    DesktopState, Notification, NotificationDraft, NotificationLevel, Overlay, OverlayState,
};

const MINUTE_MS: u64 = 60 * 1000;

pub fn is_open(overlays: &OverlayState, overlay: Overlay) -> bool {
    match overlay {
        Overlay::LauncherMenu => overlays.launcher_menu,
        Overlay::SystemMenu => overlays.system_menu,
        Overlay::Notifications => overlays.notifications,
        Overlay::Chatbot => overlays.chatbot,
    }
}

fn slot(overlays: &mut OverlayState, overlay: Overlay) -> &mut bool {
    match overlay {
        Overlay::LauncherMenu => &mut overlays.launcher_menu,
        Overlay::SystemMenu => &mut overlays.system_menu,
        Overlay::Notifications => &mut overlays.notifications,
        Overlay::Chatbot => &mut overlays.chatbot,
    }
}

/// Sets one overlay. Returns `true` when the flag changed.
pub fn set(overlays: &mut OverlayState, overlay: Overlay, open: bool) -> bool {
    let flag = slot(overlays, overlay);
    let changed = *flag != open;
    *flag = open;
    changed
}

/// Flips one overlay without touching the others. Returns the new state.
pub fn toggle(overlays: &mut OverlayState, overlay: Overlay) -> bool {
    let flag = slot(overlays, overlay);
    *flag = !*flag;
    *flag
}

/// Whether the shared backdrop should be rendered.
pub fn any_open(overlays: &OverlayState) -> bool {
    Overlay::ALL
        .into_iter()
        .any(|overlay| is_open(overlays, overlay))
}

/// Closes every overlay. Returns `true` if anything was open.
pub fn dismiss_all(overlays: &mut OverlayState) -> bool {
    let was_open = any_open(overlays);
    *overlays = OverlayState::default();
    was_open
}

/// Appends a notification and returns its id.
pub fn push_notification(state: &mut DesktopState, draft: NotificationDraft) -> u64 {
    let id = state.next_notification_id;
    state.next_notification_id += 1;
    state.notifications.push(Notification {
        id,
        level: draft.level,
        title: draft.title,
        message: draft.message,
        timestamp_unix_ms: draft.timestamp_unix_ms,
    });
    id
}

/// Removes a notification by id. Returns `true` if one was removed.
pub fn dismiss_notification(state: &mut DesktopState, id: u64) -> bool {
    let before = state.notifications.len();
    state.notifications.retain(|notification| notification.id != id);
    state.notifications.len() != before
}

/// Notifications the shell is seeded with at boot, stamped relative to `now_unix_ms`.
pub fn sample_notifications(now_unix_ms: u64) -> Vec<NotificationDraft> {
    let ago = |minutes: u64| now_unix_ms.saturating_sub(minutes * MINUTE_MS);
    vec![
        NotificationDraft {
            level: NotificationLevel::Success,
            title: "System Update".to_string(),
            message: "System updated successfully. Restart recommended.".to_string(),
            timestamp_unix_ms: ago(5),
        },
        NotificationDraft {
            level: NotificationLevel::Warning,
            title: "Disk Space".to_string(),
            message: "Disk space is running low on /home partition.".to_string(),
            timestamp_unix_ms: ago(15),
        },
        NotificationDraft {
            level: NotificationLevel::Info,
            title: "Network".to_string(),
            message: "Connected to WiFi network \"ArchLinux-Home\".".to_string(),
            timestamp_unix_ms: ago(30),
        },
    ]
}

/// Builds the boot state: no windows, no overlays, sample notifications queued.
pub fn seeded_desktop_state(now_unix_ms: u64) -> DesktopState {
    let mut state = DesktopState::default();
    for draft in sample_notifications(now_unix_ms) {
        push_notification(&mut state, draft);
    }
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overlays_toggle_independently() {
        let mut overlays = OverlayState::default();
        assert!(toggle(&mut overlays, Overlay::LauncherMenu));
        assert!(toggle(&mut overlays, Overlay::SystemMenu));

        assert!(overlays.launcher_menu);
        assert!(overlays.system_menu);
        assert!(!overlays.notifications);

        assert!(!toggle(&mut overlays, Overlay::LauncherMenu));
        assert!(overlays.system_menu);
    }

    #[test]
    fn dismiss_all_closes_everything_at_once() {
        let mut overlays = OverlayState::default();
        for overlay in Overlay::ALL {
            set(&mut overlays, overlay, true);
        }
        assert!(any_open(&overlays));

        assert!(dismiss_all(&mut overlays));
        assert_eq!(overlays, OverlayState::default());
        assert!(!dismiss_all(&mut overlays));
    }

    #[test]
    fn set_reports_changes_only() {
        let mut overlays = OverlayState::default();
        assert!(set(&mut overlays, Overlay::Chatbot, true));
        assert!(!set(&mut overlays, Overlay::Chatbot, true));
        assert!(is_open(&overlays, Overlay::Chatbot));
    }

    #[test]
    fn seeded_state_carries_three_samples_newest_first() {
        let now = 60 * MINUTE_MS;
        let state = seeded_desktop_state(now);

        let titles: Vec<_> = state
            .notifications
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["System Update", "Disk Space", "Network"]);
        assert_eq!(state.notifications[1].timestamp_unix_ms, now - 15 * MINUTE_MS);
        assert_eq!(state.notifications[2].level, NotificationLevel::Info);
        assert_eq!(state.next_notification_id, 4);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn sample_timestamps_saturate_near_epoch() {
        let drafts = sample_notifications(0);
        assert!(drafts.iter().all(|draft| draft.timestamp_unix_ms == 0));
    }

    #[test]
    fn notification_ids_are_never_reused() {
        let mut state = seeded_desktop_state(0);
        assert!(dismiss_notification(&mut state, 3));
        assert!(!dismiss_notification(&mut state, 3));

        let id = push_notification(
            &mut state,
            NotificationDraft {
                level: NotificationLevel::Error,
                title: "Service".to_string(),
                message: "sshd failed to start".to_string(),
                timestamp_unix_ms: 0,
            },
        );

        assert_eq!(id, 4);
        let ids: Vec<_> = state.notifications.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}

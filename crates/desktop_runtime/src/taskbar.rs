//! Read-only taskbar projection over the window registry and focus slot.

use crate::model::{DesktopState, WindowKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One taskbar button.
pub struct TaskbarEntry {
    /// Window the button focuses.
    pub kind: WindowKind,
    /// Label from the static label table, or the raw kind id when the table has no entry.
    pub label: String,
    /// Whether the entry matches the focused window.
    pub active: bool,
}

/// Label rendered on a taskbar button for `kind`.
pub fn taskbar_label(kind: WindowKind) -> String {
    kind.taskbar_label()
        .map(str::to_string)
        .unwrap_or_else(|| kind.id().to_string())
}

/// One entry per open window, in open order; at most the focused entry is active.
pub fn project_taskbar(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .map(|window| TaskbarEntry {
            kind: window.kind,
            label: taskbar_label(window.kind),
            active: state.is_focused(window.kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRecord;

    #[test]
    fn store_falls_back_to_raw_id() {
        assert_eq!(taskbar_label(WindowKind::Store), "store");
        assert_eq!(taskbar_label(WindowKind::Processes), "Process Manager");
    }

    #[test]
    fn projection_follows_open_order_and_marks_focus() {
        let mut state = DesktopState::default();
        for kind in [WindowKind::Store, WindowKind::FileManager, WindowKind::Monitor] {
            state.windows.push(WindowRecord::open(kind));
        }
        state.focused = Some(WindowKind::FileManager);

        assert_eq!(
            project_taskbar(&state),
            vec![
                TaskbarEntry {
                    kind: WindowKind::Store,
                    label: "store".to_string(),
                    active: false,
                },
                TaskbarEntry {
                    kind: WindowKind::FileManager,
                    label: "File Manager".to_string(),
                    active: true,
                },
                TaskbarEntry {
                    kind: WindowKind::Monitor,
                    label: "System Monitor".to_string(),
                    active: false,
                },
            ]
        );
    }

    #[test]
    fn empty_registry_projects_nothing() {
        assert!(project_taskbar(&DesktopState::default()).is_empty());
    }
}

//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    model::{DesktopState, NotificationDraft, Overlay, PointerPosition, WindowKind, WindowRect},
    overlays,
    window_manager::{self, DragStart, MaximizeToggle},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window kind (or re-focus it when already open). Sole launch entry point.
    OpenWindow {
        /// Kind to open.
        kind: WindowKind,
    },
    /// Close a window kind.
    CloseWindow {
        /// Kind to close.
        kind: WindowKind,
    },
    /// Focus an open window kind.
    FocusWindow {
        /// Kind to focus.
        kind: WindowKind,
    },
    /// Pointer-down on a title region.
    BeginDrag {
        /// Window being dragged.
        kind: WindowKind,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-move while a drag is active.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up anywhere.
    EndDrag,
    /// Maximize or restore a window.
    ToggleMaximize {
        /// Window to toggle.
        kind: WindowKind,
        /// Desktop viewport (screen minus taskbar) to pin maximized windows to.
        viewport: WindowRect,
    },
    /// The desktop viewport changed size.
    ViewportResized {
        /// New desktop viewport.
        viewport: WindowRect,
    },
    /// Flip one overlay panel.
    ToggleOverlay(Overlay),
    /// Open or close one overlay panel.
    SetOverlay {
        /// Overlay to change.
        overlay: Overlay,
        /// Desired open state.
        open: bool,
    },
    /// Close every overlay (backdrop click or Escape).
    DismissOverlays,
    /// Append a notification to the notification channel.
    PushNotification(NotificationDraft),
    /// Remove one notification.
    DismissNotification {
        /// Notification id.
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window.
    FocusWindowInput(WindowKind),
    /// A window entered the dragging phase; pointer listeners go on the global surface.
    AttachDragListeners,
    /// No window is dragging any more; global pointer listeners must be removed.
    DetachDragListeners,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action is total: actions addressed to windows that are not open, or to geometry
/// states without a matching transition, leave the state untouched.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { kind } => {
            window_manager::open_window(state, kind);
            effects.push(RuntimeEffect::FocusWindowInput(kind));
        }
        DesktopAction::CloseWindow { kind } => {
            let was_focused = state.is_focused(kind);
            if let Some(closed) = window_manager::close_window(state, kind) {
                if closed.was_dragging {
                    effects.push(RuntimeEffect::DetachDragListeners);
                }
                if let (true, Some(next)) = (was_focused, state.focused) {
                    effects.push(RuntimeEffect::FocusWindowInput(next));
                }
            }
        }
        DesktopAction::FocusWindow { kind } => {
            if window_manager::focus_window(state, kind) {
                effects.push(RuntimeEffect::FocusWindowInput(kind));
            }
        }
        DesktopAction::BeginDrag { kind, pointer } => {
            match window_manager::begin_drag(state, kind, pointer) {
                DragStart::Started { replaced: None } => {
                    effects.push(RuntimeEffect::AttachDragListeners);
                }
                DragStart::Started { replaced: Some(_) } => {
                    effects.push(RuntimeEffect::DetachDragListeners);
                    effects.push(RuntimeEffect::AttachDragListeners);
                }
                DragStart::Rejected => {}
            }
        }
        DesktopAction::UpdateDrag { pointer } => {
            window_manager::update_drag(state, pointer);
        }
        DesktopAction::EndDrag => {
            if window_manager::end_drag(state) {
                effects.push(RuntimeEffect::DetachDragListeners);
            }
        }
        DesktopAction::ToggleMaximize { kind, viewport } => {
            if let Some(MaximizeToggle::Maximized { ended_drag: true }) =
                window_manager::toggle_maximize(state, kind, viewport)
            {
                effects.push(RuntimeEffect::DetachDragListeners);
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            window_manager::repin_maximized(state, viewport);
        }
        DesktopAction::ToggleOverlay(overlay) => {
            overlays::toggle(&mut state.overlays, overlay);
        }
        DesktopAction::SetOverlay { overlay, open } => {
            overlays::set(&mut state.overlays, overlay, open);
        }
        DesktopAction::DismissOverlays => {
            overlays::dismiss_all(&mut state.overlays);
        }
        DesktopAction::PushNotification(draft) => {
            overlays::push_notification(state, draft);
        }
        DesktopAction::DismissNotification { id } => {
            overlays::dismiss_notification(state, id);
        }
    }
    effects
}

/// By-value form of [`reduce_desktop`]: `(state, action) -> (state, effects)`.
pub fn transition(
    mut state: DesktopState,
    action: DesktopAction,
) -> (DesktopState, Vec<RuntimeEffect>) {
    let effects = reduce_desktop(&mut state, action);
    (state, effects)
}

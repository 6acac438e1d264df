//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer never touches the DOM. Focus moves and the global pointer listeners used while a
//! window is dragged are owned here and driven by [`RuntimeEffect`] values.

use std::{cell::RefCell, rc::Rc};

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, logging, window_event_listener};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{PointerPosition, WindowKind, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

const FALLBACK_SCREEN_WIDTH: i32 = 1024;
const FALLBACK_SCREEN_HEIGHT: i32 = 768;

struct DragListeners {
    pointer_move: WindowListenerHandle,
    pointer_up: WindowListenerHandle,
    pointer_cancel: WindowListenerHandle,
}

impl DragListeners {
    fn remove(self) {
        self.pointer_move.remove();
        self.pointer_up.remove();
        self.pointer_cancel.remove();
    }
}

/// Global pointer events observed while a window is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPointerEvent {
    /// Pointer moved to a viewport position.
    Move(PointerPosition),
    Up,
    /// Capture lost or the gesture was taken over by the browser (touch panning).
    Cancel,
}

/// Reducer action for a global pointer event during a drag.
pub fn drag_action(event: DragPointerEvent) -> DesktopAction {
    match event {
        DragPointerEvent::Move(pointer) => DesktopAction::UpdateDrag { pointer },
        DragPointerEvent::Up | DragPointerEvent::Cancel => DesktopAction::EndDrag,
    }
}

#[derive(Clone, Default)]
/// Host resources owned by the desktop runtime.
pub struct DesktopHostContext {
    drag_listeners: Rc<RefCell<Option<DragListeners>>>,
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(kind) => focus_window_element(kind),
            RuntimeEffect::AttachDragListeners => self.attach_drag_listeners(runtime),
            RuntimeEffect::DetachDragListeners => self.detach_drag_listeners(),
        }
    }

    /// Whether global pointer listeners are currently installed.
    pub fn drag_listeners_attached(&self) -> bool {
        self.drag_listeners.borrow().is_some()
    }

    fn attach_drag_listeners(&self, runtime: DesktopRuntimeContext) {
        if self.drag_listeners_attached() {
            return;
        }

        let dispatch = move |event| runtime.dispatch_action(drag_action(event));
        let pointer_move = window_event_listener(ev::pointermove, move |ev| {
            dispatch(DragPointerEvent::Move(PointerPosition {
                x: ev.client_x(),
                y: ev.client_y(),
            }));
        });
        let pointer_up = window_event_listener(ev::pointerup, move |_| {
            dispatch(DragPointerEvent::Up);
        });
        let pointer_cancel = window_event_listener(ev::pointercancel, move |_| {
            dispatch(DragPointerEvent::Cancel);
        });
        *self.drag_listeners.borrow_mut() = Some(DragListeners {
            pointer_move,
            pointer_up,
            pointer_cancel,
        });
    }

    fn detach_drag_listeners(&self) {
        let listeners = self.drag_listeners.borrow_mut().take();
        if let Some(listeners) = listeners {
            listeners.remove();
        }
    }

    /// Releases every host resource. Called when the desktop provider is torn down.
    pub fn teardown(&self) {
        self.detach_drag_listeners();
    }

    /// Returns the desktop viewport: the screen minus the height reserved for the taskbar.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_SCREEN_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_SCREEN_HEIGHT);
                return viewport_for_screen(width, height, taskbar_height_px);
            }
        }

        viewport_for_screen(
            FALLBACK_SCREEN_WIDTH,
            FALLBACK_SCREEN_HEIGHT,
            taskbar_height_px,
        )
    }
}

/// Viewport rect for a screen of `width` x `height` with the taskbar strip removed.
pub fn viewport_for_screen(width: i32, height: i32, taskbar_height_px: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: width.max(320),
        h: (height - taskbar_height_px).max(220),
    }
}

/// Moves DOM focus into a window once it has been rendered.
///
/// The primary input wins over the frame. Nothing moves when focus already sits inside the
/// window, so a click that landed on one of its fields keeps it.
fn focus_window_element(kind: WindowKind) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let frame = document.get_element_by_id(&kind.dom_id());
            let focus_inside = match (&frame, document.active_element()) {
                (Some(frame), Some(active)) => frame.contains(Some(active.as_ref())),
                _ => false,
            };
            if focus_inside {
                return;
            }

            let target = kind
                .focus_targets()
                .iter()
                .find_map(|id| document.get_element_by_id(id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            match target {
                Some(element) => {
                    let _ = element.focus();
                }
                None => logging::warn!("focus target for `{kind}` is not mounted"),
            }
        });
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
            .is_err()
        {
            logging::warn!("failed to schedule focus for `{kind}`");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::log!("focus request for `{kind}` ignored outside the browser");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn viewport_reserves_taskbar_height() {
        assert_eq!(
            viewport_for_screen(1280, 720, 56),
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 664,
            }
        );
    }

    #[test]
    fn viewport_has_a_floor_on_tiny_screens() {
        let rect = viewport_for_screen(100, 200, 56);
        assert_eq!((rect.w, rect.h), (320, 220));
    }

    #[test]
    fn cancelled_pointer_ends_the_drag_like_pointer_up() {
        assert_eq!(drag_action(DragPointerEvent::Cancel), DesktopAction::EndDrag);
        assert_eq!(drag_action(DragPointerEvent::Up), DesktopAction::EndDrag);
        assert_eq!(
            drag_action(DragPointerEvent::Move(PointerPosition { x: 4, y: 9 })),
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 4, y: 9 }
            }
        );
    }

    #[test]
    fn cancel_releases_a_dragging_window() {
        let mut state = crate::model::DesktopState::default();
        crate::reducer::reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                kind: WindowKind::Terminal,
            },
        );
        crate::reducer::reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                kind: WindowKind::Terminal,
                pointer: PointerPosition { x: 120, y: 110 },
            },
        );

        let effects =
            crate::reducer::reduce_desktop(&mut state, drag_action(DragPointerEvent::Cancel));

        assert_eq!(effects, vec![RuntimeEffect::DetachDragListeners]);
        assert_eq!(state.dragging_kind(), None);
    }

    #[test]
    fn native_fallback_viewport_uses_default_screen() {
        let host = DesktopHostContext::default();
        assert_eq!(host.desktop_viewport_rect(56).h, 768 - 56);
        assert!(!host.drag_listeners_attached());
    }
}

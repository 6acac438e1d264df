//! Registry, focus and per-window geometry transitions used by the desktop reducer.
//!
//! Every function here is total: operations addressed to a kind that is not open, or to a
//! geometry state without a matching transition, leave the state untouched and report `false`.

use crate::model::{
    DesktopState, DragPhase, PointerOffset, PointerPosition, SizeMode, WindowKind, WindowRecord,
    WindowRect,
};

/// Smallest vertical coordinate a dragged window may reach.
pub const MIN_WINDOW_Y: i32 = 0;

/// Opens `kind` if it is not open yet, then focuses it.
///
/// Returns `true` when a new window record was appended.
pub fn open_window(state: &mut DesktopState, kind: WindowKind) -> bool {
    let appended = if state.is_open(kind) {
        false
    } else {
        state.windows.push(WindowRecord::open(kind));
        true
    };
    focus_window(state, kind);
    appended
}

/// Result of closing an open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedWindow {
    pub kind: WindowKind,
    /// The closed window was mid-drag; its global pointer listeners must be released.
    pub was_dragging: bool,
}

/// Closes `kind` and discards its geometry. Returns `None` when it was not open.
pub fn close_window(state: &mut DesktopState, kind: WindowKind) -> Option<ClosedWindow> {
    // Fallback focus is computed over the open list as it was before removal.
    let before = state.open_kinds();
    let index = before.iter().position(|open| *open == kind)?;

    let removed = state.windows.remove(index);
    if state.focused == Some(kind) {
        state.focused = close_fallback_focus(&before, kind);
    }

    Some(ClosedWindow {
        kind,
        was_dragging: removed.geometry.is_dragging(),
    })
}

/// Focus target after closing the focused window `closed`.
///
/// Picks the element at `before.len() - 2` of the pre-removal open list. The index is invalid
/// when it falls outside the list or lands on `closed` itself, giving `None`.
pub fn close_fallback_focus(before: &[WindowKind], closed: WindowKind) -> Option<WindowKind> {
    let index = before.len().checked_sub(2)?;
    before.get(index).copied().filter(|kind| *kind != closed)
}

/// Focuses `kind` if it is open. Returns `true` when focus changed.
pub fn focus_window(state: &mut DesktopState, kind: WindowKind) -> bool {
    if !state.is_open(kind) || state.focused == Some(kind) {
        return false;
    }
    state.focused = Some(kind);
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    Started {
        /// Another window's drag was ended to start this one.
        replaced: Option<WindowKind>,
    },
    Rejected,
}

/// Enters the dragging phase for `kind` from `Idle + Normal` and focuses it.
pub fn begin_drag(
    state: &mut DesktopState,
    kind: WindowKind,
    pointer: PointerPosition,
) -> DragStart {
    let Some(window) = state.window(kind) else {
        return DragStart::Rejected;
    };
    if window.geometry.is_maximized() || window.geometry.is_dragging() {
        return DragStart::Rejected;
    }

    let replaced = state.dragging_kind();
    if replaced.is_some() {
        end_drag(state);
    }

    if let Some(window) = find_window_mut(state, kind) {
        let origin = window.geometry.rect.origin();
        window.geometry.drag = DragPhase::Dragging {
            offset: PointerOffset {
                dx: pointer.x - origin.x,
                dy: pointer.y - origin.y,
            },
        };
    }
    focus_window(state, kind);
    DragStart::Started { replaced }
}

/// Moves the dragging window so that its recorded offset stays under `pointer`.
pub fn update_drag(state: &mut DesktopState, pointer: PointerPosition) -> bool {
    let Some(window) = state
        .windows
        .iter_mut()
        .find(|w| w.geometry.is_dragging())
    else {
        return false;
    };
    let DragPhase::Dragging { offset } = window.geometry.drag else {
        return false;
    };
    if window.geometry.is_maximized() {
        return false;
    }

    let rect = dragged_rect(window.geometry.rect, pointer, offset);
    if rect == window.geometry.rect {
        return false;
    }
    window.geometry.rect = rect;
    true
}

/// Window rect for a pointer position during a drag. Only the vertical axis is clamped.
pub fn dragged_rect(
    rect: WindowRect,
    pointer: PointerPosition,
    offset: PointerOffset,
) -> WindowRect {
    WindowRect {
        x: pointer.x - offset.dx,
        y: (pointer.y - offset.dy).max(MIN_WINDOW_Y),
        ..rect
    }
}

/// Returns every dragging window to `Idle`. Returns `true` if a drag was in progress.
pub fn end_drag(state: &mut DesktopState) -> bool {
    let mut ended = false;
    for window in &mut state.windows {
        if window.geometry.is_dragging() {
            window.geometry.drag = DragPhase::Idle;
            ended = true;
        }
    }
    ended
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizeToggle {
    Maximized { ended_drag: bool },
    Restored,
}

/// Flips `kind` between `Normal` and `Maximized`.
///
/// Maximizing snapshots the current rect and pins the window to `viewport`; restoring puts the
/// snapshot back unchanged.
pub fn toggle_maximize(
    state: &mut DesktopState,
    kind: WindowKind,
    viewport: WindowRect,
) -> Option<MaximizeToggle> {
    let window = find_window_mut(state, kind)?;
    let geometry = &mut window.geometry;

    match geometry.size_mode {
        SizeMode::Normal => {
            let ended_drag = geometry.is_dragging();
            geometry.drag = DragPhase::Idle;
            geometry.size_mode = SizeMode::Maximized {
                restore: geometry.rect,
            };
            geometry.rect = viewport;
            Some(MaximizeToggle::Maximized { ended_drag })
        }
        SizeMode::Maximized { restore } => {
            geometry.rect = restore;
            geometry.size_mode = SizeMode::Normal;
            Some(MaximizeToggle::Restored)
        }
    }
}

/// Re-pins every maximized window to a resized viewport. Returns `true` if any rect changed.
pub fn repin_maximized(state: &mut DesktopState, viewport: WindowRect) -> bool {
    let mut changed = false;
    for window in &mut state.windows {
        if window.geometry.is_maximized() && window.geometry.rect != viewport {
            window.geometry.rect = viewport;
            changed = true;
        }
    }
    changed
}

fn find_window_mut(state: &mut DesktopState, kind: WindowKind) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.kind == kind)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowKind::{FileManager, Monitor, Terminal};

    fn opened(kinds: &[WindowKind]) -> DesktopState {
        let mut state = DesktopState::default();
        for kind in kinds {
            open_window(&mut state, *kind);
        }
        state
    }

    #[test]
    fn fallback_reads_pre_removal_list() {
        assert_eq!(
            close_fallback_focus(&[FileManager, Terminal, Monitor], Monitor),
            Some(Terminal)
        );
        assert_eq!(close_fallback_focus(&[FileManager], FileManager), None);
        assert_eq!(close_fallback_focus(&[], FileManager), None);
    }

    #[test]
    fn fallback_never_returns_the_closed_kind() {
        assert_eq!(
            close_fallback_focus(&[FileManager, Terminal, Monitor], Terminal),
            None
        );
    }

    #[test]
    fn closing_middle_focused_window_clears_focus() {
        let mut state = opened(&[FileManager, Terminal, Monitor]);
        focus_window(&mut state, Terminal);

        close_window(&mut state, Terminal);

        assert_eq!(state.open_kinds(), vec![FileManager, Monitor]);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn closing_first_of_two_when_focused_leaves_no_focus() {
        let mut state = opened(&[FileManager, Terminal]);
        focus_window(&mut state, FileManager);

        close_window(&mut state, FileManager);

        assert_eq!(state.open_kinds(), vec![Terminal]);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn focus_on_closed_kind_is_ignored() {
        let mut state = opened(&[FileManager]);
        assert!(!focus_window(&mut state, Terminal));
        assert_eq!(state.focused, Some(FileManager));
    }

    #[test]
    fn starting_a_second_drag_ends_the_first() {
        let mut state = opened(&[FileManager, Terminal]);
        begin_drag(&mut state, FileManager, PointerPosition { x: 120, y: 110 });

        let started = begin_drag(&mut state, Terminal, PointerPosition { x: 130, y: 105 });

        assert_eq!(
            started,
            DragStart::Started {
                replaced: Some(FileManager)
            }
        );
        assert_eq!(state.dragging_kind(), Some(Terminal));
        assert!(!state.geometry(FileManager).unwrap().is_dragging());
    }

    #[test]
    fn horizontal_drag_is_unclamped() {
        let rect = WindowRect {
            x: 10,
            y: 10,
            w: 300,
            h: 200,
        };
        let moved = dragged_rect(
            rect,
            PointerPosition { x: -400, y: 20 },
            PointerOffset { dx: 5, dy: 5 },
        );
        assert_eq!(moved.x, -405);
        assert_eq!(moved.y, 15);
        assert_eq!((moved.w, moved.h), (300, 200));
    }

    #[test]
    fn repin_only_touches_maximized_windows() {
        let mut state = opened(&[FileManager, Terminal]);
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 664,
        };
        toggle_maximize(&mut state, Terminal, viewport);
        let resized = WindowRect { w: 1600, ..viewport };

        assert!(repin_maximized(&mut state, resized));
        assert_eq!(state.geometry(Terminal).unwrap().rect, resized);
        assert_eq!(
            state.geometry(FileManager).unwrap().rect,
            FileManager.default_rect()
        );
    }
}

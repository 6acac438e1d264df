use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WINDOW_X: i32 = 100;
pub const DEFAULT_WINDOW_Y: i32 = 100;

/// Closed catalog of window kinds. Each kind is a singleton window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    FileManager,
    Terminal,
    Monitor,
    Processes,
    Store,
    Settings,
}

impl WindowKind {
    pub const ALL: [WindowKind; 6] = [
        Self::FileManager,
        Self::Terminal,
        Self::Monitor,
        Self::Processes,
        Self::Store,
        Self::Settings,
    ];

    /// Symbolic launch identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::FileManager => "filemanager",
            Self::Terminal => "terminal",
            Self::Monitor => "monitor",
            Self::Processes => "processes",
            Self::Store => "store",
            Self::Settings => "settings",
        }
    }

    /// Title bar text.
    pub fn title(self) -> &'static str {
        match self {
            Self::FileManager => "File Manager",
            Self::Terminal => "Terminal",
            Self::Monitor => "System Monitor",
            Self::Processes => "Process Manager",
            Self::Store => "Store",
            Self::Settings => "Settings",
        }
    }

    /// Entry in the static taskbar label table, if the kind has one.
    pub fn taskbar_label(self) -> Option<&'static str> {
        match self {
            Self::FileManager => Some("File Manager"),
            Self::Terminal => Some("Terminal"),
            Self::Monitor => Some("System Monitor"),
            Self::Processes => Some("Process Manager"),
            Self::Settings => Some("Settings"),
            Self::Store => None,
        }
    }

    pub fn default_rect(self) -> WindowRect {
        let (w, h) = match self {
            Self::FileManager => (800, 600),
            Self::Terminal => (700, 500),
            Self::Monitor => (900, 700),
            Self::Processes => (900, 600),
            Self::Store => (640, 420),
            Self::Settings => (600, 400),
        };
        WindowRect {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            w,
            h,
        }
    }

    /// DOM id of the window frame element.
    pub fn dom_id(self) -> String {
        format!("desktop-window-{}", self.id())
    }

    /// DOM id carried by the input that should take keyboard focus when the window is raised.
    pub fn primary_input_dom_id(self) -> Option<&'static str> {
        match self {
            Self::FileManager => Some("window-input-filemanager"),
            Self::Terminal => Some("window-input-terminal"),
            Self::Processes => Some("window-input-processes"),
            Self::Monitor | Self::Store | Self::Settings => None,
        }
    }

    /// Elements tried in order when moving DOM focus into the window.
    pub fn focus_targets(self) -> Vec<String> {
        self.primary_input_dom_id()
            .map(str::to_string)
            .into_iter()
            .chain(std::iter::once(self.dom_id()))
            .collect()
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window kind `{0}`")]
pub struct UnknownWindowKind(pub String);

impl FromStr for WindowKind {
    type Err = UnknownWindowKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == raw)
            .ok_or_else(|| UnknownWindowKind(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn origin(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Pointer position relative to a window's top-left corner, captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        offset: PointerOffset,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeMode {
    #[default]
    Normal,
    /// Pinned to the desktop viewport; `restore` is the rect captured when maximizing.
    Maximized {
        restore: WindowRect,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub rect: WindowRect,
    pub drag: DragPhase,
    pub size_mode: SizeMode,
}

impl WindowGeometry {
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            drag: DragPhase::Idle,
            size_mode: SizeMode::Normal,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self.size_mode, SizeMode::Maximized { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub kind: WindowKind,
    pub geometry: WindowGeometry,
}

impl WindowRecord {
    pub fn open(kind: WindowKind) -> Self {
        Self {
            kind,
            geometry: WindowGeometry::new(kind.default_rect()),
        }
    }
}

/// Binary stacking tier: the focused window sits above every other open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowTier {
    Inactive,
    Active,
}

impl WindowTier {
    pub fn z_index(self) -> u32 {
        match self {
            Self::Inactive => 30,
            Self::Active => 40,
        }
    }
}

/// Z-index used by overlay panels and their backdrop, above both window tiers.
pub const OVERLAY_Z_INDEX: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    LauncherMenu,
    SystemMenu,
    Notifications,
    Chatbot,
}

impl Overlay {
    pub const ALL: [Overlay; 4] = [
        Self::LauncherMenu,
        Self::SystemMenu,
        Self::Notifications,
        Self::Chatbot,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayState {
    pub launcher_menu: bool,
    pub system_menu: bool,
    pub notifications: bool,
    pub chatbot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub timestamp_unix_ms: u64,
}

/// Notification payload before the channel assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub timestamp_unix_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Open windows in open order. A kind appears at most once.
    pub windows: Vec<WindowRecord>,
    /// Focused kind; `None` or a member of `windows`.
    pub focused: Option<WindowKind>,
    pub overlays: OverlayState,
    pub notifications: Vec<Notification>,
    pub next_notification_id: u64,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            overlays: OverlayState::default(),
            notifications: Vec::new(),
            next_notification_id: 1,
        }
    }
}

impl DesktopState {
    /// Open kinds in open order.
    pub fn open_kinds(&self) -> Vec<WindowKind> {
        self.windows.iter().map(|w| w.kind).collect()
    }

    pub fn is_open(&self, kind: WindowKind) -> bool {
        self.windows.iter().any(|w| w.kind == kind)
    }

    pub fn window(&self, kind: WindowKind) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    pub fn geometry(&self, kind: WindowKind) -> Option<&WindowGeometry> {
        self.window(kind).map(|w| &w.geometry)
    }

    pub fn is_focused(&self, kind: WindowKind) -> bool {
        self.focused == Some(kind)
    }

    pub fn tier(&self, kind: WindowKind) -> WindowTier {
        if self.is_focused(kind) {
            WindowTier::Active
        } else {
            WindowTier::Inactive
        }
    }

    /// Kind whose geometry is currently in the dragging phase.
    pub fn dragging_kind(&self) -> Option<WindowKind> {
        self.windows
            .iter()
            .find(|w| w.geometry.is_dragging())
            .map(|w| w.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_round_trip_through_from_str() {
        for kind in WindowKind::ALL {
            assert_eq!(kind.id().parse::<WindowKind>(), Ok(kind));
        }
        assert_eq!(
            "browser".parse::<WindowKind>(),
            Err(UnknownWindowKind("browser".to_string()))
        );
    }

    #[test]
    fn default_geometry_matches_catalog() {
        assert_eq!(
            WindowKind::Monitor.default_rect(),
            WindowRect {
                x: 100,
                y: 100,
                w: 900,
                h: 700
            }
        );
        assert_eq!(WindowKind::Terminal.default_rect().w, 700);
    }

    #[test]
    fn focus_prefers_the_primary_input_over_the_frame() {
        assert_eq!(
            WindowKind::Terminal.focus_targets(),
            vec![
                "window-input-terminal".to_string(),
                "desktop-window-terminal".to_string()
            ]
        );
        assert_eq!(
            WindowKind::Store.focus_targets(),
            vec!["desktop-window-store".to_string()]
        );
    }

    #[test]
    fn focused_window_sits_on_the_active_tier() {
        let mut state = DesktopState::default();
        state.windows.push(WindowRecord::open(WindowKind::Terminal));
        state.windows.push(WindowRecord::open(WindowKind::Store));
        state.focused = Some(WindowKind::Store);

        assert_eq!(state.tier(WindowKind::Store), WindowTier::Active);
        assert_eq!(state.tier(WindowKind::Terminal), WindowTier::Inactive);
        assert!(WindowTier::Active.z_index() > WindowTier::Inactive.z_index());
        assert!(OVERLAY_Z_INDEX > WindowTier::Active.z_index());
    }
}

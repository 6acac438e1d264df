//! Window-manager runtime for the desktop shell: window registry, focus and geometry
//! transitions, overlay panels, and the Leptos components that render them.

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod model;
pub mod overlays;
pub mod reducer;
mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{shell_config, ShellConfig, ShellConfigError};
pub use model::*;
pub use reducer::{reduce_desktop, transition, DesktopAction, RuntimeEffect};
pub use taskbar::{project_taskbar, TaskbarEntry};

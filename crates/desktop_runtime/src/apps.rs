//! Launch catalog and window content dispatch.
//!
//! Desktop icons and the launcher grid are fixed catalogs. Entries with a modeled window kind all
//! resolve to [`DesktopAction::OpenWindow`]; the rest are inert.

mod placeholders;

use std::time::Duration;

use desktop_app_contract::{ContentModule, ContentMountContext, WindowContentProps};
use desktop_app_files::FILE_MANAGER_CONTENT;
use desktop_app_monitor::{PROCESS_MANAGER_CONTENT, SYSTEM_MONITOR_CONTENT};
use desktop_app_terminal::TERMINAL_CONTENT;
use leptos::View;

use crate::{
    config::ShellConfig,
    model::{Overlay, WindowKind},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    Window(WindowKind),
    /// Shown in the catalog without a window behind it.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub target: LaunchTarget,
}

impl LaunchEntry {
    const fn window(
        id: &'static str,
        label: &'static str,
        glyph: &'static str,
        kind: WindowKind,
    ) -> Self {
        Self {
            id,
            label,
            glyph,
            target: LaunchTarget::Window(kind),
        }
    }

    const fn inert(id: &'static str, label: &'static str, glyph: &'static str) -> Self {
        Self {
            id,
            label,
            glyph,
            target: LaunchTarget::Unavailable,
        }
    }

    /// Reducer action for activating this entry, if it launches anything.
    pub fn action(&self) -> Option<DesktopAction> {
        match self.target {
            LaunchTarget::Window(kind) => Some(DesktopAction::OpenWindow { kind }),
            LaunchTarget::Unavailable => None,
        }
    }

    /// Actions dispatched when this entry is picked from the launcher menu. The menu always
    /// closes, inert entries included.
    pub fn launcher_actions(&self) -> Vec<DesktopAction> {
        self.action()
            .into_iter()
            .chain(std::iter::once(DesktopAction::SetOverlay {
                overlay: Overlay::LauncherMenu,
                open: false,
            }))
            .collect()
    }
}

const DESKTOP_ICONS: [LaunchEntry; 8] = [
    LaunchEntry::window("files", "Files", "📁", WindowKind::FileManager),
    LaunchEntry::window("terminal", "Terminal", "💻", WindowKind::Terminal),
    LaunchEntry::window("monitor", "System Monitor", "📊", WindowKind::Monitor),
    LaunchEntry::window("settings", "Settings", "🔧", WindowKind::Settings),
    LaunchEntry::inert("documents", "Documents", "📄"),
    LaunchEntry::inert("pictures", "Pictures", "🖼"),
    LaunchEntry::inert("music", "Music", "🎵"),
    LaunchEntry::inert("videos", "Videos", "🎬"),
];

const LAUNCHER_ENTRIES: [LaunchEntry; 7] = [
    LaunchEntry::window("filemanager", "Files", "📁", WindowKind::FileManager),
    LaunchEntry::window("terminal", "Terminal", "💻", WindowKind::Terminal),
    LaunchEntry::window("monitor", "Monitor", "📊", WindowKind::Monitor),
    LaunchEntry::window("processes", "Tasks", "⚙", WindowKind::Processes),
    LaunchEntry::window("settings", "Settings", "🔧", WindowKind::Settings),
    LaunchEntry::window("store", "Store", "🛒", WindowKind::Store),
    LaunchEntry::inert("browser", "Browser", "🌐"),
];

pub fn desktop_icons() -> &'static [LaunchEntry] {
    &DESKTOP_ICONS
}

pub fn launcher_entries() -> &'static [LaunchEntry] {
    &LAUNCHER_ENTRIES
}

/// Launcher entries whose label contains `query`, ignoring case.
pub fn search_launcher(query: &str) -> Vec<LaunchEntry> {
    let needle = query.trim().to_lowercase();
    launcher_entries()
        .iter()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

fn content_module(kind: WindowKind) -> ContentModule {
    match kind {
        WindowKind::FileManager => FILE_MANAGER_CONTENT,
        WindowKind::Terminal => TERMINAL_CONTENT,
        WindowKind::Monitor => SYSTEM_MONITOR_CONTENT,
        WindowKind::Processes => PROCESS_MANAGER_CONTENT,
        WindowKind::Store => placeholders::STORE_CONTENT,
        WindowKind::Settings => placeholders::SETTINGS_CONTENT,
    }
}

/// Sampling period for content that polls a data source.
pub fn refresh_period(kind: WindowKind, config: &ShellConfig) -> Option<Duration> {
    match kind {
        WindowKind::Monitor => Some(config.monitor_refresh()),
        WindowKind::Processes => Some(config.process_refresh()),
        _ => None,
    }
}

/// Mount context handed to the content of `kind`.
pub fn mount_context(
    kind: WindowKind,
    props: WindowContentProps,
    config: &ShellConfig,
) -> ContentMountContext {
    ContentMountContext {
        props,
        refresh_every: refresh_period(kind, config),
        history_len: config.monitor_history_len,
        primary_input_id: kind.primary_input_dom_id(),
    }
}

pub fn render_window_contents(
    kind: WindowKind,
    props: WindowContentProps,
    config: &ShellConfig,
) -> View {
    content_module(kind).mount(mount_context(kind, props, config))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window_kinds(entries: &[LaunchEntry]) -> Vec<WindowKind> {
        entries
            .iter()
            .filter_map(|entry| match entry.target {
                LaunchTarget::Window(kind) => Some(kind),
                LaunchTarget::Unavailable => None,
            })
            .collect()
    }

    #[test]
    fn media_folders_and_browser_are_inert() {
        let inert: Vec<_> = desktop_icons()
            .iter()
            .chain(launcher_entries())
            .filter(|entry| entry.action().is_none())
            .map(|entry| entry.label)
            .collect();
        assert_eq!(
            inert,
            vec!["Documents", "Pictures", "Music", "Videos", "Browser"]
        );
    }

    #[test]
    fn every_window_kind_is_launchable() {
        let mut launchable = window_kinds(desktop_icons());
        launchable.extend(window_kinds(launcher_entries()));
        for kind in WindowKind::ALL {
            assert!(launchable.contains(&kind), "{kind} has no launch entry");
        }
    }

    #[test]
    fn icon_and_launcher_share_the_open_action() {
        let icon = desktop_icons()[1].action();
        let launcher = launcher_entries()[1].action();
        assert_eq!(icon, launcher);
        assert_eq!(
            icon,
            Some(DesktopAction::OpenWindow {
                kind: WindowKind::Terminal
            })
        );
    }

    #[test]
    fn picking_an_inert_launcher_entry_still_closes_the_menu() {
        let close = DesktopAction::SetOverlay {
            overlay: Overlay::LauncherMenu,
            open: false,
        };
        let browser = search_launcher("browser")[0];
        assert_eq!(browser.launcher_actions(), vec![close.clone()]);

        let terminal = launcher_entries()[1];
        assert_eq!(
            terminal.launcher_actions(),
            vec![
                DesktopAction::OpenWindow {
                    kind: WindowKind::Terminal
                },
                close
            ]
        );
    }

    #[test]
    fn launcher_search_matches_labels() {
        let labels: Vec<_> = search_launcher("s")
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(labels, vec!["Files", "Tasks", "Settings", "Store", "Browser"]);
        assert_eq!(search_launcher("").len(), launcher_entries().len());
    }

    #[test]
    fn only_sampling_windows_get_refresh_periods() {
        let config = ShellConfig::default();
        assert_eq!(
            refresh_period(WindowKind::Monitor, &config),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            refresh_period(WindowKind::Processes, &config),
            Some(Duration::from_secs(3))
        );
        for kind in [WindowKind::FileManager, WindowKind::Terminal, WindowKind::Store] {
            assert_eq!(refresh_period(kind, &config), None);
        }
    }

    #[test]
    fn mount_context_names_the_input_the_host_focuses() {
        let _ = leptos::create_runtime();
        let props = WindowContentProps::new(
            leptos::Signal::derive(|| true),
            leptos::Callback::new(|_| {}),
            leptos::Callback::new(|_| {}),
        );
        let config = ShellConfig::default();

        let terminal = mount_context(WindowKind::Terminal, props, &config);
        assert_eq!(terminal.primary_input_id, Some("window-input-terminal"));
        assert_eq!(terminal.refresh_every, None);
        assert_eq!(
            mount_context(WindowKind::Monitor, props, &config).primary_input_id,
            None
        );
    }
}

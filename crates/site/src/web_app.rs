use desktop_runtime::{
    use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell, UnknownWindowKind,
    WindowKind,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Arch Desktop" />
        <Meta name="description" content="A simulated Linux desktop running in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
            <OpenFromQuery />
        </DesktopProvider>
    }
}

/// Splits a comma-separated `?open=` value into known window kinds and rejected ids.
pub fn parse_open_param(raw: &str) -> (Vec<WindowKind>, Vec<UnknownWindowKind>) {
    let mut kinds = Vec::new();
    let mut rejected = Vec::new();
    for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        match id.parse::<WindowKind>() {
            Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
            Ok(_) => {}
            Err(err) => rejected.push(err),
        }
    }
    (kinds, rejected)
}

/// Opens the windows named by `?open=terminal,monitor` once the desktop has mounted.
#[component]
fn OpenFromQuery() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let raw = query.with_untracked(|map| map.get("open").cloned());

    if let Some(raw) = raw {
        let (kinds, rejected) = parse_open_param(&raw);
        for err in rejected {
            logging::warn!("ignoring deep link: {err}");
        }
        for kind in kinds {
            runtime.dispatch_action(DesktopAction::OpenWindow { kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_param_keeps_order_and_drops_duplicates() {
        let (kinds, rejected) = parse_open_param("terminal, monitor,terminal,,");
        assert_eq!(kinds, vec![WindowKind::Terminal, WindowKind::Monitor]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn open_param_reports_unknown_ids() {
        let (kinds, rejected) = parse_open_param("browser,settings");
        assert_eq!(kinds, vec![WindowKind::Settings]);
        assert_eq!(rejected, vec![UnknownWindowKind("browser".to_string())]);
    }
}

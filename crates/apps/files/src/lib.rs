pub mod listing;

use desktop_app_contract::{ContentModule, ContentMountContext, WindowContentProps};
use leptos::*;

use crate::listing::{breadcrumb, filter_entries, home_entries, FileEntry, ViewMode, HOME_PATH};

/// Content module registered for the file manager window kind.
pub const FILE_MANAGER_CONTENT: ContentModule = ContentModule::new(mount_file_manager);

fn mount_file_manager(context: ContentMountContext) -> View {
    view! { <FileManagerApp props=context.props search_id=context.primary_input_id /> }.into_view()
}

#[component]
pub fn FileManagerApp(
    props: WindowContentProps,
    #[prop(default = None)] search_id: Option<&'static str>,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let view_mode = create_rw_signal(ViewMode::default());
    let selected = create_rw_signal::<Option<&'static str>>(None);

    let visible = Signal::derive(move || filter_entries(home_entries(), &query.get()));
    let crumbs = breadcrumb(HOME_PATH);
    let crumb_count = crumbs.len();

    view! {
        <div
            class="app-shell app-files-shell"
            on:mousedown=move |_| {
                if !props.is_active_untracked() {
                    props.request_focus();
                }
            }
        >
            <div class="app-toolbar">
                <button type="button" disabled=true aria-label="Back">"<"</button>
                <button type="button" disabled=true aria-label="Forward">">"</button>
                <button type="button" aria-label="Home" on:click=move |_| query.set(String::new())>
                    "Home"
                </button>
                <input
                    id=search_id
                    class="app-field files-search"
                    type="search"
                    placeholder="Search files..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class=move || view_toggle_class(view_mode.get() == ViewMode::Grid)
                    on:click=move |_| view_mode.set(ViewMode::Grid)
                >
                    "Grid"
                </button>
                <button
                    type="button"
                    class=move || view_toggle_class(view_mode.get() == ViewMode::List)
                    on:click=move |_| view_mode.set(ViewMode::List)
                >
                    "List"
                </button>
            </div>

            <nav class="files-breadcrumb" aria-label="Path">
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, segment)| {
                        let separator = (idx + 1 < crumb_count)
                            .then(|| view! { <span class="files-crumb-sep">">"</span> });
                        view! {
                            <span class="files-crumb">{segment}</span>
                            {separator}
                        }
                    })
                    .collect_view()}
            </nav>

            <div class=move || format!("files-pane {}", view_mode.get().class())>
                <For each=move || visible.get() key=|entry| entry.name let:entry>
                    <FileRow entry=entry view_mode=view_mode selected=selected />
                </For>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} item(s)", visible.get().len())}</span>
                <span>{move || {
                    selected
                        .get()
                        .map(|name| format!("Selected: {name}"))
                        .unwrap_or_else(|| "Ready".to_string())
                }}</span>
            </div>
        </div>
    }
}

fn view_toggle_class(active: bool) -> &'static str {
    if active {
        "files-view-toggle active"
    } else {
        "files-view-toggle"
    }
}

#[component]
fn FileRow(
    entry: FileEntry,
    view_mode: RwSignal<ViewMode>,
    selected: RwSignal<Option<&'static str>>,
) -> impl IntoView {
    let is_selected = Signal::derive(move || selected.get() == Some(entry.name));
    view! {
        <div
            class=move || if is_selected.get() { "files-entry selected" } else { "files-entry" }
            on:mousedown=move |_| selected.set(Some(entry.name))
        >
            <span class="files-glyph">{entry.glyph()}</span>
            <span class="files-name">{entry.name}</span>
            <Show when=move || view_mode.get() == ViewMode::List fallback=|| ()>
                <span class="files-size">{entry.size.unwrap_or("")}</span>
                <span class="files-modified">{entry.modified}</span>
            </Show>
        </div>
    }
}

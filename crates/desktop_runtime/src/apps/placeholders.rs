//! Built-in placeholder contents for window kinds without a dedicated content crate.

use desktop_app_contract::{ContentModule, ContentMountContext};
use leptos::*;

pub(super) const STORE_CONTENT: ContentModule = ContentModule::new(mount_store_placeholder);
pub(super) const SETTINGS_CONTENT: ContentModule = ContentModule::new(mount_settings_placeholder);

fn mount_store_placeholder(context: ContentMountContext) -> View {
    let props = context.props;
    view! {
        <div class="app-shell app-store-shell" on:mousedown=move |_| props.request_focus()>
            <h3>"Package Manager"</h3>
            <p>
                "Coming soon. Browse system packages, download software, and install mods and "
                "resource packs from here."
            </p>
            <div class="app-statusbar">
                <span>"Status: unavailable"</span>
            </div>
        </div>
    }
    .into_view()
}

fn mount_settings_placeholder(context: ContentMountContext) -> View {
    let props = context.props;
    view! {
        <div class="app-shell app-settings-shell" on:mousedown=move |_| props.request_focus()>
            <h3>"Settings"</h3>
            <ul class="settings-sections">
                <li>"Appearance"</li>
                <li>"Network"</li>
                <li>"Sound"</li>
                <li>"Power"</li>
            </ul>
            <p>"System settings are not configurable in this session."</p>
        </div>
    }
    .into_view()
}

use super::*;
use desktop_app_contract::WindowContentProps;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{WindowKind, WindowRect, WindowTier};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_style(rect: WindowRect, tier: WindowTier) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        tier.z_index()
    )
}

fn swallow_pointer(ev: web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(kind: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let geometry = create_memo(move |_| state.with(|desktop| desktop.geometry(kind).copied()));
    let tier = create_memo(move |_| state.with(|desktop| desktop.tier(kind)));
    let is_active = Signal::derive(move || tier.get() == WindowTier::Active);
    let is_maximized = move || geometry.get().is_some_and(|g| g.is_maximized());
    let is_dragging = move || geometry.get().is_some_and(|g| g.is_dragging());

    let props = WindowContentProps::new(
        is_active,
        Callback::new(move |_| runtime.close(kind)),
        Callback::new(move |_| runtime.focus(kind)),
    );
    // Mounted once; geometry changes only restyle the frame.
    let contents = apps::render_window_contents(kind, props, runtime.config);

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.focus(kind);
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || is_maximized() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            kind,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <section
            id=kind.dom_id()
            class="desktop-window"
            class:focused=move || is_active.get()
            class:maximized=is_maximized
            class:dragging=is_dragging
            style=move || {
                geometry
                    .get()
                    .map(|g| window_style(g.rect, tier.get()))
                    .unwrap_or_default()
            }
            tabindex="-1"
            role="dialog"
            aria-label=kind.title()
            on:pointerdown=focus
        >
            <header class="titlebar" on:pointerdown=begin_drag>
                <div class="titlebar-title">{kind.title()}</div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| stop_mouse_event(&ev)
                    >
                        "\u{2013}"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.toggle_maximize(kind);
                        }
                    >
                        {move || if is_maximized() { "\u{2750}" } else { "\u{25a1}" }}
                    </button>
                    <button
                        type="button"
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.close(kind);
                        }
                    >
                        "\u{d7}"
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn style_places_frame_on_its_tier() {
        let rect = WindowRect {
            x: 100,
            y: 40,
            w: 700,
            h: 500,
        };
        assert_eq!(
            window_style(rect, WindowTier::Active),
            "left:100px;top:40px;width:700px;height:500px;z-index:40;"
        );
        assert!(window_style(rect, WindowTier::Inactive).ends_with("z-index:30;"));
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal surface over a dimmed overlay.
///
/// Screens opened in a modal (editor, finalize, pickers) render their own
/// header and actions; the frame only adds an optional title bar with a close
/// button for read-only content.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, close button, host).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index of the overlay (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for `div.modal`.
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for `div.modal`.
    #[prop(optional)]
    modal_style: Option<String>,
    /// Renders a title bar with a close button.
    #[prop(optional)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let title = title.filter(|t| !t.is_empty());
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay: selecting text inside
    // the modal and releasing outside does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let close_next_tick = move || {
        // the overlay may be removed during its own click dispatch
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_next_tick();
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let modal_style = match modal_style {
        Some(extra) => format!("position: relative; {extra}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=move |ev| ev.stop_propagation()>
                {title.map(|t| view! {
                    <div class="modal__header">
                        <h3 class="modal__title">{t}</h3>
                        <button class="modal__close" title="Cerrar" on:click=move |_| close_next_tick()>
                            {crate::shared::icons::icon("x")}
                        </button>
                    </div>
                })}
                {children()}
            </div>
        </div>
    }
}
